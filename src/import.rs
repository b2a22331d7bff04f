//! CSV import: build a grid configuration from a flat table
//!
//! The header row names the columns (its first cell becomes the label column
//! heading). In every following record the first field is the group label and
//! the rest are the leaf's values; groups appear in first-seen order.

use std::io::Read;

use crate::config::{ColumnSpec, GridConfig, GroupSeed};

/// Read `reader` as CSV and return `base` with its schema and rows replaced
pub fn config_from_csv<R: Read>(reader: R, base: &GridConfig) -> Result<GridConfig, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut config = base.clone();
    if let Some(label) = headers.get(0) {
        config.label_heading = label.to_string();
    }
    config.columns = headers
        .iter()
        .skip(1)
        .enumerate()
        .map(|(i, heading)| ColumnSpec::new(format!("column{}", i + 1), heading))
        .collect();

    let mut groups: Vec<GroupSeed> = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let Some(label) = record.get(0).filter(|l| !l.is_empty()) else {
            tracing::warn!(record = line + 1, "skipping record without a group label");
            continue;
        };
        let values: Vec<String> = record.iter().skip(1).map(str::to_string).collect();

        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.rows.push(values),
            None => groups.push(GroupSeed {
                label: label.to_string(),
                open: true,
                rows: vec![values],
            }),
        }
    }

    tracing::info!(
        columns = config.columns.len(),
        groups = groups.len(),
        "imported CSV"
    );
    config.groups = groups;
    Ok(config)
}
