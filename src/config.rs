//! Grid configuration
//!
//! Stored in `~/.config/treegrid/config.yaml`. The column schema is fixed for
//! the lifetime of a grid; the seed groups are only read at construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{GridResult, GridStore, InsertAt, NewRow, RowId, RowTag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub id: String,
    pub heading: String,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
        }
    }
}

/// Background colour per row tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStyles {
    #[serde(default = "default_group_background")]
    pub group: String,
    #[serde(default = "default_even_background")]
    pub even: String,
    #[serde(default = "default_odd_background")]
    pub odd: String,
}

fn default_group_background() -> String {
    "#06428B".to_string()
}

fn default_even_background() -> String {
    "white".to_string()
}

fn default_odd_background() -> String {
    "lightblue".to_string()
}

impl Default for TagStyles {
    fn default() -> Self {
        Self {
            group: default_group_background(),
            even: default_even_background(),
            odd: default_odd_background(),
        }
    }
}

impl TagStyles {
    pub fn background(&self, tag: RowTag) -> &str {
        match tag {
            RowTag::Group => &self.group,
            RowTag::Even => &self.even,
            RowTag::Odd => &self.odd,
        }
    }
}

/// A group and its initial leaf rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSeed {
    pub label: String,
    #[serde(default = "default_open")]
    pub open: bool,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

fn default_open() -> bool {
    true
}

impl GroupSeed {
    pub fn new<R, S>(label: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            open: true,
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Heading of the label (tree) column
    #[serde(default = "default_label_heading")]
    pub label_heading: String,

    /// Data columns in display order; their count is the grid's column count
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnSpec>,

    #[serde(default)]
    pub tag_styles: TagStyles,

    /// Maximum characters accepted by the overlay editor (unlimited if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_max_length: Option<usize>,

    #[serde(default = "default_groups")]
    pub groups: Vec<GroupSeed>,
}

fn default_label_heading() -> String {
    "Vehicle Type".to_string()
}

fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("column1", "Vehicle Name"),
        ColumnSpec::new("column2", "Year"),
        ColumnSpec::new("column3", "Color"),
        ColumnSpec::new("column4", "Problem"),
    ]
}

fn default_groups() -> Vec<GroupSeed> {
    vec![
        GroupSeed::new(
            "Sedan",
            [
                vec!["Nissan Altama", "2010", "Silver", "Expired Paper Plates"],
                vec!["Subaru Loyal", "1990", "White", "Total S-Box"],
            ],
        ),
        GroupSeed::new("SUVs", [vec!["Blue Whale", "1995", "Broken Door Handle"]]),
    ]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            label_heading: default_label_heading(),
            columns: default_columns(),
            tag_styles: TagStyles::default(),
            overlay_max_length: None,
            groups: default_groups(),
        }
    }
}

impl GridConfig {
    /// A config with the given schema and no rows
    pub fn with_columns(label_heading: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            label_heading: label_heading.into(),
            columns,
            groups: Vec::new(),
            ..Self::default()
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Heading text for a text column (0 = label column)
    pub fn heading(&self, column: usize) -> Option<&str> {
        match column {
            0 => Some(&self.label_heading),
            n => self.columns.get(n - 1).map(|c| c.heading.as_str()),
        }
    }

    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to disk, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build a store holding the configured schema and seed rows
    pub fn build_store(&self) -> GridResult<GridStore> {
        let mut store = GridStore::new(self.column_count());
        for seed in &self.groups {
            let group = store.insert_row(
                &RowId::root(),
                NewRow::group(seed.label.as_str()).with_open(seed.open),
                InsertAt::End,
            )?;
            for values in &seed.rows {
                store.insert_row(&group, NewRow::leaf(values.iter().cloned()), InsertAt::End)?;
            }
        }
        tracing::debug!(
            groups = store.groups().len(),
            rows = store.row_count(),
            "built grid from config"
        );
        Ok(store)
    }
}

impl GridConfig {
    /// Copy of this config whose seed groups are the store's current rows.
    ///
    /// Leaf labels are not part of the seed format and are dropped.
    pub fn with_rows_from(&self, store: &GridStore) -> Self {
        let groups = store
            .groups()
            .iter()
            .filter_map(|id| store.row(id).ok())
            .map(|group| GroupSeed {
                label: group.label.clone(),
                open: group.open,
                rows: group
                    .children
                    .iter()
                    .filter_map(|leaf| store.row(leaf).ok())
                    .map(|leaf| leaf.values.clone())
                    .collect(),
            })
            .collect();
        Self {
            groups,
            ..self.clone()
        }
    }
}
