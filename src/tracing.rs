//! Tracing setup and grid-state diffs for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=grid=debug` - state diffs from the update loop
//! - `RUST_LOG=treegrid::grid::paste=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/treegrid/logs/treegrid.log` with daily rotation,
//! at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_NAME;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). If the logs directory
/// cannot be created, only the console layer is installed.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of grid state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub group_count: usize,
    /// Leaf count per group, in group order
    pub leaf_counts: Vec<usize>,
    pub cursor: Option<(String, usize)>,
    pub selected: usize,
    /// Target of the open overlay, if any
    pub editing: Option<String>,
}

impl GridSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let grid = &model.grid;
        Self {
            group_count: grid.groups().len(),
            leaf_counts: grid
                .groups()
                .iter()
                .map(|g| grid.children_of(g).map(|children| children.len()).unwrap_or(0))
                .collect(),
            cursor: model
                .cursor
                .row
                .as_ref()
                .map(|row| (row.to_string(), model.cursor.column)),
            selected: model.selection.len(),
            editing: model.session.target().map(ToString::to_string),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.group_count != other.group_count {
            changes.push(format!("groups: {} → {}", self.group_count, other.group_count));
        }
        let before: usize = self.leaf_counts.iter().sum();
        let after: usize = other.leaf_counts.iter().sum();
        if before != after {
            changes.push(format!("leaves: {} → {}", before, after));
        }
        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor: {} → {}",
                describe_cursor(&self.cursor),
                describe_cursor(&other.cursor)
            ));
        }
        if self.selected != other.selected {
            changes.push(format!("selected: {} → {}", self.selected, other.selected));
        }
        match (&self.editing, &other.editing) {
            (None, Some(target)) => changes.push(format!("overlay opened on {}", target)),
            (Some(_), None) => changes.push("overlay closed".to_string()),
            (Some(a), Some(b)) if a != b => changes.push(format!("overlay moved {} → {}", a, b)),
            _ => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe_cursor(cursor: &Option<(String, usize)>) -> String {
    match cursor {
        Some((row, column)) => format!("{}#{}", row, column),
        None => "none".to_string(),
    }
}
