//! treegrid - a two-level editable data grid
//!
//! Group rows own leaf rows; every row carries a label plus one string per
//! data column. The crate holds the grid model, the overlay cell editor,
//! spreadsheet-style paste and the context menu actions, wired together with
//! the Elm Architecture: input becomes a [`Msg`], `update` mutates the
//! [`AppModel`] and returns a [`Cmd`] for the runtime to execute.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod grid;
pub mod host;
pub mod import;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
