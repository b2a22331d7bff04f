//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod grid;
mod menu;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use edit::update_edit;
pub use grid::update_grid;
pub use menu::update_menu;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// grid invariants after every message.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after grid state and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::editable::TextEditMsg;
    use crate::messages::EditMsg;

    // Keystrokes in the overlay are too noisy to log one by one
    let is_noisy = matches!(&msg, Msg::Edit(EditMsg::Text(TextEditMsg::InsertChar(_))));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = GridSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = GridSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "grid", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);
    result
}

/// Display name for a message, e.g. `Grid::Advance` or `Menu::Dismiss`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
    }
}
