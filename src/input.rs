//! Host adapter: toolkit events to grid messages
//!
//! A window toolkit reports keys and pointer events in its own terms. The
//! host converts them to [`InputEvent`]s and [`InputAdapter::translate`] turns
//! those into [`Msg`]s, resolving pointer positions through [`GridHost`].
//!
//! | Event                          | Message                          |
//! |--------------------------------|----------------------------------|
//! | double-click on a row          | edit that cell                   |
//! | double-click below the rows    | append a blank row and edit it   |
//! | shift+double-click on a heading| clear that column                |
//! | click on a heading             | sort by it (alternating)         |
//! | Tab                            | advance and edit                 |
//! | Delete                         | delete selected rows             |
//! | Ctrl+C / Ctrl+V                | copy selection / paste at pointer|
//! | right click                    | open the context menu            |
//! | Enter / focus lost (overlay)   | commit                           |
//!
//! Escape is not bound: an edit cannot be cancelled.

use crate::editable::{MoveTarget, TextEditMsg};
use crate::grid::{CellAddress, MenuTarget};
use crate::host::{GridHost, Region};
use crate::messages::{EditMsg, GridMsg, MenuMsg, Msg};
use crate::model::AppModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Delete,
    Backspace,
    Left,
    Right,
    Home,
    End,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    PointerMoved { x: f32, y: f32 },
    Click { x: f32, y: f32, modifiers: Modifiers },
    DoubleClick { x: f32, y: f32, modifiers: Modifiers },
    RightClick { x: f32, y: f32 },
    /// The overlay input lost keyboard focus
    OverlayFocusLost,
}

/// Stateful translator; remembers the last pointer position for Ctrl+V
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    pointer: (f32, f32),
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(
        &mut self,
        event: &InputEvent,
        host: &impl GridHost,
        model: &AppModel,
    ) -> Option<Msg> {
        match *event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = (x, y);
                None
            }
            InputEvent::Click { x, y, modifiers } => {
                self.pointer = (x, y);
                click(host, x, y, modifiers)
            }
            InputEvent::DoubleClick { x, y, modifiers } => {
                self.pointer = (x, y);
                double_click(host, x, y, modifiers)
            }
            InputEvent::RightClick { x, y } => {
                self.pointer = (x, y);
                Some(Msg::Menu(MenuMsg::Open(target_at(host, x, y))))
            }
            InputEvent::OverlayFocusLost => {
                model.is_editing().then_some(Msg::Edit(EditMsg::Blur))
            }
            InputEvent::Key { key, modifiers } => {
                if model.is_editing() {
                    overlay_key(key, modifiers)
                } else {
                    let (x, y) = self.pointer;
                    grid_key(key, modifiers, host, x, y, model)
                }
            }
        }
    }
}

/// Resolve the pointer into a menu/paste location
pub fn target_at(host: &impl GridHost, x: f32, y: f32) -> MenuTarget {
    let region = host.identify_region(x, y);
    let row = match region {
        Region::Tree | Region::Cell => host.identify_row(y),
        Region::Heading | Region::Nothing => None,
    };
    MenuTarget::new(region, row, host.identify_column(x))
}

fn click(host: &impl GridHost, x: f32, y: f32, modifiers: Modifiers) -> Option<Msg> {
    let column = host.identify_column(x);
    match host.identify_region(x, y) {
        Region::Heading => Some(Msg::Grid(GridMsg::HeaderClick { column })),
        Region::Nothing => Some(Msg::Grid(GridMsg::ClearSelection)),
        Region::Tree | Region::Cell => host.identify_row(y).map(|row| {
            Msg::Grid(GridMsg::Select {
                row,
                column,
                extend: modifiers.ctrl,
            })
        }),
    }
}

fn double_click(host: &impl GridHost, x: f32, y: f32, modifiers: Modifiers) -> Option<Msg> {
    let column = host.identify_column(x);
    match (host.identify_region(x, y), modifiers.shift) {
        (Region::Heading, true) => Some(Msg::Grid(GridMsg::ClearColumn { column })),
        (_, true) | (Region::Heading, false) => None,
        (Region::Nothing, false) => Some(Msg::Grid(GridMsg::EditNewRow { column })),
        (Region::Tree | Region::Cell, false) => host
            .identify_row(y)
            .map(|row| Msg::Grid(GridMsg::EditCell(CellAddress::new(row, column)))),
    }
}

fn grid_key(
    key: Key,
    modifiers: Modifiers,
    host: &impl GridHost,
    x: f32,
    y: f32,
    model: &AppModel,
) -> Option<Msg> {
    match key {
        Key::Tab => Some(Msg::Grid(GridMsg::Advance)),
        Key::Delete => Some(Msg::Grid(GridMsg::DeleteSelected)),
        Key::Char('c' | 'C') if modifiers.ctrl => Some(Msg::Grid(GridMsg::CopySelection)),
        Key::Char('v' | 'V') if modifiers.ctrl => {
            Some(Msg::Grid(GridMsg::PasteAt(target_at(host, x, y))))
        }
        // Treeview convention: Left collapses, Right expands the focused group
        Key::Left | Key::Right => {
            let row = model.cursor.row.as_ref()?;
            let group = model.grid.row(row).ok().filter(|r| r.is_group())?;
            let wants_open = key == Key::Right;
            (group.open != wants_open).then(|| Msg::Grid(GridMsg::ToggleGroup(row.clone())))
        }
        _ => None,
    }
}

fn overlay_key(key: Key, modifiers: Modifiers) -> Option<Msg> {
    let text = |msg: TextEditMsg| Some(Msg::Edit(EditMsg::Text(msg)));
    let movement = |target: MoveTarget| {
        if modifiers.shift {
            text(TextEditMsg::MoveWithSelection(target))
        } else {
            text(TextEditMsg::Move(target))
        }
    };

    match key {
        Key::Enter => Some(Msg::Edit(EditMsg::Confirm)),
        // Focus leaves the overlay (commit), then the cursor advances
        Key::Tab => Some(Msg::Grid(GridMsg::Advance)),
        Key::Escape => None,
        Key::Char('a' | 'A') if modifiers.ctrl => text(TextEditMsg::SelectAll),
        Key::Char('v' | 'V') if modifiers.ctrl => Some(Msg::Edit(EditMsg::PasteClipboard)),
        Key::Char(_) if modifiers.ctrl => None,
        Key::Char(ch) => text(TextEditMsg::InsertChar(ch)),
        Key::Backspace if modifiers.ctrl || modifiers.alt => text(TextEditMsg::DeleteWordBackward),
        Key::Backspace => text(TextEditMsg::DeleteBackward),
        Key::Delete => text(TextEditMsg::DeleteForward),
        Key::Left if modifiers.ctrl || modifiers.alt => movement(MoveTarget::WordLeft),
        Key::Right if modifiers.ctrl || modifiers.alt => movement(MoveTarget::WordRight),
        Key::Left => movement(MoveTarget::Left),
        Key::Right => movement(MoveTarget::Right),
        Key::Home => movement(MoveTarget::Start),
        Key::End => movement(MoveTarget::End),
    }
}
