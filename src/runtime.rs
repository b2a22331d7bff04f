//! Event loop plumbing
//!
//! [`GridRuntime`] owns the model and a clipboard, feeds messages through
//! `update` and executes the resulting commands. Commands that produce new
//! messages (clipboard reads) are queued and processed in arrival order
//! before `dispatch` returns, so every event runs to completion.

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::host::{Clipboard, ClipboardError, GridHost};
use crate::input::{InputAdapter, InputEvent};
use crate::messages::{GridMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

pub struct GridRuntime<C: Clipboard> {
    pub model: AppModel,
    pub clipboard: C,
    input: InputAdapter,
    redraw_pending: bool,
}

impl<C: Clipboard> GridRuntime<C> {
    pub fn new(model: AppModel, clipboard: C) -> Self {
        Self {
            model,
            clipboard,
            input: InputAdapter::new(),
            redraw_pending: false,
        }
    }

    /// Translate a host event and dispatch the resulting message, if any
    pub fn handle_input(&mut self, event: &InputEvent, host: &impl GridHost) {
        if let Some(msg) = self.input.translate(event, host, &self.model) {
            self.dispatch(msg);
        }
    }

    /// Run a message (and any messages its commands produce) to completion
    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd, &mut queue);
            }
        }
    }

    /// Whether anything changed on screen since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    fn process_cmd(&mut self, cmd: Cmd, queue: &mut VecDeque<Msg>) {
        if cmd.needs_redraw() {
            self.redraw_pending = true;
        }

        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::RedrawAreas(_) => {}
                Cmd::WriteClipboard { text } => {
                    if let Err(e) = self.clipboard.write_text(&text) {
                        tracing::warn!("Failed to write clipboard: {}", e);
                    } else {
                        tracing::debug!(bytes = text.len(), "copied to clipboard");
                    }
                }
                Cmd::ReadClipboard { target } => match self.read_clipboard() {
                    Some(text) => queue.push_back(Msg::Grid(GridMsg::PasteText { target, text })),
                    None => tracing::debug!("nothing to paste"),
                },
                Cmd::ReadClipboardIntoOverlay => {
                    if let Some(text) = self.read_clipboard() {
                        queue.push_back(Msg::insert_text(text));
                    }
                }
                Cmd::Batch(_) => {}
            }
        }
    }

    fn read_clipboard(&mut self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(text) => Some(text),
            Err(ClipboardError::Empty) => None,
            Err(e) => {
                tracing::warn!("Failed to read clipboard: {}", e);
                None
            }
        }
    }
}
