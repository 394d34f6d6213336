//! Keyboard shortcuts for history navigation.
//!
//! The chord-to-action mapping is pure data so it can be tested without an
//! egui context; `consume_shortcuts` adapts it to egui input. Conventions:
//! Ctrl+Z undoes, Ctrl+Y and Ctrl+Shift+Z redo, Ctrl+S records an explicit
//! checkpoint. On macOS the Cmd key plays the Ctrl role.

use egui::{Key, Modifiers};
use tracing::debug;

use crate::editor::session::EditorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    Checkpoint,
}

/// Map a pressed chord to its editor action, if any.
pub fn action_for(modifiers: Modifiers, key: Key) -> Option<EditorAction> {
    let command = modifiers.command || modifiers.ctrl || modifiers.mac_cmd;
    if !command {
        return None;
    }

    match (key, modifiers.shift) {
        (Key::Z, true) => Some(EditorAction::Redo),
        (Key::Z, false) => Some(EditorAction::Undo),
        (Key::Y, _) => Some(EditorAction::Redo),
        (Key::S, _) => Some(EditorAction::Checkpoint),
        _ => None,
    }
}

/// Drain history shortcuts from this frame's input. Matching key presses are
/// consumed so downstream widgets don't also react to them.
pub fn consume_shortcuts(ctx: &egui::Context) -> Vec<EditorAction> {
    let mut actions = Vec::new();
    ctx.input_mut(|input| {
        input.events.retain(|event| {
            if let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            {
                if let Some(action) = action_for(*modifiers, *key) {
                    debug!(?action, "shortcut consumed");
                    actions.push(action);
                    return false;
                }
            }
            true
        });
    });
    actions
}

/// Route an action into the session. Returns whether the document changed
/// (or a checkpoint was recorded), so the caller knows to repaint.
pub fn apply_action(session: &mut EditorSession, action: EditorAction) -> bool {
    match action {
        EditorAction::Undo => session.undo(),
        EditorAction::Redo => session.redo(),
        EditorAction::Checkpoint => session.checkpoint(),
    }
}
