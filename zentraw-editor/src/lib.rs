// Editor-facing crate for Zentraw: session state, input mapping, logging setup.

pub mod editor;
pub mod telemetry;

pub use editor::session::EditorSession;
pub use editor::shortcuts::{apply_action, consume_shortcuts, EditorAction};
