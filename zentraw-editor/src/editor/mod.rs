// Editor module for the Zentraw UI.

pub mod session;
pub mod shortcuts;

pub use session::EditorSession;
pub use shortcuts::{consume_shortcuts, EditorAction};
