//! Editor session: owns the working document and its undo history.
//!
//! Sessions are constructed explicitly and dropped at close; there is no
//! process-wide editor state. Several sessions (multiple open tabs) coexist
//! without sharing anything.
//!
//! The history holds the last *checkpointed* state. The working document may
//! run ahead of it while a debounce window is open; `undo` checkpoints those
//! pending edits first, so stepping back never silently discards work the
//! user can see on screen.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};
use zentraw_document::{load_document, save_document, DocumentV1};
use zentraw_history::{CheckpointPolicy, EveryEdit, History, DEFAULT_MAX_DEPTH};

pub struct EditorSession {
    document: DocumentV1,
    history: History<DocumentV1>,
    policy: Box<dyn CheckpointPolicy + Send>,
}

impl EditorSession {
    /// Open a session on a document with an injected checkpoint policy.
    pub fn new(
        document: DocumentV1,
        policy: Box<dyn CheckpointPolicy + Send>,
        max_depth: usize,
    ) -> Self {
        info!(document = %document.name, max_depth, "editor session opened");
        Self {
            history: History::with_max_depth(document.clone(), max_depth),
            document,
            policy,
        }
    }

    /// Session that checkpoints every edit. Used by tests and scripted flows.
    pub fn with_default_policy(document: DocumentV1) -> Self {
        Self::new(document, Box::new(EveryEdit), DEFAULT_MAX_DEPTH)
    }

    /// Open a session from a document file on disk.
    pub fn open(
        path: impl AsRef<Path>,
        policy: Box<dyn CheckpointPolicy + Send>,
        max_depth: usize,
    ) -> anyhow::Result<Self> {
        let document = load_document(path)?;
        Ok(Self::new(document, policy, max_depth))
    }

    /// The document as the user currently sees it.
    pub fn document(&self) -> &DocumentV1 {
        &self.document
    }

    /// Apply an edit to the working document. Whether the result becomes an
    /// undo step is up to the injected checkpoint policy.
    pub fn edit<F>(&mut self, now: Instant, f: F)
    where
        F: FnOnce(&mut DocumentV1),
    {
        f(&mut self.document);
        if self.policy.should_record(now) {
            self.history.push_state(self.document.clone());
        }
    }

    /// Force a checkpoint of the working document (the explicit save-state
    /// shortcut), bypassing the policy. Returns whether one was recorded.
    pub fn checkpoint(&mut self) -> bool {
        if !self.dirty() {
            return false;
        }
        self.history.push_state(self.document.clone());
        debug!("explicit checkpoint recorded");
        true
    }

    /// Step the document back one checkpoint. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        if self.dirty() {
            // Pending debounced edits become a step of their own, so the
            // first undo returns to the last state the user saw recorded.
            self.history.push_state(self.document.clone());
        }
        if self.history.undo() {
            self.document = self.history.present().clone();
            true
        } else {
            false
        }
    }

    /// Step the document forward one checkpoint. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        if self.history.redo() {
            self.document = self.history.present().clone();
            true
        } else {
            false
        }
    }

    /// Whether the undo button should be enabled.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.dirty()
    }

    /// Whether the redo button should be enabled.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Replace the session contents with a different document. Prior history
    /// is not meaningful across documents and is discarded.
    pub fn load_document(&mut self, document: DocumentV1) {
        info!(document = %document.name, "document loaded, history reset");
        self.history.reset(document.clone());
        self.document = document;
    }

    /// Save the working document (not the history) to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        save_document(path, &self.document)
    }

    fn dirty(&self) -> bool {
        self.document != *self.history.present()
    }
}
