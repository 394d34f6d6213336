//! zentraw-history: bounded snapshot history for the Zentraw editor.
//!
//! Design rules:
//! - History is linear, not a tree: pushing a new state discards the redo branch.
//! - Boundary calls (undo with an empty past, redo with an empty future) are
//!   no-ops, never errors. UI buttons key off `can_undo`/`can_redo`, but the
//!   operations stay safe to call regardless.
//! - The past is bounded; the oldest checkpoints are evicted first.
//! - Snapshot granularity is a caller policy, injected via [`CheckpointPolicy`].
//!
//! # Usage
//!
//! ```
//! use zentraw_history::History;
//!
//! let mut history = History::new("draft 1".to_string());
//! history.push_state("draft 2".to_string());
//! assert!(history.can_undo());
//!
//! history.undo();
//! assert_eq!(history.present(), "draft 1");
//!
//! history.redo();
//! assert_eq!(history.present(), "draft 2");
//! ```

use std::collections::VecDeque;
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod checkpoint;

pub use checkpoint::{CheckpointPolicy, Debounce, EveryEdit};

/// Default bound on the number of undo steps kept in memory.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Linear undo/redo history over an arbitrary snapshot type.
///
/// Three zones: `past` (states behind the current one, oldest first),
/// `present` (always defined), and `future` (undone states, nearest redo
/// first). Every state the caller has visited lives in exactly one zone.
///
/// The snapshot type is opaque to the stack; callers decide what one state
/// means (typically a full serialized document) and when to record one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History<T> {
    /// Checkpoints behind `present`, oldest first. Bounded by `max_depth`.
    past: Vec<T>,
    /// The current snapshot.
    present: T,
    /// Checkpoints undone from `present`, nearest redo first.
    future: VecDeque<T>,
    /// Maximum number of past entries retained; oldest are evicted beyond it.
    max_depth: usize,
}

impl<T> History<T> {
    /// Create a history holding only `initial`, bounded to [`DEFAULT_MAX_DEPTH`].
    pub fn new(initial: T) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_DEPTH)
    }

    /// Create a history holding only `initial`, keeping at most `max_depth`
    /// undo steps. A depth of zero disables undo entirely.
    pub fn with_max_depth(initial: T, max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
            max_depth,
        }
    }

    /// Record a new state. The old present moves onto the past, and any
    /// pending redo branch is discarded for good.
    pub fn push_state(&mut self, new_state: T) {
        self.future.clear();
        let previous = mem::replace(&mut self.present, new_state);
        self.past.push(previous);

        while self.past.len() > self.max_depth {
            self.past.remove(0);
        }

        debug!(undo_depth = self.past.len(), "history state pushed");
    }

    /// Step back one state. Returns `false` (leaving everything untouched)
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = mem::replace(&mut self.present, previous);
                self.future.push_front(current);
                debug!(
                    undo_remaining = self.past.len(),
                    redo_available = self.future.len(),
                    "undo"
                );
                true
            }
            None => false,
        }
    }

    /// Step forward one state. Returns `false` (leaving everything untouched)
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop_front() {
            Some(next) => {
                let current = mem::replace(&mut self.present, next);
                self.past.push(current);
                debug!(
                    undo_available = self.past.len(),
                    redo_remaining = self.future.len(),
                    "redo"
                );
                true
            }
            None => false,
        }
    }

    /// Replace the present and drop all history, past and future.
    ///
    /// Used when a different document is loaded into the owning session;
    /// history is not meaningful across documents.
    pub fn reset(&mut self, new_state: T) {
        self.past.clear();
        self.future.clear();
        self.present = new_state;
        debug!("history reset");
    }

    /// Whether there is a state to undo to.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether there is a state to redo to.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The current snapshot.
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Number of states reachable via undo.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of states reachable via redo.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// The configured bound on undo depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Re-bound the history, evicting the oldest past entries if the new
    /// bound is tighter than the current depth.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        while self.past.len() > self.max_depth {
            self.past.remove(0);
        }
    }
}
