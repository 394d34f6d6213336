//! Checkpoint policies: when does a committed edit become an undo step?
//!
//! Granularity is a UX decision, not a property of the stack, so it lives
//! behind a trait the editor session injects. The current time is passed in
//! by the caller rather than read here, which keeps policies deterministic
//! under test.

use std::time::{Duration, Instant};

use tracing::trace;

/// Decides which offered states get recorded into history.
pub trait CheckpointPolicy {
    /// Whether the edit committed at `now` should become a checkpoint.
    ///
    /// A `true` return counts as a recorded checkpoint for any interval
    /// tracking the policy does.
    fn should_record(&mut self, now: Instant) -> bool;
}

/// Records every committed edit. The policy for callers that already push
/// only at meaningful moments (object added, moved, deleted).
#[derive(Debug, Default, Clone, Copy)]
pub struct EveryEdit;

impl CheckpointPolicy for EveryEdit {
    fn should_record(&mut self, _now: Instant) -> bool {
        true
    }
}

/// Records at most one checkpoint per `min_interval`.
///
/// Rapid edit streams (drag handles, per-keystroke text input) collapse into
/// the step that started them; the first offer always records.
#[derive(Debug, Clone)]
pub struct Debounce {
    min_interval: Duration,
    last_recorded: Option<Instant>,
}

impl Debounce {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_recorded: None,
        }
    }
}

impl CheckpointPolicy for Debounce {
    fn should_record(&mut self, now: Instant) -> bool {
        let record = match self.last_recorded {
            None => true,
            Some(last) => now.duration_since(last) >= self.min_interval,
        };
        if record {
            self.last_recorded = Some(now);
        } else {
            trace!("checkpoint debounced");
        }
        record
    }
}
