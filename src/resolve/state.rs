// src/resolve/state.rs

//! Per-run resolution state.

use std::collections::HashSet;

/// Public, read-only view of where a task is in the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResolveState {
    /// Not reached yet.
    Unseen,
    /// On the active resolution path; its prerequisites are being resolved.
    InProgress,
    /// Command emitted. Terminal for the run.
    Finished,
}

/// Two-colour marking for the depth-first walk.
///
/// A name moves `Unseen -> InProgress -> Finished` and never back. The two
/// sets are disjoint at all times.
#[derive(Debug, Default)]
pub struct ResolutionState<'m> {
    finished: HashSet<&'m str>,
    in_progress: HashSet<&'m str>,
}

impl<'m> ResolutionState<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self, name: &str) -> bool {
        self.finished.contains(name)
    }

    /// Mark `name` as in progress. Returns `false` if it already was, which
    /// means the walk has come back around to it.
    pub fn begin(&mut self, name: &'m str) -> bool {
        debug_assert!(!self.finished.contains(name));
        self.in_progress.insert(name)
    }

    /// Move `name` from in progress to finished.
    pub fn finish(&mut self, name: &'m str) {
        self.in_progress.remove(name);
        self.finished.insert(name);
    }

    pub fn state_of(&self, name: &str) -> TaskResolveState {
        if self.finished.contains(name) {
            TaskResolveState::Finished
        } else if self.in_progress.contains(name) {
            TaskResolveState::InProgress
        } else {
            TaskResolveState::Unseen
        }
    }

    pub fn finished_count(&self) -> usize {
        self.finished.len()
    }
}
