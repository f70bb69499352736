//! Snapshot history for undo/redo over the customer registry.
//!
//! # Responsibility
//! - Store full, independent registry snapshots after each successful change.
//! - Move a cursor backwards/forwards to restore earlier or undone states.
//!
//! # Invariants
//! - `cursor < snapshots.len()` at all times; there is always one snapshot.
//! - `snapshots.len() <= capacity`; oldest snapshots are dropped first.
//! - Committing a state equal to the one at the cursor stores nothing.
//! - Committing after an undo discards the undone (forward) snapshots.
//! - Stored snapshots are never mutated.

use crate::model::registry::CustomerRegistry;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Snapshot capacity used when none is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Undo/redo boundary error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    NoPreviousState,
    NoNextState,
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPreviousState => write!(f, "There are no previous changes to undo"),
            Self::NoNextState => write!(f, "There are no undone changes to redo"),
        }
    }
}

impl Error for HistoryError {}

/// Linear snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct VersionedRegistry {
    snapshots: Vec<CustomerRegistry>,
    cursor: usize,
    capacity: usize,
}

impl VersionedRegistry {
    /// Starts a history whose only snapshot is a copy of `initial`.
    pub fn new(initial: &CustomerRegistry) -> Self {
        Self::with_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Starts a history bounded to `capacity` snapshots (at least one).
    pub fn with_capacity(initial: &CustomerRegistry, capacity: usize) -> Self {
        Self {
            snapshots: vec![initial.clone()],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Records `current` as the newest state unless it equals the state at
    /// the cursor.
    pub fn commit(&mut self, current: &CustomerRegistry) {
        if self.snapshots[self.cursor] != *current {
            self.snapshots.truncate(self.cursor + 1);
            self.snapshots.push(current.clone());
            self.cursor += 1;
        }
        self.trim();
        debug!(
            "event=history_commit module=model status=ok cursor={} snapshots={}",
            self.cursor,
            self.snapshots.len()
        );
    }

    /// Moves one state back and resets `target` to it.
    pub fn undo(&mut self, target: &mut CustomerRegistry) -> Result<(), HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NoPreviousState);
        }
        self.cursor -= 1;
        target.reset_from(&self.snapshots[self.cursor]);
        debug!(
            "event=history_undo module=model status=ok cursor={} snapshots={}",
            self.cursor,
            self.snapshots.len()
        );
        Ok(())
    }

    /// Moves one state forward and resets `target` to it.
    pub fn redo(&mut self, target: &mut CustomerRegistry) -> Result<(), HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NoNextState);
        }
        self.cursor += 1;
        target.reset_from(&self.snapshots[self.cursor]);
        debug!(
            "event=history_redo module=model status=ok cursor={} snapshots={}",
            self.cursor,
            self.snapshots.len()
        );
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &CustomerRegistry {
        &self.snapshots[self.cursor]
    }

    fn trim(&mut self) {
        if self.snapshots.len() <= self.capacity {
            return;
        }
        let overflow = self.snapshots.len() - self.capacity;
        self.snapshots.drain(..overflow);
        self.cursor = self.cursor.saturating_sub(overflow);
    }
}
