// crates/travelmap-core/src/history.rs

//! # History Engine
//!
//! Snapshot-based undo/redo over the city and trip collections.
//!
//! ```text
//! commit(s3)
//! ┌──────────────────────────────────────────┐
//! │ Timeline:  [s0, s1, s2, s3]              │
//! │ Cursor:                  ^               │
//! └──────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────┐
//! │ Timeline:  [s0, s1, s2, s3]              │
//! │ Cursor:          ^                       │
//! └──────────────────────────────────────────┘
//!
//! commit(s4): everything after the cursor is truncated first
//! ┌──────────────────────────────────────────┐
//! │ Timeline:  [s0, s1, s4]                  │
//! │ Cursor:              ^                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Each snapshot owns its own copy of the collections, so later edits to
//! the live state can never reach into history.

use crate::model::{City, Trip};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Configuration for [`SnapshotHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept, including the current one.
    /// The oldest snapshot is evicted when this is exceeded.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given depth limit (at least 1).
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }
}

/// An owned copy of the cities and trips at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub cities: Vec<City>,
    pub trips: Vec<Trip>,
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(cities: &[City], trips: &[Trip]) -> Self {
        Self {
            cities: cities.to_vec(),
            trips: trips.to_vec(),
            captured_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::capture(&[], &[])
    }
}

/// Bounded timeline of snapshots with a cursor.
///
/// # Invariants
///
/// 1. The timeline is never empty; it starts with one snapshot.
/// 2. `cursor < timeline.len() <= config.max_depth`.
/// 3. A commit discards every snapshot after the cursor before appending.
pub struct SnapshotHistory {
    timeline: VecDeque<Snapshot>,
    cursor: usize,
    config: HistoryConfig,
}

impl fmt::Debug for SnapshotHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotHistory")
            .field("len", &self.timeline.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl SnapshotHistory {
    /// History whose only entry is `initial`, cursor at 0.
    #[must_use]
    pub fn new(initial: Snapshot, config: HistoryConfig) -> Self {
        let mut timeline = VecDeque::new();
        timeline.push_back(initial);
        Self {
            timeline,
            cursor: 0,
            config,
        }
    }

    /// History starting from empty collections.
    #[must_use]
    pub fn with_default_config() -> Self {
        Self::new(Snapshot::empty(), HistoryConfig::default())
    }

    // ====================================================================
    // Transitions
    // ====================================================================

    /// Record the state after a successful mutation.
    pub fn commit(&mut self, cities: &[City], trips: &[Trip]) {
        self.timeline.truncate(self.cursor + 1);
        self.timeline.push_back(Snapshot::capture(cities, trips));
        self.cursor = self.timeline.len() - 1;

        while self.timeline.len() > self.config.max_depth.max(1) {
            self.timeline.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }
        tracing::trace!(
            cursor = self.cursor,
            len = self.timeline.len(),
            "history commit"
        );
    }

    /// Step back one snapshot. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "history undo");
        self.timeline.get(self.cursor)
    }

    /// Step forward one snapshot. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "history redo");
        self.timeline.get(self.cursor)
    }

    /// Drop everything and start over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        self.timeline.clear();
        self.timeline.push_back(initial);
        self.cursor = 0;
    }

    // ====================================================================
    // Query
    // ====================================================================

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.timeline.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots held, including the current one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Always false; the timeline holds at least its initial snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.timeline.get(self.cursor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.timeline.iter()
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::with_default_config()
    }
}
