//! Lazy, restartable period sequences.
//!
//! A [`PeriodWalk`] describes one level of a period hierarchy as data: an
//! ordered ruler sequence with durations, a start instant, an optional
//! first-period balance deduction, and either a cyclic wrap (an
//! infinite-but-lazy sequence, never eagerly materialized) or a finite
//! partition snapped to a parent's end. Iteration generates periods on
//! demand; the walk itself is immutable and can be restarted at will.

use crate::error::PeriodError;
use crate::types::{Period, PeriodSystem, Ruler};

/// Hard cap on steps taken while searching a walk, to bound degenerate
/// inputs (zero-length entries would otherwise loop forever).
pub const MAX_WALK_STEPS: usize = 100_000;

/// Relative epsilon for partition invariant checks.
pub const PARTITION_EPSILON: f64 = 1e-6;

/// One entry of a walk: a ruler, its span in days, and advisory flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkEntry {
    pub ruler: Ruler,
    pub days: f64,
    pub peak: bool,
    pub loosening: bool,
}

impl WalkEntry {
    /// Entry with both advisory flags cleared.
    pub const fn plain(ruler: Ruler, days: f64) -> Self {
        Self {
            ruler,
            days,
            peak: false,
            loosening: false,
        }
    }
}

/// A lazily evaluated sequence of periods at one hierarchy level.
#[derive(Debug, Clone)]
pub struct PeriodWalk {
    system: PeriodSystem,
    level: u8,
    entries: Vec<WalkEntry>,
    start_jd: f64,
    first_balance_days: Option<f64>,
    wrap: bool,
    snap_end: Option<f64>,
}

impl PeriodWalk {
    /// An infinite cyclic walk: after the last entry the sequence restarts
    /// from the first, guaranteeing an answer at any future horizon.
    pub fn cyclic(
        system: PeriodSystem,
        level: u8,
        entries: Vec<WalkEntry>,
        start_jd: f64,
        first_balance_days: Option<f64>,
    ) -> Self {
        Self {
            system,
            level,
            entries,
            start_jd,
            first_balance_days,
            wrap: true,
            snap_end: None,
        }
    }

    /// A finite partition of a parent span: exactly one pass through the
    /// entries, with the last period's end snapped to `end_jd` to absorb
    /// floating-point drift.
    pub fn partition(
        system: PeriodSystem,
        level: u8,
        entries: Vec<WalkEntry>,
        start_jd: f64,
        end_jd: f64,
    ) -> Self {
        Self {
            system,
            level,
            entries,
            start_jd,
            first_balance_days: None,
            wrap: false,
            snap_end: Some(end_jd),
        }
    }

    /// True when this walk partitions a parent span exactly.
    pub fn is_partition(&self) -> bool {
        self.snap_end.is_some()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    /// Iterate periods from the walk start. Infinite when cyclic.
    pub fn iter(&self) -> WalkIter<'_> {
        WalkIter {
            walk: self,
            pos: 0,
            cursor_jd: self.start_jd,
        }
    }

    /// The active period at `query_jd` under the end-exclusive rule.
    ///
    /// Returns `None` if a finite walk ends before the query instant or
    /// the step cap is hit.
    pub fn active_at(&self, query_jd: f64) -> Option<Period> {
        self.iter()
            .take(MAX_WALK_STEPS)
            .find(|p| query_jd < p.end_jd)
    }

    /// Exactly one pass through the entries (balance and snap applied).
    pub fn one_pass(&self) -> Vec<Period> {
        self.iter().take(self.entries.len()).collect()
    }
}

/// Iterator over a walk's periods.
pub struct WalkIter<'a> {
    walk: &'a PeriodWalk,
    pos: usize,
    cursor_jd: f64,
}

impl Iterator for WalkIter<'_> {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let n = self.walk.entries.len();
        if n == 0 || (!self.walk.wrap && self.pos >= n) {
            return None;
        }

        let entry = self.walk.entries[self.pos % n];
        let duration = match (self.pos, self.walk.first_balance_days) {
            (0, Some(balance)) => balance,
            _ => entry.days,
        };

        let mut end = self.cursor_jd + duration;
        if !self.walk.wrap && self.pos == n - 1 {
            if let Some(snap) = self.walk.snap_end {
                end = snap;
            }
        }

        let period = Period {
            system: self.walk.system,
            level: self.walk.level,
            ruler: entry.ruler,
            start_jd: self.cursor_jd,
            end_jd: end,
            order: (self.pos + 1).min(u16::MAX as usize) as u16,
            peak: entry.peak,
            loosening: entry.loosening,
        };

        self.pos += 1;
        self.cursor_jd = end;
        Some(period)
    }
}

/// Check that a sibling set is a gapless, overlap-free partition of its
/// parent within [`PARTITION_EPSILON`] relative error.
pub fn verify_partition(children: &[Period], parent: &Period) -> Result<(), PeriodError> {
    let first = children
        .first()
        .ok_or(PeriodError::Invariant("partition has no children"))?;
    let last = children[children.len() - 1];

    let parent_duration = parent.duration_days();
    let tolerance = PARTITION_EPSILON * parent_duration.abs().max(1.0);

    if (first.start_jd - parent.start_jd).abs() > tolerance {
        return Err(PeriodError::Invariant(
            "first child does not start at parent start",
        ));
    }
    if (last.end_jd - parent.end_jd).abs() > tolerance {
        return Err(PeriodError::Invariant(
            "last child does not end at parent end",
        ));
    }
    for pair in children.windows(2) {
        if (pair[1].start_jd - pair[0].end_jd).abs() > tolerance {
            return Err(PeriodError::Invariant("gap or overlap between siblings"));
        }
    }
    let sum: f64 = children.iter().map(|c| c.duration_days()).sum();
    if (sum - parent_duration).abs() > tolerance {
        return Err(PeriodError::Invariant(
            "sibling durations do not sum to parent duration",
        ));
    }
    Ok(())
}
