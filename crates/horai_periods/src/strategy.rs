//! Capability interface every period system implements.

use crate::error::PeriodError;
use crate::natal::NatalContext;
use crate::types::{Period, PeriodSystem};
use crate::walk::PeriodWalk;

/// A system-specific subdivision algorithm plugged into the resolver.
///
/// The resolver is otherwise system-agnostic: it asks for the level-1
/// walk, selects the active period, then repeatedly subdivides. Dispatch
/// is through this trait, never by system-name matching at call sites.
pub trait SubdivisionStrategy: Send + Sync {
    /// The system this strategy computes.
    fn system(&self) -> PeriodSystem;

    /// Deepest level this system defines.
    fn max_level(&self) -> u8;

    /// The level-1 walk from the birth instant, seeded from the natal
    /// context (Moon's nakshatra, lot sign, or day/night sequence).
    fn level1(&self, natal: &NatalContext) -> Result<PeriodWalk, PeriodError>;

    /// The walk one level below `parent`.
    ///
    /// For partitioning systems this is a finite sibling set spanning the
    /// parent exactly; for Releasing it is a cyclic within-level cursor
    /// walk starting at the parent's start instant.
    fn subdivide(&self, natal: &NatalContext, parent: &Period) -> PeriodWalk;
}
