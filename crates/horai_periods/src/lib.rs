//! Hierarchical time-lordship period computation.
//!
//! Partitions a lifespan into a tree of nested ruler-attributed intervals
//! under four period systems:
//! - Vimshottari: 120-year cycle of 9 planetary periods seeded by the
//!   natal Moon's nakshatra, proportionally subdivided to any depth
//! - Zodiacal Releasing: 231-year sign cycle from the Lot of Fortune or
//!   Spirit, with calendar-unit substitution per level and a furcation
//!   rule for descending levels
//! - Firdaria: medieval 75-year cycle of 9 rulers, each major period
//!   divided into 7 equal sub-periods
//! - Annual Profection: yearly activation of successive natal houses
//!
//! Periods are computed on demand from an immutable [`NatalContext`];
//! there is no hidden state, and identical inputs always produce
//! identical outputs.

pub mod error;
pub mod firdaria;
pub mod natal;
pub mod profection;
pub mod registry;
pub mod releasing;
pub mod resolve;
pub mod strategy;
pub mod types;
pub mod vimshottari;
pub mod walk;

pub use error::PeriodError;
pub use firdaria::FirdariaStrategy;
pub use natal::{Lot, NatalContext};
pub use profection::ProfectionStrategy;
pub use registry::{
    AYANAMSA_DEG, DAYS_PER_YEAR, FIRDARIA_TOTAL_YEARS, NAKSHATRA_SPAN_DEG,
    RELEASING_DAYS_PER_YEAR, RELEASING_TOTAL_YEARS, VIMSHOTTARI_TOTAL_YEARS, firdaria_sequence,
    releasing_years, ruler_sequence_for, vimshottari_sequence,
};
pub use releasing::{ReleasingFlagPolicy, ReleasingStrategy, TraditionalFlagPolicy};
pub use resolve::{resolve_periods, strategy_for};
pub use strategy::SubdivisionStrategy;
pub use types::{ALL_PERIOD_SYSTEMS, MAX_RESOLVE_LEVEL, Period, PeriodSystem, Ruler};
pub use vimshottari::VimshottariStrategy;
pub use walk::{PeriodWalk, WalkEntry, verify_partition};
