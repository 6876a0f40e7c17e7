//! Timeline assembly and composite scoring.
//!
//! Bridges the pure period resolver to an ephemeris adapter: builds the
//! natal snapshot, counts hard transits, and scores date ranges by
//! combining period rulers, transits and eclipse proximity.

pub mod composite;
pub mod error;
pub mod natal;
pub mod transit;

pub use composite::{
    CancelToken, CompositeConfig, CompositeResult, ECLIPSE_PROXIMITY_DAYS, ScoreEntry,
    ScoreWeights, composite,
};
pub use error::TimelineError;
pub use natal::natal_context_at;
pub use transit::{
    DEFAULT_ORB_DEG, HardAspect, NatalPoint, TransitHit, hard_transit_count, hard_transits,
};
