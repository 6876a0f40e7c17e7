//! Shared primitives and the ephemeris adapter contract for the horai
//! time-lordship engine.
//!
//! This crate provides:
//! - `Body` and `Sign` enums with traditional rulerships
//! - Angle normalization and separation helpers
//! - Civil date ↔ Julian Date (UTC) conversion
//! - The [`EphemerisSource`] capability trait consumed by the period
//!   resolver and the timeline scorer
//!
//! The engine never computes raw planetary positions itself; it only
//! consumes position data through [`EphemerisSource`].

pub mod angles;
pub mod body;
pub mod ephemeris;
pub mod error;
pub mod sign;
pub mod time;

pub use angles::{arc_separation, normalize_360};
pub use body::{ALL_BODIES, Body, CLASSICAL_BODIES};
pub use ephemeris::{BodyPosition, EclipseWindow, EphemerisSource, HouseSystem, Houses};
pub use error::EphemerisError;
pub use sign::{ALL_SIGNS, Sign};
pub use time::{CivilDate, civil_to_jd, days_in_month, jd_to_civil};
