//! Error type for the ephemeris adapter boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures surfaced by an [`crate::EphemerisSource`] implementation.
///
/// The engine never retries these; they propagate to the caller with the
/// underlying cause intact.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// No backing data covers the requested instant.
    Unavailable { jd_utc: f64 },
    /// Backend-specific failure.
    Backend(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { jd_utc } => {
                write!(f, "no ephemeris coverage for JD {jd_utc}")
            }
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
