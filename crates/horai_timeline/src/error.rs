//! Error type for timeline assembly and scoring.

use std::error::Error;
use std::fmt::{Display, Formatter};

use horai_core::EphemerisError;
use horai_periods::PeriodError;

/// Failures from natal assembly, transit counting or composite scoring.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimelineError {
    /// Malformed input rejected before any computation.
    Input(&'static str),
    /// Period resolution failed.
    Period(PeriodError),
    /// The ephemeris adapter failed; the cause is passed through intact.
    Ephemeris(EphemerisError),
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(msg) => write!(f, "invalid input: {msg}"),
            Self::Period(e) => write!(f, "period resolution failed: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris query failed: {e}"),
        }
    }
}

impl Error for TimelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(_) => None,
            Self::Period(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
        }
    }
}

impl From<PeriodError> for TimelineError {
    fn from(e: PeriodError) -> Self {
        Self::Period(e)
    }
}

impl From<EphemerisError> for TimelineError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
