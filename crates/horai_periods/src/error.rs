//! Error types for period resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from period computation.
///
/// `Invariant` indicates a registry or strategy bug (sibling durations
/// failing to reassemble their parent); it is always fatal and never
/// silently corrected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PeriodError {
    /// Malformed input rejected before any computation.
    Input(&'static str),
    /// Query instant precedes the birth instant.
    OutOfDomain { query_jd: f64, birth_jd: f64 },
    /// Internal consistency check failed.
    Invariant(&'static str),
}

impl Display for PeriodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(msg) => write!(f, "invalid input: {msg}"),
            Self::OutOfDomain { query_jd, birth_jd } => write!(
                f,
                "query instant JD {query_jd} precedes birth instant JD {birth_jd}"
            ),
            Self::Invariant(msg) => write!(f, "period invariant violated: {msg}"),
        }
    }
}

impl Error for PeriodError {}
