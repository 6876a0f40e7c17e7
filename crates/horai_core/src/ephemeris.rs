//! Ephemeris adapter contract.
//!
//! Position and house computation is delegated to an external backend
//! (Swiss Ephemeris, JPL kernels, a fixture in tests). The engine consumes
//! only the data shapes defined here; it never inspects backend internals.

use crate::body::Body;
use crate::error::EphemerisError;

/// Ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from Earth in AU.
    pub distance_au: f64,
    /// Daily motion in degrees per day (negative when retrograde).
    pub speed_deg_per_day: f64,
}

/// House cusps and chart angles at one instant and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Houses {
    /// Cusp longitudes in degrees, cusps[0] = 1st house.
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
    pub armc: f64,
    pub vertex: f64,
}

/// House division system requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseSystem {
    Placidus,
    WholeSign,
    Koch,
    Equal,
}

impl HouseSystem {
    /// Single-letter code used by common ephemeris backends.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::WholeSign => 'W',
            Self::Koch => 'K',
            Self::Equal => 'E',
        }
    }
}

/// An approximate eclipse occurrence near the ecliptic nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseWindow {
    /// JD UTC of the eclipse window center.
    pub jd_utc: f64,
    /// Ecliptic longitude of the eclipse in degrees.
    pub eclipse_longitude_deg: f64,
}

/// Capability trait supplying natal and transiting position data.
///
/// Implementations must be safe to share across threads; the scorer may
/// issue queries for independent dates concurrently. These calls are the
/// engine's only suspension points; no engine lock is held across them.
pub trait EphemerisSource: Send + Sync {
    /// Position of a body at the given instant.
    ///
    /// Fails with [`EphemerisError::Unavailable`] when no backing data
    /// covers the instant.
    fn position(&self, jd_utc: f64, body: Body) -> Result<BodyPosition, EphemerisError>;

    /// House cusps and angles for an instant and geographic location.
    fn houses(
        &self,
        jd_utc: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<Houses, EphemerisError>;

    /// Best-effort eclipse windows within `horizon_days` after `from_jd`.
    fn eclipse_windows(
        &self,
        from_jd: f64,
        horizon_days: f64,
    ) -> Result<Vec<EclipseWindow>, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_system_codes() {
        assert_eq!(HouseSystem::Placidus.code(), 'P');
        assert_eq!(HouseSystem::WholeSign.code(), 'W');
    }
}
