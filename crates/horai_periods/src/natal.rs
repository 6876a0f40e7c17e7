//! Immutable natal snapshot shared by all period systems.
//!
//! One `NatalContext` is taken per subject and passed by reference into
//! every resolution call; nothing is cached at module level and nothing
//! is mutated after construction.

use horai_core::{Body, Houses, Sign, normalize_360};

use crate::error::PeriodError;

/// Which derived lot seeds a Zodiacal Releasing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lot {
    Fortune,
    Spirit,
}

/// Natal chart snapshot: body longitudes, angles, and derived points.
///
/// Constructed once; all fields are read-only thereafter. Day birth and
/// the two lots are derived at construction so every consumer sees the
/// same values.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalContext {
    birth_jd: f64,
    longitudes: [f64; 9],
    ascendant: f64,
    midheaven: f64,
    cusps: [f64; 12],
    is_day_birth: bool,
    lot_of_fortune: f64,
    lot_of_spirit: f64,
}

impl NatalContext {
    /// Build a natal context from tropical body longitudes (indexed by
    /// [`Body::index`]) and chart angles.
    ///
    /// Rejects non-finite inputs with [`PeriodError::Input`].
    pub fn new(
        birth_jd: f64,
        longitudes: [f64; 9],
        houses: &Houses,
    ) -> Result<Self, PeriodError> {
        if !birth_jd.is_finite() {
            return Err(PeriodError::Input("birth instant must be finite"));
        }
        if longitudes.iter().any(|l| !l.is_finite()) {
            return Err(PeriodError::Input("body longitudes must be finite"));
        }
        if !houses.ascendant.is_finite() || houses.cusps.iter().any(|c| !c.is_finite()) {
            return Err(PeriodError::Input("house cusps must be finite"));
        }

        let sun = longitudes[Body::Sun.index() as usize];
        let moon = longitudes[Body::Moon.index() as usize];
        let asc = houses.ascendant;

        // Sun-above-horizon test as the source chart convention states it.
        let is_day_birth = sun > asc || sun < asc - 180.0;

        let (lot_of_fortune, lot_of_spirit) = if is_day_birth {
            (normalize_360(asc + moon - sun), normalize_360(asc + sun - moon))
        } else {
            (normalize_360(asc + sun - moon), normalize_360(asc + moon - sun))
        };

        Ok(Self {
            birth_jd,
            longitudes,
            ascendant: asc,
            midheaven: houses.midheaven,
            cusps: houses.cusps,
            is_day_birth,
            lot_of_fortune,
            lot_of_spirit,
        })
    }

    /// Birth instant, JD UTC.
    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    /// Natal tropical longitude of a body.
    pub fn longitude(&self, body: Body) -> f64 {
        self.longitudes[body.index() as usize]
    }

    /// All natal longitudes in [`horai_core::ALL_BODIES`] order.
    pub fn longitudes(&self) -> &[f64; 9] {
        &self.longitudes
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.midheaven
    }

    /// House cusp longitude, 1-based house number.
    pub fn cusp(&self, house: u8) -> f64 {
        self.cusps[((house.max(1) - 1) % 12) as usize]
    }

    pub fn is_day_birth(&self) -> bool {
        self.is_day_birth
    }

    /// Longitude of the requested lot.
    pub fn lot(&self, lot: Lot) -> f64 {
        match lot {
            Lot::Fortune => self.lot_of_fortune,
            Lot::Spirit => self.lot_of_spirit,
        }
    }

    /// Sign containing the requested lot.
    pub fn lot_sign(&self, lot: Lot) -> Sign {
        Sign::from_longitude(self.lot(lot))
    }
}
