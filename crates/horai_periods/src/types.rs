//! Core types shared across all period systems.

use horai_core::{Body, Sign};

/// Deepest level any system resolves to.
pub const MAX_RESOLVE_LEVEL: u8 = 4;

/// The supported time-lordship systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PeriodSystem {
    Vimshottari = 0,
    ZodiacalReleasing = 1,
    Firdaria = 2,
    AnnualProfection = 3,
}

/// All systems in canonical order.
pub const ALL_PERIOD_SYSTEMS: [PeriodSystem; 4] = [
    PeriodSystem::Vimshottari,
    PeriodSystem::ZodiacalReleasing,
    PeriodSystem::Firdaria,
    PeriodSystem::AnnualProfection,
];

impl PeriodSystem {
    /// Create from repr(u8) value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_PERIOD_SYSTEMS.len() {
            Some(ALL_PERIOD_SYSTEMS[v as usize])
        } else {
            None
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::ZodiacalReleasing => "Zodiacal Releasing",
            Self::Firdaria => "Firdaria",
            Self::AnnualProfection => "Annual Profection",
        }
    }
}

/// What entity rules a period: a body (Vimshottari, Firdaria) or a
/// zodiac sign (Releasing, Profection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruler {
    Body(Body),
    Sign(Sign),
}

impl Ruler {
    /// Name of the ruling entity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body(b) => b.name(),
            Self::Sign(s) => s.name(),
        }
    }

    /// The planetary lord of the period: the body itself, or the sign's
    /// traditional domicile ruler.
    pub const fn lord(self) -> Body {
        match self {
            Self::Body(b) => b,
            Self::Sign(s) => s.ruler(),
        }
    }
}

/// A single time-lordship period.
///
/// Start is inclusive, end is exclusive: an instant exactly at `end_jd`
/// belongs to the next period. The enclosing parent is recovered by
/// position in a resolved chain, never owned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    pub system: PeriodSystem,
    /// Hierarchical depth, 1-based.
    pub level: u8,
    pub ruler: Ruler,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// 1-indexed position among siblings in walk order.
    pub order: u16,
    /// Releasing only: period's sign is angular from the natal Lot of
    /// Fortune. Advisory; false for other systems.
    pub peak: bool,
    /// Releasing only: malefic-ruled transition at level ≥ 2. Advisory.
    pub loosening: bool,
}

impl Period {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// End-exclusive containment test.
    pub fn contains(&self, jd_utc: f64) -> bool {
        self.start_jd <= jd_utc && jd_utc < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_from_u8() {
        assert_eq!(PeriodSystem::from_u8(0), Some(PeriodSystem::Vimshottari));
        assert_eq!(
            PeriodSystem::from_u8(3),
            Some(PeriodSystem::AnnualProfection)
        );
        assert_eq!(PeriodSystem::from_u8(4), None);
    }

    #[test]
    fn ruler_lord() {
        assert_eq!(Ruler::Body(Body::Venus).lord(), Body::Venus);
        assert_eq!(Ruler::Sign(Sign::Leo).lord(), Body::Sun);
        assert_eq!(Ruler::Sign(Sign::Scorpio).lord(), Body::Mars);
    }

    #[test]
    fn contains_end_exclusive() {
        let p = Period {
            system: PeriodSystem::Vimshottari,
            level: 1,
            ruler: Ruler::Body(Body::Sun),
            start_jd: 100.0,
            end_jd: 200.0,
            order: 1,
            peak: false,
            loosening: false,
        };
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
    }
}
