//! Zodiacal Releasing: Hellenistic sign periods from the Lot of Fortune
//! or Spirit.
//!
//! Units rescale per level by calendar substitution: the same per-sign
//! number is years (360 days) at level 1, months (30 days) at level 2,
//! weeks at level 3, and days at level 4. Within a level the cursor steps
//! to the next sign in zodiacal order; descending a level, the child walk
//! begins at the sign eleven positions forward of the parent's sign, at
//! the parent's start instant.
//!
//! The eleven-forward furcation offset reproduces the observed behavior
//! of the source system. It differs from the commonly published
//! convention (child starting at the parent's own sign) and is flagged
//! for domain-expert review; do not "fix" it silently.

use horai_core::Sign;

use crate::error::PeriodError;
use crate::natal::{Lot, NatalContext};
use crate::registry::{releasing_unit_days, releasing_years};
use crate::strategy::SubdivisionStrategy;
use crate::types::{Period, PeriodSystem, Ruler};
use crate::walk::{PeriodWalk, WalkEntry};

/// Sign offset applied when descending one level.
pub const FURCATION_OFFSET: u8 = 11;

/// Pluggable advisory-flag computation for Releasing periods.
///
/// Flags never participate in interval-boundary arithmetic; a policy that
/// cannot decide degrades to `false` rather than failing resolution.
pub trait ReleasingFlagPolicy: Send + Sync {
    /// Peak period: the sign is angular from the natal Lot of Fortune.
    fn is_peak(&self, natal: &NatalContext, sign: Sign) -> bool;

    /// Loosening of the bond: malefic-driven transition at depth.
    fn is_loosening(&self, natal: &NatalContext, sign: Sign, level: u8) -> bool;
}

/// Documented default policy.
///
/// Peak: the sign occupies house 1, 4, 7, or 10 counted from the natal
/// Fortune sign. Loosening: the sign's traditional ruler is a malefic and
/// the period sits at level 2 or deeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalFlagPolicy;

impl ReleasingFlagPolicy for TraditionalFlagPolicy {
    fn is_peak(&self, natal: &NatalContext, sign: Sign) -> bool {
        let fortune = natal.lot_sign(Lot::Fortune);
        let offset = (12 + sign.index() as i16 - fortune.index() as i16) % 12;
        matches!(offset, 0 | 3 | 6 | 9)
    }

    fn is_loosening(&self, _natal: &NatalContext, sign: Sign, level: u8) -> bool {
        sign.ruler().is_traditional_malefic() && level >= 2
    }
}

/// Zodiacal Releasing subdivision strategy.
pub struct ReleasingStrategy {
    lot: Lot,
    flags: Box<dyn ReleasingFlagPolicy>,
}

impl ReleasingStrategy {
    /// Releasing from the given lot with the traditional flag policy.
    pub fn new(lot: Lot) -> Self {
        Self {
            lot,
            flags: Box::new(TraditionalFlagPolicy),
        }
    }

    /// Releasing with a caller-substituted flag policy.
    pub fn with_flags(lot: Lot, flags: Box<dyn ReleasingFlagPolicy>) -> Self {
        Self { lot, flags }
    }

    pub fn lot(&self) -> Lot {
        self.lot
    }

    /// Twelve entries in zodiacal order from `start_sign` at the given
    /// level's calendar unit.
    fn entries_from(&self, natal: &NatalContext, start_sign: Sign, level: u8) -> Vec<WalkEntry> {
        let unit = releasing_unit_days(level);
        (0..12u8)
            .map(|i| {
                let sign = start_sign.advance(i);
                WalkEntry {
                    ruler: Ruler::Sign(sign),
                    days: releasing_years(sign) * unit,
                    peak: self.flags.is_peak(natal, sign),
                    loosening: self.flags.is_loosening(natal, sign, level),
                }
            })
            .collect()
    }
}

impl SubdivisionStrategy for ReleasingStrategy {
    fn system(&self) -> PeriodSystem {
        PeriodSystem::ZodiacalReleasing
    }

    fn max_level(&self) -> u8 {
        4
    }

    fn level1(&self, natal: &NatalContext) -> Result<PeriodWalk, PeriodError> {
        let start_sign = natal.lot_sign(self.lot);
        // The natal first period is retained unshortened.
        Ok(PeriodWalk::cyclic(
            PeriodSystem::ZodiacalReleasing,
            1,
            self.entries_from(natal, start_sign, 1),
            natal.birth_jd(),
            None,
        ))
    }

    fn subdivide(&self, natal: &NatalContext, parent: &Period) -> PeriodWalk {
        let parent_sign = match parent.ruler {
            Ruler::Sign(s) => s,
            // Releasing periods are always sign-ruled; fall back to the
            // lot sign if handed a foreign period.
            Ruler::Body(_) => natal.lot_sign(self.lot),
        };
        let child_level = parent.level + 1;
        let start_sign = parent_sign.advance(FURCATION_OFFSET);

        // The child cursor resumes at the parent's start, not a fresh
        // partition of its span: sub-periods may outrun the parent.
        PeriodWalk::cyclic(
            PeriodSystem::ZodiacalReleasing,
            child_level,
            self.entries_from(natal, start_sign, child_level),
            parent.start_jd,
            None,
        )
    }
}
