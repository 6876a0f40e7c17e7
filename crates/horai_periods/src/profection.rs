//! Annual Profections: each year of life activates the next natal house.
//!
//! Level 1 is a 12-year cycle of one-year periods whose rulers are the
//! signs on the natal house cusps, beginning with house 1 at birth.
//! Level 2 divides a year into 12 equal monthly profections advancing
//! through the signs from the year's sign.

use horai_core::Sign;

use crate::error::PeriodError;
use crate::natal::NatalContext;
use crate::registry::DAYS_PER_YEAR;
use crate::strategy::SubdivisionStrategy;
use crate::types::{Period, PeriodSystem, Ruler};
use crate::walk::{PeriodWalk, WalkEntry};

/// Annual Profection subdivision strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfectionStrategy;

impl ProfectionStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SubdivisionStrategy for ProfectionStrategy {
    fn system(&self) -> PeriodSystem {
        PeriodSystem::AnnualProfection
    }

    fn max_level(&self) -> u8 {
        2
    }

    fn level1(&self, natal: &NatalContext) -> Result<PeriodWalk, PeriodError> {
        let entries: Vec<WalkEntry> = (1..=12u8)
            .map(|house| {
                let sign = Sign::from_longitude(natal.cusp(house));
                WalkEntry::plain(Ruler::Sign(sign), DAYS_PER_YEAR)
            })
            .collect();

        Ok(PeriodWalk::cyclic(
            PeriodSystem::AnnualProfection,
            1,
            entries,
            natal.birth_jd(),
            None,
        ))
    }

    fn subdivide(&self, natal: &NatalContext, parent: &Period) -> PeriodWalk {
        let year_sign = match parent.ruler {
            Ruler::Sign(s) => s,
            Ruler::Body(_) => Sign::from_longitude(natal.ascendant()),
        };
        let month_days = parent.duration_days() / 12.0;

        // Monthly profections advance sign-by-sign from the year's sign.
        let entries: Vec<WalkEntry> = (0..12u8)
            .map(|i| WalkEntry::plain(Ruler::Sign(year_sign.advance(i)), month_days))
            .collect();

        PeriodWalk::partition(
            PeriodSystem::AnnualProfection,
            parent.level + 1,
            entries,
            parent.start_jd,
            parent.end_jd,
        )
    }
}
