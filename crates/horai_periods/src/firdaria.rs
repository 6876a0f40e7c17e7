//! Firdaria: the medieval 75-year cycle of 9 rulers.
//!
//! Level 1 is the day- or night-birth sequence, unshortened, repeating
//! cyclically past 75 years. Every major period divides into exactly 7
//! equal sub-periods ordered by the 7-body list with the major ruler
//! moved to the front; node-ruled majors keep the canonical order since
//! the nodes are absent from the list.

use horai_core::Body;

use crate::error::PeriodError;
use crate::natal::NatalContext;
use crate::registry::{DAYS_PER_YEAR, FIRDARIA_SUB_BODIES, firdaria_sequence};
use crate::strategy::SubdivisionStrategy;
use crate::types::{Period, PeriodSystem, Ruler};
use crate::walk::{PeriodWalk, WalkEntry};

/// Number of sub-periods per major Firdaria.
pub const SUB_PERIOD_COUNT: usize = 7;

/// Firdaria subdivision strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirdariaStrategy;

impl FirdariaStrategy {
    pub fn new() -> Self {
        Self
    }

    /// The 7-body sub-period order for a major ruler: the ruler moved to
    /// the front when present, the remainder in canonical order.
    pub fn sub_period_order(major: Body) -> [Body; SUB_PERIOD_COUNT] {
        let mut order = FIRDARIA_SUB_BODIES;
        if let Some(pos) = order.iter().position(|&b| b == major) {
            // Move to front; everything before the ruler shifts down one.
            for i in (1..=pos).rev() {
                order.swap(i - 1, i);
            }
        }
        order
    }
}

impl SubdivisionStrategy for FirdariaStrategy {
    fn system(&self) -> PeriodSystem {
        PeriodSystem::Firdaria
    }

    fn max_level(&self) -> u8 {
        2
    }

    fn level1(&self, natal: &NatalContext) -> Result<PeriodWalk, PeriodError> {
        let entries: Vec<WalkEntry> = firdaria_sequence(natal.is_day_birth())
            .iter()
            .map(|&(body, years)| WalkEntry::plain(Ruler::Body(body), years * DAYS_PER_YEAR))
            .collect();

        Ok(PeriodWalk::cyclic(
            PeriodSystem::Firdaria,
            1,
            entries,
            natal.birth_jd(),
            None,
        ))
    }

    fn subdivide(&self, _natal: &NatalContext, parent: &Period) -> PeriodWalk {
        let major = parent.ruler.lord();
        let sub_days = parent.duration_days() / SUB_PERIOD_COUNT as f64;

        let entries: Vec<WalkEntry> = Self::sub_period_order(major)
            .iter()
            .map(|&body| WalkEntry::plain(Ruler::Body(body), sub_days))
            .collect();

        PeriodWalk::partition(
            PeriodSystem::Firdaria,
            parent.level + 1,
            entries,
            parent.start_jd,
            parent.end_jd,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::verify_partition;
    use horai_core::Houses;

    fn natal(day_birth: bool) -> NatalContext {
        let mut lons = [0.0; 9];
        // asc=100; sun above horizon for day, below for night
        lons[Body::Sun.index() as usize] = if day_birth { 200.0 } else { 150.0 };
        lons[Body::Moon.index() as usize] = 40.0;
        let houses = Houses {
            cusps: [100.0; 12],
            ascendant: if day_birth { 100.0 } else { 200.0 },
            midheaven: 10.0,
            armc: 0.0,
            vertex: 0.0,
        };
        NatalContext::new(2451545.0, lons, &houses).unwrap()
    }

    #[test]
    fn day_birth_starts_with_sun() {
        let walk = FirdariaStrategy::new().level1(&natal(true)).unwrap();
        let first = walk.iter().next().unwrap();
        assert_eq!(first.ruler, Ruler::Body(Body::Sun));
        assert!((first.duration_days() - 10.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn night_birth_starts_with_moon() {
        let walk = FirdariaStrategy::new().level1(&natal(false)).unwrap();
        let first = walk.iter().next().unwrap();
        assert_eq!(first.ruler, Ruler::Body(Body::Moon));
    }

    #[test]
    fn cycle_spans_75_years_then_repeats() {
        let walk = FirdariaStrategy::new().level1(&natal(true)).unwrap();
        let periods: Vec<Period> = walk.iter().take(10).collect();
        let total: f64 = periods[..9].iter().map(|p| p.duration_days()).sum();
        assert!((total - 75.0 * DAYS_PER_YEAR).abs() < 1e-6);
        // 10th period wraps: Sun again
        assert_eq!(periods[9].ruler, Ruler::Body(Body::Sun));
    }

    #[test]
    fn sub_period_order_moves_ruler_to_front() {
        let order = FirdariaStrategy::sub_period_order(Body::Venus);
        assert_eq!(
            order,
            [
                Body::Venus,
                Body::Sun,
                Body::Mercury,
                Body::Moon,
                Body::Saturn,
                Body::Jupiter,
                Body::Mars,
            ]
        );
    }

    #[test]
    fn node_major_keeps_canonical_order() {
        let order = FirdariaStrategy::sub_period_order(Body::NorthNode);
        assert_eq!(order, FIRDARIA_SUB_BODIES);
    }

    #[test]
    fn seven_equal_children_partition_parent() {
        let natal = natal(true);
        let strategy = FirdariaStrategy::new();
        let parent = strategy.level1(&natal).unwrap().iter().next().unwrap();
        let children = strategy.subdivide(&natal, &parent).one_pass();

        assert_eq!(children.len(), 7);
        verify_partition(&children, &parent).unwrap();
        let expected = parent.duration_days() / 7.0;
        for c in &children[..6] {
            assert!((c.duration_days() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn scenario_day_birth_age_12_and_a_half() {
        // Sun(10) then Venus(8): at 12.5y the Venus major is 2.5y in.
        // Sub index = floor(2.5 / (8/7)) = 2 → third ruler of the
        // Venus-first order: Mercury.
        let natal = natal(true);
        let strategy = FirdariaStrategy::new();
        let query = natal.birth_jd() + 12.5 * DAYS_PER_YEAR;

        let major = strategy.level1(&natal).unwrap().active_at(query).unwrap();
        assert_eq!(major.ruler, Ruler::Body(Body::Venus));

        let sub = strategy.subdivide(&natal, &major).active_at(query).unwrap();
        assert_eq!(sub.order, 3);
        assert_eq!(sub.ruler, Ruler::Body(Body::Mercury));
    }
}
