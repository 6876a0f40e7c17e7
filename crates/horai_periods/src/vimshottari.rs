//! Vimshottari: 120-year planetary cycle seeded by the Moon's nakshatra.
//!
//! Level 1 starts with the ruler of the natal Moon's nakshatra, shortened
//! by the fraction of the nakshatra already traversed. Every deeper level
//! reuses the same 9-ruler table rotated to the immediate parent's ruler,
//! with child spans proportional to the full 120-year cycle. The rule is
//! recursive and applies unchanged at any depth.

use horai_core::normalize_360;

use crate::error::PeriodError;
use crate::natal::NatalContext;
use crate::registry::{
    AYANAMSA_DEG, DAYS_PER_YEAR, NAKSHATRA_SPAN_DEG, VIMSHOTTARI_TOTAL_YEARS,
    vimshottari_sequence,
};
use crate::strategy::SubdivisionStrategy;
use crate::types::{Period, PeriodSystem, Ruler};
use crate::walk::{PeriodWalk, WalkEntry};

/// Vimshottari subdivision strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct VimshottariStrategy;

impl VimshottariStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Natal Moon's sidereal longitude under the fixed ayanamsa.
    fn moon_sidereal(natal: &NatalContext) -> f64 {
        normalize_360(natal.longitude(horai_core::Body::Moon) - AYANAMSA_DEG)
    }
}

/// Nakshatra index (0-26) and elapsed fraction of its band.
pub fn nakshatra_position(sidereal_lon: f64) -> (u8, f64) {
    let lon = normalize_360(sidereal_lon);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
    let into_band = lon - idx as f64 * NAKSHATRA_SPAN_DEG;
    (idx, into_band / NAKSHATRA_SPAN_DEG)
}

impl SubdivisionStrategy for VimshottariStrategy {
    fn system(&self) -> PeriodSystem {
        PeriodSystem::Vimshottari
    }

    fn max_level(&self) -> u8 {
        4
    }

    fn level1(&self, natal: &NatalContext) -> Result<PeriodWalk, PeriodError> {
        let (nak_idx, elapsed) = nakshatra_position(Self::moon_sidereal(natal));
        // Every 3rd nakshatra shares a ruler: band N seeds position N mod 9.
        let start = nak_idx as usize % 9;

        let seq = vimshottari_sequence();
        let entries: Vec<WalkEntry> = (0..9)
            .map(|i| {
                let (body, years) = seq[(start + i) % 9];
                WalkEntry::plain(Ruler::Body(body), years * DAYS_PER_YEAR)
            })
            .collect();

        let first_full_days = entries[0].days;
        let balance = first_full_days * (1.0 - elapsed);

        Ok(PeriodWalk::cyclic(
            PeriodSystem::Vimshottari,
            1,
            entries,
            natal.birth_jd(),
            Some(balance),
        ))
    }

    fn subdivide(&self, _natal: &NatalContext, parent: &Period) -> PeriodWalk {
        let seq = vimshottari_sequence();
        let start = seq
            .iter()
            .position(|&(b, _)| Ruler::Body(b) == parent.ruler)
            .unwrap_or(0);

        let parent_days = parent.duration_days();
        let entries: Vec<WalkEntry> = (0..9)
            .map(|i| {
                let (body, years) = seq[(start + i) % 9];
                let days = (years * parent_days) / VIMSHOTTARI_TOTAL_YEARS;
                WalkEntry::plain(Ruler::Body(body), days)
            })
            .collect();

        PeriodWalk::partition(
            PeriodSystem::Vimshottari,
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
    use horai_core::{Body, Houses};

    fn natal_with_moon(tropical_moon: f64) -> NatalContext {
        let mut lons = [0.0; 9];
        lons[Body::Moon.index() as usize] = tropical_moon;
        lons[Body::Sun.index() as usize] = 200.0;
        let houses = Houses {
            cusps: [100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0, 10.0, 40.0,
                70.0],
            ascendant: 100.0,
            midheaven: 10.0,
            armc: 0.0,
            vertex: 0.0,
        };
        NatalContext::new(2451545.0, lons, &houses).unwrap()
    }

    #[test]
    fn nakshatra_position_bands() {
        let (idx, frac) = nakshatra_position(0.0);
        assert_eq!(idx, 0);
        assert!(frac.abs() < 1e-12);

        let (idx, frac) = nakshatra_position(40.0 + NAKSHATRA_SPAN_DEG * 0.4);
        assert_eq!(idx, 3);
        assert!((frac - 0.4).abs() < 1e-9);
    }

    #[test]
    fn ashwini_start_ketu_full_balance() {
        // Tropical Moon = ayanamsa → sidereal 0° → Ashwini start → full Ketu 7y
        let natal = natal_with_moon(AYANAMSA_DEG);
        let walk = VimshottariStrategy::new().level1(&natal).unwrap();
        let first = walk.iter().next().unwrap();
        assert_eq!(first.ruler, Ruler::Body(Body::SouthNode));
        assert!((first.duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn scenario_nakshatra_3_at_40_percent() {
        // Band 3 (ruler Moon, 10y) with 40% elapsed → 6y remain
        let sidereal = 3.0 * NAKSHATRA_SPAN_DEG + 0.4 * NAKSHATRA_SPAN_DEG;
        let natal = natal_with_moon(sidereal + AYANAMSA_DEG);
        let walk = VimshottariStrategy::new().level1(&natal).unwrap();
        let first = walk.iter().next().unwrap();
        assert_eq!(first.ruler, Ruler::Body(Body::Moon));
        assert!((first.duration_days() - 6.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn full_cycle_spans_120_years() {
        let natal = natal_with_moon(AYANAMSA_DEG);
        let walk = VimshottariStrategy::new().level1(&natal).unwrap();
        let total: f64 = walk.iter().take(9).map(|p| p.duration_days()).sum();
        assert!((total - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn subdivision_rotates_to_parent_and_partitions() {
        let natal = natal_with_moon(AYANAMSA_DEG);
        let strategy = VimshottariStrategy::new();
        let parent = strategy.level1(&natal).unwrap().iter().next().unwrap();
        let children = strategy.subdivide(&natal, &parent).one_pass();

        assert_eq!(children.len(), 9);
        // First child carries the parent's own ruler
        assert_eq!(children[0].ruler, parent.ruler);
        crate::walk::verify_partition(&children, &parent).unwrap();
        // Proportional rule: child years = (child full years / 120) * parent span
        let venus = children[1];
        let expected = 20.0 * parent.duration_days() / 120.0;
        assert!((venus.duration_days() - expected).abs() < 1e-6);
    }
}
