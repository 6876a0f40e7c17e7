//! Static per-system ruler tables and duration constants.
//!
//! Pure data, no side effects. Year-length conventions differ by system
//! and are preserved as documented constants: Vimshottari, Firdaria, and
//! Profection use the 365.25-day year; Zodiacal Releasing uses the
//! 360-day year with calendar-unit substitution at deeper levels.

use horai_core::{ALL_SIGNS, Body, Sign};

use crate::types::{PeriodSystem, Ruler};

/// Year length for Vimshottari, Firdaria, and Profection periods.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Zodiacal Releasing level-1 year length (the traditional 360-day year).
pub const RELEASING_DAYS_PER_YEAR: f64 = 360.0;

/// Zodiacal Releasing level-2 "month" length in days.
pub const RELEASING_DAYS_PER_MONTH: f64 = 30.0;

/// Zodiacal Releasing level-3 "week" length in days.
pub const RELEASING_DAYS_PER_WEEK: f64 = 7.0;

/// Fixed ayanamsa subtracted from tropical longitude to obtain sidereal
/// longitude. A Lahiri approximation held constant rather than adjusted
/// by date; an intentional fixed approximation.
pub const AYANAMSA_DEG: f64 = 24.12;

/// Span of one nakshatra: 360° / 27.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Full Firdaria cycle in years.
pub const FIRDARIA_TOTAL_YEARS: f64 = 75.0;

/// One full Zodiacal Releasing pass through the 12 signs, in years.
pub const RELEASING_TOTAL_YEARS: f64 = 231.0;

// ── Vimshottari ──────────────────────────────────────────────────────

/// Vimshottari ruler sequence. The south node (Ketu) leads; nakshatra N
/// seeds the sequence at position N mod 9.
pub const VIMSHOTTARI_BODIES: [Body; 9] = [
    Body::SouthNode,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::NorthNode,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

/// Vimshottari period lengths in years; sums to 120.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// The Vimshottari sequence as (body, years) pairs.
pub fn vimshottari_sequence() -> [(Body, f64); 9] {
    let mut seq = [(Body::Sun, 0.0); 9];
    for i in 0..9 {
        seq[i] = (VIMSHOTTARI_BODIES[i], VIMSHOTTARI_YEARS[i]);
    }
    seq
}

// ── Firdaria ─────────────────────────────────────────────────────────

/// Firdaria day-birth sequence; sums to 75 years.
pub const FIRDARIA_DAY: [(Body, f64); 9] = [
    (Body::Sun, 10.0),
    (Body::Venus, 8.0),
    (Body::Mercury, 13.0),
    (Body::Moon, 9.0),
    (Body::Saturn, 11.0),
    (Body::Jupiter, 12.0),
    (Body::Mars, 7.0),
    (Body::NorthNode, 3.0),
    (Body::SouthNode, 2.0),
];

/// Firdaria night-birth sequence; sums to 75 years.
pub const FIRDARIA_NIGHT: [(Body, f64); 9] = [
    (Body::Moon, 9.0),
    (Body::Saturn, 11.0),
    (Body::Jupiter, 12.0),
    (Body::Mars, 7.0),
    (Body::Sun, 10.0),
    (Body::Venus, 8.0),
    (Body::Mercury, 13.0),
    (Body::NorthNode, 3.0),
    (Body::SouthNode, 2.0),
];

/// Sub-period ruler list: each major Firdaria divides into 7 equal parts
/// ordered by this list, with the major ruler moved to the front when it
/// is among the seven. Node-ruled majors use this canonical order.
pub const FIRDARIA_SUB_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Saturn,
    Body::Jupiter,
    Body::Mars,
];

/// The Firdaria major sequence for a day or night birth.
pub const fn firdaria_sequence(is_day_birth: bool) -> [(Body, f64); 9] {
    if is_day_birth { FIRDARIA_DAY } else { FIRDARIA_NIGHT }
}

// ── Zodiacal Releasing ───────────────────────────────────────────────

/// Releasing period counts per sign in zodiacal order (Aries..Pisces).
/// The same number is read as years at level 1, months at level 2, weeks
/// at level 3, and days at level 4. Sums to 231.
pub const RELEASING_YEARS: [f64; 12] = [
    15.0, 8.0, 20.0, 25.0, 19.0, 20.0, 8.0, 15.0, 12.0, 27.0, 30.0, 12.0,
];

/// Releasing period count for one sign.
pub const fn releasing_years(sign: Sign) -> f64 {
    RELEASING_YEARS[sign.index() as usize]
}

/// Calendar-unit length in days for a Releasing level.
///
/// Unit substitution, not scaling: a sign assigned 19 spans 19 years at
/// level 1 and 19 months at level 2, where a "month" is 30 days and a
/// level-1 "year" is 360 days.
pub const fn releasing_unit_days(level: u8) -> f64 {
    match level {
        1 => RELEASING_DAYS_PER_YEAR,
        2 => RELEASING_DAYS_PER_MONTH,
        3 => RELEASING_DAYS_PER_WEEK,
        _ => 1.0,
    }
}

// ── Cross-system lookup ──────────────────────────────────────────────

/// Ordered (ruler, duration-in-years) sequence for a system's first level.
///
/// For Annual Profection the canonical sequence is the 12 signs in
/// zodiacal order at one year each; the resolver re-anchors it to the
/// natal house cusps. Releasing durations are in 360-day years.
pub fn ruler_sequence_for(system: PeriodSystem, is_day_birth: bool) -> Vec<(Ruler, f64)> {
    match system {
        PeriodSystem::Vimshottari => vimshottari_sequence()
            .iter()
            .map(|&(b, y)| (Ruler::Body(b), y))
            .collect(),
        PeriodSystem::Firdaria => firdaria_sequence(is_day_birth)
            .iter()
            .map(|&(b, y)| (Ruler::Body(b), y))
            .collect(),
        PeriodSystem::ZodiacalReleasing => ALL_SIGNS
            .iter()
            .map(|&s| (Ruler::Sign(s), releasing_years(s)))
            .collect(),
        PeriodSystem::AnnualProfection => {
            ALL_SIGNS.iter().map(|&s| (Ruler::Sign(s), 1.0)).collect()
        }
    }
}
