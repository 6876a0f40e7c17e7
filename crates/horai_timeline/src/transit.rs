//! Hard-aspect transit counting against a natal chart.

use horai_core::{ALL_BODIES, Body, EphemerisSource, arc_separation};
use horai_periods::NatalContext;

use crate::error::TimelineError;

/// Default aspect orb in degrees.
pub const DEFAULT_ORB_DEG: f64 = 8.0;

/// Hard aspect kinds counted by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardAspect {
    Square,
    Opposition,
}

impl HardAspect {
    /// Exact separation of the aspect in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Square => 90.0,
            Self::Opposition => 180.0,
        }
    }
}

/// A natal point a transit can aspect: a body or a chart angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NatalPoint {
    Body(Body),
    Ascendant,
    Midheaven,
}

/// One transiting body within orb of a hard aspect to a natal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitHit {
    pub transiting: Body,
    pub natal_point: NatalPoint,
    pub aspect: HardAspect,
    /// Deviation from the exact aspect angle in degrees, always < orb.
    pub orb_deg: f64,
}

/// List every square and opposition from the 7 classical transiting
/// bodies to the natal bodies, Ascendant and Midheaven, within `orb_deg`.
pub fn hard_transits(
    source: &dyn EphemerisSource,
    natal: &NatalContext,
    jd_utc: f64,
    orb_deg: f64,
) -> Result<Vec<TransitHit>, TimelineError> {
    if !(orb_deg.is_finite() && orb_deg > 0.0) {
        return Err(TimelineError::Input("orb must be finite and positive"));
    }

    let mut points: Vec<(NatalPoint, f64)> = ALL_BODIES
        .iter()
        .map(|&b| (NatalPoint::Body(b), natal.longitude(b)))
        .collect();
    points.push((NatalPoint::Ascendant, natal.ascendant()));
    points.push((NatalPoint::Midheaven, natal.midheaven()));

    let mut hits = Vec::new();
    for transiting in horai_core::CLASSICAL_BODIES {
        let lon = source.position(jd_utc, transiting)?.longitude_deg;
        for &(point, natal_lon) in &points {
            let sep = arc_separation(lon, natal_lon);
            for aspect in [HardAspect::Square, HardAspect::Opposition] {
                let deviation = (sep - aspect.angle_deg()).abs();
                if deviation < orb_deg {
                    hits.push(TransitHit {
                        transiting,
                        natal_point: point,
                        aspect,
                        orb_deg: deviation,
                    });
                }
            }
        }
    }
    Ok(hits)
}

/// Count of hard transits at an instant; the scorer's input.
pub fn hard_transit_count(
    source: &dyn EphemerisSource,
    natal: &NatalContext,
    jd_utc: f64,
    orb_deg: f64,
) -> Result<usize, TimelineError> {
    Ok(hard_transits(source, natal, jd_utc, orb_deg)?.len())
}
