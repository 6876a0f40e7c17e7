//! Natal chart assembly from an ephemeris adapter.

use horai_core::{ALL_BODIES, Body, EphemerisSource, HouseSystem, normalize_360};
use horai_periods::NatalContext;

use crate::error::TimelineError;

/// Assemble an immutable [`NatalContext`] for a birth instant and place.
///
/// Queries the adapter for all nine body longitudes and Placidus houses.
/// Backends that carry no south-node series are tolerated: the south node
/// is the north node reflected through the center, so a failed south-node
/// query falls back to north + 180°. Any other adapter failure propagates
/// untouched.
pub fn natal_context_at(
    source: &dyn EphemerisSource,
    birth_jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalContext, TimelineError> {
    if !birth_jd.is_finite() {
        return Err(TimelineError::Input("birth instant must be finite"));
    }

    let mut longitudes = [0.0_f64; 9];
    for body in ALL_BODIES {
        let lon = match source.position(birth_jd, body) {
            Ok(pos) => pos.longitude_deg,
            Err(e) if body == Body::SouthNode => {
                let north = longitudes[Body::NorthNode.index() as usize];
                // NorthNode precedes SouthNode in ALL_BODIES, so `north`
                // is already populated unless that query itself failed.
                if source.position(birth_jd, Body::NorthNode).is_err() {
                    return Err(e.into());
                }
                normalize_360(north + 180.0)
            }
            Err(e) => return Err(e.into()),
        };
        longitudes[body.index() as usize] = lon;
    }

    let houses = source.houses(birth_jd, latitude_deg, longitude_deg, HouseSystem::Placidus)?;
    NatalContext::new(birth_jd, longitudes, &houses).map_err(TimelineError::from)
}
