//! End-to-end scoring tests against a fixture ephemeris.

use std::sync::atomic::{AtomicUsize, Ordering};

use horai_core::{
    Body, BodyPosition, CivilDate, EclipseWindow, EphemerisError, EphemerisSource, HouseSystem,
    Houses,
};
use horai_periods::{NatalContext, PeriodSystem, Ruler};
use horai_timeline::{CancelToken, CompositeConfig, composite};

/// Fixture backend with frozen transiting positions.
///
/// Transiting Mars sits exactly square the natal Sun and transiting
/// Saturn exactly opposed to it; the remaining classical bodies are
/// parked at 55°, out of orb of every natal point.
struct FixedEphemeris {
    eclipses: Vec<EclipseWindow>,
    position_calls: AtomicUsize,
    /// Cancel this token once `cancel_after_calls` positions were served.
    cancel: Option<(CancelToken, usize)>,
}

impl FixedEphemeris {
    fn new() -> Self {
        Self {
            eclipses: Vec::new(),
            position_calls: AtomicUsize::new(0),
            cancel: None,
        }
    }
}

impl EphemerisSource for FixedEphemeris {
    fn position(&self, _jd_utc: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        let served = self.position_calls.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some((token, after)) = &self.cancel {
            if served >= *after {
                token.cancel();
            }
        }
        let longitude_deg = match body {
            Body::Mars => 90.0,
            Body::Saturn => 180.0,
            _ => 55.0,
        };
        Ok(BodyPosition {
            longitude_deg,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: 1.0,
        })
    }

    fn houses(
        &self,
        _jd_utc: f64,
        _latitude_deg: f64,
        _longitude_deg: f64,
        _system: HouseSystem,
    ) -> Result<Houses, EphemerisError> {
        Err(EphemerisError::Backend("fixture has no house engine"))
    }

    fn eclipse_windows(
        &self,
        from_jd: f64,
        horizon_days: f64,
    ) -> Result<Vec<EclipseWindow>, EphemerisError> {
        // Honor the requested span like a real backend would
        Ok(self
            .eclipses
            .iter()
            .filter(|w| w.jd_utc >= from_jd && w.jd_utc <= from_jd + horizon_days)
            .copied()
            .collect())
    }
}

/// Natal chart built directly, bypassing the adapter.
///
/// Tropical Moon 30° → sidereal 5.88° → first nakshatra band, whose
/// starting Vimshottari lord is the south node (a malefic for that
/// system). Night birth, so the first Firdaria lord is the Moon (not a
/// malefic for that system).
fn natal() -> NatalContext {
    let mut lons = [50.0_f64; 9];
    lons[Body::Sun.index() as usize] = 0.0;
    lons[Body::Moon.index() as usize] = 30.0;
    lons[Body::Mars.index() as usize] = 45.0;
    lons[Body::Venus.index() as usize] = 60.0;
    lons[Body::NorthNode.index() as usize] = 65.0;
    lons[Body::Jupiter.index() as usize] = 70.0;
    lons[Body::Saturn.index() as usize] = 52.0;
    lons[Body::SouthNode.index() as usize] = 245.0;
    let houses = Houses {
        cusps: [35.0; 12],
        ascendant: 35.0,
        midheaven: 75.0,
        armc: 0.0,
        vertex: 0.0,
    };
    NatalContext::new(CivilDate::new(1990, 3, 1).to_jd(), lons, &houses).unwrap()
}

#[test]
fn scores_transits_plus_vimshottari_malefic() {
    let source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1990, 3, 2);
    let end = CivilDate::new(1990, 3, 6);
    let result = composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap();

    assert!(!result.cancelled);
    assert_eq!(result.entries.len(), 5);
    for entry in &result.entries {
        // Mars square natal Sun + Saturn opposed natal Sun
        assert_eq!(entry.transit_count, 2);
        // 2 transits x 3, plus 5 for the south-node Vimshottari lord
        assert_eq!(entry.score, 11);
        let vim = entry
            .rulers
            .iter()
            .find(|(s, _)| *s == PeriodSystem::Vimshottari)
            .unwrap();
        assert_eq!(vim.1, Ruler::Body(Body::SouthNode));
        let fir = entry
            .rulers
            .iter()
            .find(|(s, _)| *s == PeriodSystem::Firdaria)
            .unwrap();
        assert_eq!(fir.1, Ruler::Body(Body::Moon));
    }
}

#[test]
fn eclipse_window_lifts_nearby_dates_to_the_top() {
    let mut source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1990, 3, 2);
    let end = CivilDate::new(1990, 5, 30);
    // Window centered 60 days in: only dates within 30 days gain weight
    source.eclipses = vec![EclipseWindow {
        jd_utc: start.to_jd() + 60.0,
        eclipse_longitude_deg: 10.0,
    }];

    let result = composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap();

    let boosted: Vec<_> = result.entries.iter().filter(|e| e.score == 21).collect();
    assert!(!boosted.is_empty());
    for entry in &result.entries {
        let near = (entry.jd_utc - (start.to_jd() + 60.0)).abs() <= 30.0;
        assert_eq!(entry.score, if near { 21 } else { 11 });
    }

    // Ranked: all top-N are boosted, earliest boosted date first
    assert_eq!(result.ranked.len(), config.top_n);
    assert!(result.ranked.iter().all(|e| e.score == 21));
    assert_eq!(result.ranked[0].jd_utc, boosted[0].jd_utc);
}

#[test]
fn eclipse_shortly_after_range_end_still_weights_final_dates() {
    let mut source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1990, 3, 2);
    let end = CivilDate::new(1990, 4, 30);
    // Window 10 days past the last scored date: every date within 30
    // days of it must still carry the eclipse weight
    let window_jd = end.to_jd() + 10.0;
    source.eclipses = vec![EclipseWindow {
        jd_utc: window_jd,
        eclipse_longitude_deg: 10.0,
    }];

    let result = composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap();

    let last = result.entries.last().unwrap();
    assert_eq!(last.score, 21);
    for entry in &result.entries {
        let near = (entry.jd_utc - window_jd).abs() <= 30.0;
        assert_eq!(entry.score, if near { 21 } else { 11 });
    }
}

#[test]
fn ties_rank_by_earlier_date() {
    let source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig {
        top_n: 3,
        ..CompositeConfig::default()
    };

    let start = CivilDate::new(1990, 3, 2);
    let end = CivilDate::new(1990, 3, 11);
    let result = composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap();

    // All scores equal; ranking must preserve date order
    assert_eq!(result.ranked.len(), 3);
    assert_eq!(result.ranked[0].date, start);
    assert_eq!(result.ranked[1].date, start.plus_days(1));
    assert_eq!(result.ranked[2].date, start.plus_days(2));
}

#[test]
fn cancellation_returns_ranked_partial_results() {
    let token = CancelToken::new();
    let mut source = FixedEphemeris::new();
    // 7 transit queries per date: the flag trips at the end of date 2
    source.cancel = Some((token.clone(), 14));
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1990, 3, 2);
    let end = CivilDate::new(1990, 3, 31);
    let result = composite(&source, &natal, &config, start, end, &token).unwrap();

    assert!(result.cancelled);
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.ranked.len(), 2);
    for entry in &result.entries {
        assert_eq!(entry.score, 11);
    }
}

#[test]
fn pre_birth_range_fails_period_resolution() {
    let source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1989, 1, 1);
    let end = CivilDate::new(1989, 1, 3);
    let err =
        composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap_err();
    assert!(matches!(err, horai_timeline::TimelineError::Period(_)));
}

#[test]
fn inverted_range_is_rejected() {
    let source = FixedEphemeris::new();
    let natal = natal();
    let config = CompositeConfig::default();

    let start = CivilDate::new(1990, 3, 10);
    let end = CivilDate::new(1990, 3, 2);
    let err =
        composite(&source, &natal, &config, start, end, &CancelToken::new()).unwrap_err();
    assert!(matches!(err, horai_timeline::TimelineError::Input(_)));
}
