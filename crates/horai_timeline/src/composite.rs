//! Composite intensity scoring over a date range.
//!
//! For each calendar day the scorer resolves the active level-1 ruler of
//! every configured period system, counts hard transits, checks eclipse
//! proximity, and combines the signals into one weighted score. Dates are
//! independent of each other; a cancel flag is polled once per date and a
//! cancelled run returns the dates already scored, still ranked.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horai_core::{Body, CivilDate, EphemerisSource};
use horai_periods::{
    Lot, NatalContext, PeriodSystem, Ruler, resolve_periods, strategy_for,
};

use crate::error::TimelineError;
use crate::transit::{DEFAULT_ORB_DEG, hard_transit_count};

/// Days around an eclipse during which its weight applies.
pub const ECLIPSE_PROXIMITY_DAYS: f64 = 30.0;

/// Additive weights for the scoring signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Per hard transit counted on the date.
    pub hard_transit: u32,
    /// Flat bonus when the Vimshottari lord is a malefic or node.
    pub vimshottari_malefic: u32,
    /// Flat bonus when the Firdaria lord is Mars, Saturn or the south node.
    pub firdaria_malefic: u32,
    /// Per eclipse window within [`ECLIPSE_PROXIMITY_DAYS`] of the date.
    pub eclipse_proximity: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hard_transit: 3,
            vimshottari_malefic: 5,
            firdaria_malefic: 4,
            eclipse_proximity: 10,
        }
    }
}

/// Scorer configuration.
#[derive(Debug, Clone)]
pub struct CompositeConfig {
    /// Period systems whose level-1 rulers feed the score.
    pub systems: Vec<PeriodSystem>,
    /// Lot used by Zodiacal Releasing when configured.
    pub lot: Lot,
    pub weights: ScoreWeights,
    /// Number of entries kept in the ranked listing.
    pub top_n: usize,
    /// Aspect orb for hard transits in degrees.
    pub transit_orb_deg: f64,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            systems: vec![
                PeriodSystem::Vimshottari,
                PeriodSystem::ZodiacalReleasing,
                PeriodSystem::Firdaria,
                PeriodSystem::AnnualProfection,
            ],
            lot: Lot::Fortune,
            weights: ScoreWeights::default(),
            top_n: 10,
            transit_orb_deg: DEFAULT_ORB_DEG,
        }
    }
}

/// One scored date.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub date: CivilDate,
    pub jd_utc: f64,
    /// Active level-1 ruler per configured system, in config order.
    pub rulers: Vec<(PeriodSystem, Ruler)>,
    pub transit_count: usize,
    pub score: u32,
}

/// Shared cancellation flag polled once per scored date.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Dates already scored remain valid.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Output of a scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeResult {
    /// Top-N entries, score descending, earlier date winning ties.
    pub ranked: Vec<ScoreEntry>,
    /// Every scored entry in date order.
    pub entries: Vec<ScoreEntry>,
    /// True when the run stopped early at the cancel token.
    pub cancelled: bool,
}

fn vimshottari_lord_is_malefic(ruler: Ruler) -> bool {
    let lord = ruler.lord();
    lord.is_traditional_malefic() || lord.is_node()
}

fn firdaria_lord_is_malefic(ruler: Ruler) -> bool {
    let lord = ruler.lord();
    lord.is_traditional_malefic() || lord == Body::SouthNode
}

/// Score the inclusive date range `[start, end]` at day granularity.
///
/// Eclipse windows are fetched once for the whole range. Each date is
/// scored independently; an adapter or resolver failure on any date aborts
/// the run with the cause.
pub fn composite(
    source: &dyn EphemerisSource,
    natal: &NatalContext,
    config: &CompositeConfig,
    start: CivilDate,
    end: CivilDate,
    cancel: &CancelToken,
) -> Result<CompositeResult, TimelineError> {
    let start_jd = start.to_jd();
    let end_jd = end.to_jd();
    if end_jd < start_jd {
        return Err(TimelineError::Input("end date precedes start date"));
    }
    if config.systems.is_empty() {
        return Err(TimelineError::Input("at least one period system required"));
    }

    // The horizon must reach proximity range past both ends: an eclipse
    // up to 30 days after the last scored date still weights it.
    let horizon = end_jd - start_jd + 2.0 * ECLIPSE_PROXIMITY_DAYS;
    let eclipses = source.eclipse_windows(start_jd - ECLIPSE_PROXIMITY_DAYS, horizon)?;

    let strategies: Vec<_> = config
        .systems
        .iter()
        .map(|&system| (system, strategy_for(system, config.lot)))
        .collect();

    let day_count = (end_jd - start_jd).round() as i64 + 1;
    let mut entries: Vec<ScoreEntry> = Vec::with_capacity(day_count as usize);
    let mut cancelled = false;

    for day in 0..day_count {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }
        let jd = start_jd + day as f64;
        let date = CivilDate::from_jd(jd);

        let mut rulers = Vec::with_capacity(config.systems.len());
        let mut score = 0u32;

        for (system, strategy) in &strategies {
            let system = *system;
            let chain = resolve_periods(strategy.as_ref(), natal, jd, 1)?;
            let ruler = chain[0].ruler;
            rulers.push((system, ruler));

            match system {
                PeriodSystem::Vimshottari if vimshottari_lord_is_malefic(ruler) => {
                    score += config.weights.vimshottari_malefic;
                }
                PeriodSystem::Firdaria if firdaria_lord_is_malefic(ruler) => {
                    score += config.weights.firdaria_malefic;
                }
                _ => {}
            }
        }

        let transit_count = hard_transit_count(source, natal, jd, config.transit_orb_deg)?;
        score += config.weights.hard_transit * transit_count as u32;

        for window in &eclipses {
            if (window.jd_utc - jd).abs() <= ECLIPSE_PROXIMITY_DAYS {
                score += config.weights.eclipse_proximity;
            }
        }

        entries.push(ScoreEntry {
            date,
            jd_utc: jd,
            rulers,
            transit_count,
            score,
        });
    }

    let mut ranked = entries.clone();
    // Stable sort on descending score keeps the earlier date on ties.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(config.top_n);

    Ok(CompositeResult {
        ranked,
        entries,
        cancelled,
    })
}
