//! Point-in-time resolution: the chain of active periods for an instant.

use crate::error::PeriodError;
use crate::firdaria::FirdariaStrategy;
use crate::natal::{Lot, NatalContext};
use crate::profection::ProfectionStrategy;
use crate::releasing::ReleasingStrategy;
use crate::strategy::SubdivisionStrategy;
use crate::types::{Period, PeriodSystem};
use crate::vimshottari::VimshottariStrategy;

/// The strategy for a system. `lot` selects the Zodiacal Releasing
/// starting point and is ignored by the other systems.
pub fn strategy_for(system: PeriodSystem, lot: Lot) -> Box<dyn SubdivisionStrategy> {
    match system {
        PeriodSystem::Vimshottari => Box::new(VimshottariStrategy::new()),
        PeriodSystem::ZodiacalReleasing => Box::new(ReleasingStrategy::new(lot)),
        PeriodSystem::Firdaria => Box::new(FirdariaStrategy::new()),
        PeriodSystem::AnnualProfection => Box::new(ProfectionStrategy::new()),
    }
}

/// Resolve the chain of active periods from level 1 down to `max_level`
/// (clamped to the strategy's deepest level), each nested in its
/// predecessor.
///
/// Fails with [`PeriodError::OutOfDomain`] when the query instant
/// precedes the birth instant. Never fails for instants far in the
/// future: level-1 walks wrap cyclically at any horizon. Finite sibling
/// partitions are invariant-checked before selection; a violation is a
/// strategy bug and surfaces as [`PeriodError::Invariant`].
pub fn resolve_periods(
    strategy: &dyn SubdivisionStrategy,
    natal: &NatalContext,
    query_jd: f64,
    max_level: u8,
) -> Result<Vec<Period>, PeriodError> {
    if !query_jd.is_finite() {
        return Err(PeriodError::Input("query instant must be finite"));
    }
    if max_level == 0 {
        return Err(PeriodError::Input("max_level must be at least 1"));
    }
    if query_jd < natal.birth_jd() {
        return Err(PeriodError::OutOfDomain {
            query_jd,
            birth_jd: natal.birth_jd(),
        });
    }

    let depth = max_level.min(strategy.max_level());
    let mut chain: Vec<Period> = Vec::with_capacity(depth as usize);

    let level1 = strategy.level1(natal)?;
    let active = level1
        .active_at(query_jd)
        .ok_or(PeriodError::Invariant("level-1 walk ended before query"))?;
    chain.push(active);

    for _ in 1..depth {
        let parent = chain[chain.len() - 1];
        let walk = strategy.subdivide(natal, &parent);

        if walk.is_partition() {
            let children = walk.one_pass();
            crate::walk::verify_partition(&children, &parent)?;
            let active = children
                .into_iter()
                .find(|c| c.contains(query_jd))
                .ok_or(PeriodError::Invariant("no child contains query instant"))?;
            chain.push(active);
        } else {
            let active = walk
                .active_at(query_jd)
                .ok_or(PeriodError::Invariant("child walk ended before query"))?;
            chain.push(active);
        }
    }

    Ok(chain)
}
