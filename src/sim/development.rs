use rand::{Rng, RngCore};

use crate::model::{Doctrine, NationCode, WorldData};

use super::state::{DEV_ARMED, RunState};

// --- Regeneration ---

/// ICBMs regained per tick per power tier for an armed nation.
const REGEN_PER_TIER: f64 = 0.005;
const REGEN_AIR_FACTOR: f64 = 0.5;
const REGEN_SLBM_FACTOR: f64 = 0.3;

// --- Weapons programs ---

const PROGRESS_TIER_BONUS: f64 = 0.1;
const PROGRESS_ROLL_FLOOR: f64 = 0.2;
const PROGRESS_ROLL_SPAN: f64 = 1.6;

/// (per-tick progress base, breakout threshold) for doctrines that run a
/// weapons program. All other doctrines never develop.
fn program(doctrine: Doctrine) -> Option<(f64, f64)> {
    match doctrine {
        Doctrine::Threshold => Some((2.0, 50.0)),
        Doctrine::Latent => Some((1.0, 100.0)),
        Doctrine::Dormant => Some((0.5, 150.0)),
        _ => None,
    }
}

/// One development pass over every nation.
///
/// Reads `world`; mutates `state.remaining` (passive regeneration for
/// armed nations) and `state.dev_progress` (program advancement for
/// developing ones). Returns the codes that newly became armed this tick,
/// in world enumeration order; the engine appends their breakout events.
pub fn advance(world: &WorldData, state: &mut RunState, rng: &mut dyn RngCore) -> Vec<NationCode> {
    let mut breakouts = Vec::new();

    for (code, nation) in &world.nations {
        let tier = f64::from(nation.power_tier);
        let stock = state.stock_mut(code);

        if stock.can_launch() {
            // Armed nations slowly rebuild and never regress.
            let rate = tier * REGEN_PER_TIER;
            stock.icbm += rate;
            if stock.air > 0.0 {
                stock.air += rate * REGEN_AIR_FACTOR;
            }
            if stock.slbm > 0.0 {
                stock.slbm += rate * REGEN_SLBM_FACTOR;
            }
            continue;
        }

        let progress = state.dev_progress.get_mut(code).unwrap_or_else(|| {
            panic!("advance: no dev progress entry for {code}")
        });
        if *progress < 0.0 {
            continue;
        }
        let Some((base, threshold)) = program(nation.doctrine) else {
            continue;
        };

        *progress += base * (PROGRESS_ROLL_FLOOR + rng.random_range(0.0..1.0) * PROGRESS_ROLL_SPAN)
            + tier * PROGRESS_TIER_BONUS;
        if *progress >= threshold {
            *progress = DEV_ARMED;
            let stock = state.stock_mut(code);
            stock.icbm = tier * 3.0;
            stock.air = tier * 2.0;
            stock.slbm = if nation.power_tier >= 3 { 2.0 } else { 0.0 };
            breakouts.push(code.clone());
        }
    }

    breakouts
}
