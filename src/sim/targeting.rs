use rand::{Rng, RngCore};

use crate::model::{Doctrine, NationCode, WorldData};

use super::helpers::weighted_index;
use super::state::RunState;

// --- Weight constants ---

/// Chaos accrued per launch event; raises everyone's base appeal.
const CHAOS_PER_LAUNCH: f64 = 0.75;
const TIER_WEIGHT: f64 = 5.0;
/// Flat bonus for a candidate that has struck the attacker before.
const RETALIATION_BASE: f64 = 500.0;
/// Additional bonus per prior strike received from that candidate.
const RETALIATION_PER_STRIKE: f64 = 50.0;
/// Bonus for a candidate allied with someone who struck the attacker.
const AGGRESSOR_ALLY_BONUS: f64 = 300.0;
const BETRAYAL_BASE_CHANCE: f64 = 0.05;
const BETRAYAL_CHANCE_PER_CHAOS: f64 = 0.01;
const BETRAYAL_WEIGHT: f64 = 100.0;
/// Relation score above which a candidate counts as friendly. Decays as
/// chaos rises, so late-war nobody is safe.
const SAFETY_CEILING: f64 = 8.0;
const SAFETY_DECAY_PER_CHAOS: f64 = 0.2;
const FRIENDLY_WEIGHT_FACTOR: f64 = 0.1;

/// Targeting focus on one's last attacker, keyed by the attacker's own
/// doctrine. Restrained doctrines concentrate on whoever hit them;
/// aggressive ones spread strikes around.
fn doctrine_focus(doctrine: Doctrine) -> f64 {
    match doctrine {
        Doctrine::NoFirstUse => 20.0,
        Doctrine::Retaliatory | Doctrine::Threshold => 15.0,
        Doctrine::Latent => 10.0,
        Doctrine::FirstUse | Doctrine::Dormant => 5.0,
        Doctrine::Ambiguous => 3.0,
    }
}

/// The outcome of one targeting decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetChoice {
    pub code: NationCode,
    /// True when the chosen target shares a faction with the attacker.
    pub is_betrayal: bool,
}

/// Pick a strike target for `attacker`.
///
/// Reads `state.remaining`, `involved`, `struck`, and `launches`; mutates
/// nothing. Candidates are all other nations that hold stock or are
/// already involved, weighted by power tier, global chaos, retaliation
/// history, alliance entanglement, and doctrine focus on `last_striker`.
/// Falls back to `last_striker` when the candidate pool is empty.
///
/// # Panics
/// Panics if `attacker` is not a nation in `world`.
pub fn pick_target(
    attacker: &str,
    last_striker: &str,
    world: &WorldData,
    state: &RunState,
    rng: &mut dyn RngCore,
) -> TargetChoice {
    let attacker_nation = world.nation(attacker);
    let chaos = f64::from(state.launches) * CHAOS_PER_LAUNCH;
    let safety_threshold = (SAFETY_CEILING - chaos * SAFETY_DECAY_PER_CHAOS).max(0.0);

    let mut candidates: Vec<(&NationCode, f64, bool)> = Vec::new();
    for (code, nation) in &world.nations {
        if code == attacker {
            continue;
        }
        if !(state.stock(code).can_launch() || state.involved.contains(code)) {
            continue;
        }

        let mut weight = f64::from(nation.power_tier) * TIER_WEIGHT + chaos;
        let mut is_betrayal = false;

        if code == last_striker {
            weight *= doctrine_focus(attacker_nation.doctrine);
        }

        let strikes_received = state.times_struck(attacker, code);
        if strikes_received > 0 {
            weight += RETALIATION_BASE + RETALIATION_PER_STRIKE * f64::from(strikes_received);
        }

        let allied_with_aggressor = world.nations.values().any(|other| {
            other.code != *code
                && state.has_struck(&other.code, attacker)
                && other.shares_faction(nation)
        });
        if allied_with_aggressor {
            weight += AGGRESSOR_ALLY_BONUS;
        }

        if nation.shares_faction(attacker_nation) {
            let betrayal_chance = BETRAYAL_BASE_CHANCE + chaos * BETRAYAL_CHANCE_PER_CHAOS;
            if rng.random_range(0.0..1.0) < betrayal_chance {
                weight = BETRAYAL_WEIGHT + chaos;
                is_betrayal = true;
            } else {
                weight = 0.0;
            }
        }

        if world.relation(attacker, code) > safety_threshold
            && strikes_received == 0
            && !is_betrayal
        {
            weight *= FRIENDLY_WEIGHT_FACTOR;
        }

        candidates.push((code, weight, is_betrayal));
    }

    if candidates.is_empty() {
        return TargetChoice {
            code: last_striker.to_string(),
            is_betrayal: false,
        };
    }

    let weights: Vec<f64> = candidates.iter().map(|(_, w, _)| *w).collect();
    let total: f64 = weights.iter().sum();
    let roll = if total > 0.0 {
        rng.random_range(0.0..total)
    } else {
        0.0
    };
    let (code, _, is_betrayal) = &candidates[weighted_index(&weights, roll)];
    TargetChoice {
        code: (*code).clone(),
        is_betrayal: *is_betrayal,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::model::nation::{Arsenal, City, Doctrine, Nation};

    fn nation(code: &str, tier: u8, doctrine: Doctrine, factions: &[&str], icbm: u32) -> Nation {
        Nation {
            code: code.to_string(),
            name: code.to_string(),
            power_tier: tier,
            doctrine,
            factions: factions.iter().map(|f| f.to_string()).collect(),
            capital: City::new("Cap", 0.0, 0.0),
            cities: vec![],
            arsenal: Arsenal::new(icbm, 0, 0),
        }
    }

    fn world_of(nations: Vec<Nation>) -> WorldData {
        let mut world = WorldData::new();
        for n in nations {
            world.add_nation(n);
        }
        world
    }

    #[test]
    fn falls_back_to_last_striker_when_pool_empty() {
        // Only the attacker holds stock; nobody is involved yet.
        let world = world_of(vec![
            nation("AA", 5, Doctrine::FirstUse, &[], 10),
            nation("BB", 3, Doctrine::Dormant, &[], 0),
        ]);
        let state = RunState::new(&world);
        let mut rng = SmallRng::seed_from_u64(0);
        let choice = pick_target("AA", "BB", &world, &state, &mut rng);
        assert_eq!(choice.code, "BB");
        assert!(!choice.is_betrayal);
    }

    #[test]
    fn retaliation_dominates_targeting() {
        let world = world_of(vec![
            nation("AA", 3, Doctrine::Retaliatory, &[], 10),
            nation("BB", 3, Doctrine::FirstUse, &[], 10),
            nation("CC", 3, Doctrine::FirstUse, &[], 10),
        ]);
        let mut state = RunState::new(&world);
        state.record_strike("BB", "AA");
        let mut rng = SmallRng::seed_from_u64(42);
        let mut picked_bb = 0;
        for _ in 0..200 {
            if pick_target("AA", "BB", &world, &state, &mut rng).code == "BB" {
                picked_bb += 1;
            }
        }
        // BB carries the 500+ retaliation bonus and the focus multiplier
        // against CC's bare tier weight.
        assert!(picked_bb > 190, "BB picked only {picked_bb}/200");
    }

    #[test]
    fn allies_only_targeted_as_betrayals() {
        let world = world_of(vec![
            nation("AA", 3, Doctrine::FirstUse, &["pact"], 10),
            nation("BB", 3, Doctrine::FirstUse, &["pact"], 10),
            nation("CC", 3, Doctrine::FirstUse, &[], 10),
        ]);
        let state = RunState::new(&world);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..300 {
            let choice = pick_target("AA", "CC", &world, &state, &mut rng);
            if choice.code == "BB" {
                assert!(choice.is_betrayal, "ally struck without betrayal flag");
            }
        }
    }

    #[test]
    fn friendly_nations_strongly_deprioritized() {
        let mut world = world_of(vec![
            nation("AA", 3, Doctrine::FirstUse, &[], 10),
            nation("BB", 3, Doctrine::FirstUse, &[], 10),
            nation("CC", 3, Doctrine::FirstUse, &[], 10),
        ]);
        // BB is a close friend of AA, above the safety threshold of 8.
        world.relations.set("AA", "BB", 9.0);
        let state = RunState::new(&world);
        let mut rng = SmallRng::seed_from_u64(99);
        let mut picked_bb = 0;
        for _ in 0..300 {
            if pick_target("AA", "CC", &world, &state, &mut rng).code == "BB" {
                picked_bb += 1;
            }
        }
        // Weights: BB ≈ 1.5 (after the 0.1 factor) vs CC ≈ 15·focus.
        assert!(picked_bb < 30, "friendly BB picked {picked_bb}/300");
    }

    #[test]
    fn unarmed_involved_nations_are_candidates() {
        let world = world_of(vec![
            nation("AA", 3, Doctrine::FirstUse, &[], 10),
            nation("BB", 3, Doctrine::Dormant, &[], 0),
        ]);
        let mut state = RunState::new(&world);
        state.involved.insert("BB".to_string());
        let mut rng = SmallRng::seed_from_u64(3);
        let choice = pick_target("AA", "BB", &world, &state, &mut rng);
        assert_eq!(choice.code, "BB");
    }

    #[test]
    fn focus_table_covers_all_doctrines() {
        assert_eq!(doctrine_focus(Doctrine::NoFirstUse), 20.0);
        assert_eq!(doctrine_focus(Doctrine::Retaliatory), 15.0);
        assert_eq!(doctrine_focus(Doctrine::Threshold), 15.0);
        assert_eq!(doctrine_focus(Doctrine::Latent), 10.0);
        assert_eq!(doctrine_focus(Doctrine::FirstUse), 5.0);
        assert_eq!(doctrine_focus(Doctrine::Dormant), 5.0);
        assert_eq!(doctrine_focus(Doctrine::Ambiguous), 3.0);
    }
}
