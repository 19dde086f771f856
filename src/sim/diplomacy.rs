use rand::{Rng, RngCore};

use crate::model::{Doctrine, EventKind, NationCode, WorldData};

use super::state::RunState;

// --- Join constants ---

const DESIRE_THRESHOLD: f64 = 6.0;
const JOIN_BASE_CHANCE: f64 = 0.4;
const JOIN_TIER_CHANCE: f64 = 0.2;
/// Desire gained per elapsed tick; long wars pull everyone in.
const TIME_PRESSURE: f64 = 0.5;
/// Fraction of a hostile attacker-relation converted into desire.
const HOSTILITY_SPUR: f64 = 0.3;

/// Reluctance of doctrines that would rather stay out.
fn doctrine_modifier(doctrine: Doctrine) -> f64 {
    match doctrine {
        Doctrine::Latent => 0.6,
        Doctrine::Dormant => 0.3,
        _ => 1.0,
    }
}

/// Decide which uninvolved nations join the conflict in reaction to a
/// strike on `victim` by `attacker`.
///
/// Reads `state.time` and `involved`; mutates `involved` and appends one
/// `faction-join` or `ally-join` event per joiner. Returns the codes that
/// newly joined, in world enumeration order.
pub fn join_allies(
    victim: &str,
    attacker: &str,
    world: &WorldData,
    state: &mut RunState,
    rng: &mut dyn RngCore,
) -> Vec<NationCode> {
    let victim_nation = world.nation(victim);
    let mut joined = Vec::new();

    for (code, nation) in &world.nations {
        if state.involved.contains(code) {
            continue;
        }

        let is_faction_member = nation.shares_faction(victim_nation);
        let mut desire = world.relation(code, victim)
            + f64::from(nation.power_tier)
            + state.time as f64 * TIME_PRESSURE;
        let attacker_relation = world.relation(code, attacker);
        if attacker_relation < 0.0 {
            desire += HOSTILITY_SPUR * attacker_relation.abs();
        }

        if !(is_faction_member || desire > DESIRE_THRESHOLD) {
            continue;
        }

        let modifier = doctrine_modifier(nation.doctrine);
        let chance = JOIN_BASE_CHANCE + f64::from(nation.power_tier) * JOIN_TIER_CHANCE * modifier;
        if rng.random_range(0.0..1.0) >= chance {
            continue;
        }

        state.involved.insert(code.clone());
        let intensity = desire * modifier;
        let kind = if is_faction_member {
            EventKind::FactionJoin {
                country: code.clone(),
                reason: victim.to_string(),
                intensity,
            }
        } else {
            EventKind::AllyJoin {
                country: code.clone(),
                reason: victim.to_string(),
                intensity,
            }
        };
        state.push(kind);
        joined.push(code.clone());
    }

    joined
}
