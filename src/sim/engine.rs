use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::model::{Event, EventKind, NationCode, WorldData};

use super::development;
use super::diplomacy;
use super::helpers::pick_site;
use super::salvo;
use super::state::RunState;
use super::stockpile;
use super::targeting::{self, TargetChoice};

/// Chance a launching nation fires again within the same tick.
const CONTINUE_SALVO_CHANCE: f64 = 0.6;
/// Chance the attacker queues a follow-up strike intent after a tick in
/// which it launched.
const FOLLOW_UP_CHANCE: f64 = 0.35;

/// Bounds and seeding for a simulation run.
///
/// `max_events` and `max_time` guarantee structural termination; hitting
/// either truncates the timeline with a terminal `end` event and is normal
/// completion, not a failure. A fixed `seed` makes a run reproducible;
/// `None` draws entropy from the OS.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_events: usize,
    pub max_time: u64,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_events: 10_000,
            max_time: 1_000,
            seed: None,
        }
    }
}

/// A queued resolve-to-strike: `from` intends to hit `to`. Stock is only
/// checked at dequeue time; intents whose attacker has since run dry are
/// silently dropped, which paces the escalation.
#[derive(Debug, Clone)]
struct Intent {
    from: NationCode,
    to: NationCode,
}

/// Run one escalation simulation from an initiating strike intent and
/// return the event log. The log is non-empty, ends with exactly one
/// `end` event, and is never reordered.
///
/// `world` is caller-owned reference data; the run works on a private
/// deep copy. Event-stream determinism across runs is only provided when
/// `config.seed` is fixed.
///
/// # Panics
/// Panics if `initiator` or `first_target` is not a nation in `world`.
/// Unknown codes are a caller contract violation, validated before here.
pub fn run(world: &WorldData, initiator: &str, first_target: &str, config: &RunConfig) -> Vec<Event> {
    assert!(
        world.nations.contains_key(initiator),
        "run: unknown initiator {initiator}"
    );
    assert!(
        world.nations.contains_key(first_target),
        "run: unknown first target {first_target}"
    );

    let world = world.clone();
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut state = RunState::new(&world);
    let mut queue: VecDeque<Intent> = VecDeque::new();
    queue.push_back(Intent {
        from: initiator.to_string(),
        to: first_target.to_string(),
    });
    tracing::debug!(initiator, first_target, "escalation run started");

    let mut ticks: u64 = 0;
    while ticks < config.max_time && state.events.len() < config.max_events {
        for country in development::advance(&world, &mut state, &mut rng) {
            tracing::debug!(%country, t = state.time, "weapons breakout");
            state.push(EventKind::Breakout { country });
        }
        if state.events.len() >= config.max_events {
            break;
        }

        let Some(intent) = queue.pop_front() else {
            // Idle tick: development still proceeds, time still passes.
            state.time += 1;
            ticks += 1;
            continue;
        };
        if !state.can_launch(&intent.from) {
            tracing::warn!(from = %intent.from, "dropping stale intent, no stock left");
            ticks += 1;
            continue;
        }

        // The attacker fires one or more consecutive salvos this tick,
        // re-selecting targets between them.
        let mut target = TargetChoice {
            code: intent.to.clone(),
            is_betrayal: false,
        };
        let mut last_victim: Option<NationCode> = None;
        loop {
            if !execute_strike(&intent.from, &target, &world, &mut state, &mut rng) {
                break;
            }
            last_victim = Some(target.code.clone());
            if state.events.len() >= config.max_events || !state.can_launch(&intent.from) {
                break;
            }
            if rng.random_range(0.0..1.0) >= CONTINUE_SALVO_CHANCE {
                break;
            }
            let striker = last_striker_of(&state, &intent.from, &intent.to);
            target = targeting::pick_target(&intent.from, &striker, &world, &state, &mut rng);
        }

        if let Some(victim) = last_victim {
            state.time += 1;
            if state.events.len() < config.max_events {
                if rng.random_range(0.0..1.0) < FOLLOW_UP_CHANCE {
                    let striker = last_striker_of(&state, &intent.from, &victim);
                    let next =
                        targeting::pick_target(&intent.from, &striker, &world, &state, &mut rng);
                    queue.push_back(Intent {
                        from: intent.from.clone(),
                        to: next.code,
                    });
                }
                if state.can_launch(&victim) {
                    let back =
                        targeting::pick_target(&victim, &intent.from, &world, &state, &mut rng);
                    queue.push_back(Intent {
                        from: victim.clone(),
                        to: back.code,
                    });
                }
                for ally in diplomacy::join_allies(&victim, &intent.from, &world, &mut state, &mut rng)
                {
                    let choice =
                        targeting::pick_target(&ally, &intent.from, &world, &state, &mut rng);
                    queue.push_back(Intent {
                        from: ally,
                        to: choice.code,
                    });
                }
            }
        }
        ticks += 1;
    }

    state.push(EventKind::End);
    tracing::debug!(
        events = state.events.len(),
        final_tick = state.time,
        "escalation run finished"
    );
    state.events
}

/// Who last struck `code`, falling back to its current adversary.
fn last_striker_of(state: &RunState, code: &str, fallback: &str) -> NationCode {
    state
        .last_striker
        .get(code)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Fire one salvo from `from` at the chosen target: size the salvo,
/// select the weapon type, pick launch and impact sites, deplete stock,
/// and append the launch event. Returns false if no weapon remains.
fn execute_strike(
    from: &str,
    target: &TargetChoice,
    world: &WorldData,
    state: &mut RunState,
    rng: &mut dyn RngCore,
) -> bool {
    let attacker = world.nation(from);
    let victim = world.nation(&target.code);
    let stock = *state.stock(from);
    let Some(weapon) = stockpile::select_weapon(&stock) else {
        return false;
    };
    let count = salvo::salvo_size(state.time, attacker.power_tier, stock.total(), rng);
    let from_site = pick_site(attacker, rng).clone();
    let to_site = pick_site(victim, rng).clone();

    stockpile::deduct(state.stock_mut(from), weapon, count);
    state.record_strike(from, &target.code);
    if target.is_betrayal {
        tracing::debug!(from, to = %target.code, "faction betrayal strike");
    }
    state.push(EventKind::Launch {
        from: from.to_string(),
        to: target.code.clone(),
        weapon,
        count,
        from_city: from_site.name,
        from_lat: from_site.lat,
        from_lon: from_site.lon,
        to_city: to_site.name,
        to_lat: to_site.lat,
        to_lon: to_site.lon,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nation::{Arsenal, City, Doctrine, Nation};

    fn two_nation_world() -> WorldData {
        let mut world = WorldData::new();
        world.add_nation(Nation {
            code: "AA".to_string(),
            name: "Attacker".to_string(),
            power_tier: 5,
            doctrine: Doctrine::FirstUse,
            factions: Default::default(),
            capital: City::new("Alpha", 10.0, 20.0),
            cities: vec![],
            arsenal: Arsenal::new(10, 0, 0),
        });
        world.add_nation(Nation {
            code: "BB".to_string(),
            name: "Bystander".to_string(),
            power_tier: 3,
            doctrine: Doctrine::Dormant,
            factions: Default::default(),
            capital: City::new("Beta", -5.0, 40.0),
            cities: vec![],
            arsenal: Arsenal::default(),
        });
        world
    }

    #[test]
    fn seeded_two_nation_run_strikes_and_terminates() {
        let world = two_nation_world();
        for seed in [42, 99, 123, 777] {
            let events = run(&world, "AA", "BB", &RunConfig::seeded(seed));
            assert!(!events.is_empty());
            assert!(events.last().unwrap().is_end());
            assert_eq!(events.iter().filter(|e| e.is_end()).count(), 1);
            assert!(
                events.iter().any(|e| matches!(
                    &e.kind,
                    EventKind::Launch { from, to, .. } if from == "AA" && to == "BB"
                )),
                "seed {seed}: no launch from AA to BB"
            );
            assert!(events.last().unwrap().t <= 1_000);
        }
    }

    #[test]
    fn unarmed_initiator_degenerates_to_idle_run() {
        let world = two_nation_world();
        let config = RunConfig {
            max_time: 50,
            ..RunConfig::seeded(7)
        };
        let events = run(&world, "BB", "AA", &config);
        // BB is dormant with zero stock and a 150-point program: it cannot
        // arm within 50 ticks, so the run is development-only. The first
        // tick burns the stale intent without advancing time; the other 49
        // are idle ticks.
        assert!(events.iter().all(|e| e.is_end()));
        assert_eq!(events.last().unwrap().t, 49);
    }

    #[test]
    fn max_events_one_truncates_immediately() {
        let world = two_nation_world();
        let config = RunConfig {
            max_events: 1,
            ..RunConfig::seeded(3)
        };
        let events = run(&world, "AA", "BB", &config);
        assert!(events.len() <= 2);
        assert!(events.last().unwrap().is_end());
    }

    #[test]
    fn fixed_seed_reproduces_the_timeline() {
        let world = two_nation_world();
        let a = run(&world, "AA", "BB", &RunConfig::seeded(1234));
        let b = run(&world, "AA", "BB", &RunConfig::seeded(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn run_does_not_mutate_caller_world() {
        let world = two_nation_world();
        run(&world, "AA", "BB", &RunConfig::seeded(5));
        assert_eq!(world.nation("AA").arsenal, Arsenal::new(10, 0, 0));
    }

    #[test]
    #[should_panic(expected = "unknown initiator")]
    fn unknown_initiator_panics() {
        let world = two_nation_world();
        run(&world, "XX", "BB", &RunConfig::seeded(0));
    }

    #[test]
    #[should_panic(expected = "unknown first target")]
    fn unknown_target_panics() {
        let world = two_nation_world();
        run(&world, "AA", "XX", &RunConfig::seeded(0));
    }
}
