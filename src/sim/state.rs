use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Event, EventKind, NationCode, WorldData};

use super::stockpile::Stockpile;

/// Sentinel development-progress value for a nation that is already armed
/// (or broke out earlier in the run) and therefore does not develop.
pub const DEV_ARMED: f64 = -1.0;

/// Mutable state owned by exactly one simulation run.
///
/// Created fresh at run start, mutated only by the engine and the policies
/// it calls, and discarded (apart from `events`) at run end. Policies
/// document which fields they read versus mutate.
#[derive(Debug)]
pub struct RunState {
    /// Monotonically non-decreasing tick counter.
    pub time: u64,
    /// Per-nation weapon counters. Never negative.
    pub remaining: BTreeMap<NationCode, Stockpile>,
    /// Per-nation development progress: ≥ 0, or exactly [`DEV_ARMED`].
    pub dev_progress: BTreeMap<NationCode, f64>,
    /// Nations that have launched, been struck, or joined.
    pub involved: BTreeSet<NationCode>,
    /// Strike counts keyed by (attacker, victim).
    pub struck: BTreeMap<(NationCode, NationCode), u32>,
    /// Who most recently struck each nation. Feeds targeting focus.
    pub last_striker: BTreeMap<NationCode, NationCode>,
    /// Total launch events so far; drives the global chaos term.
    pub launches: u32,
    /// Append-only event log, the run's sole externally visible output.
    pub events: Vec<Event>,
}

impl RunState {
    /// Initialize fresh run state from world reference data: stock ledgers
    /// from each nation's starting arsenal, development progress at
    /// [`DEV_ARMED`] for nations that start armed and 0 otherwise.
    pub fn new(world: &WorldData) -> Self {
        let mut remaining = BTreeMap::new();
        let mut dev_progress = BTreeMap::new();
        for (code, nation) in &world.nations {
            remaining.insert(code.clone(), Stockpile::from(&nation.arsenal));
            let progress = if nation.arsenal.total() > 0 {
                DEV_ARMED
            } else {
                0.0
            };
            dev_progress.insert(code.clone(), progress);
        }
        Self {
            time: 0,
            remaining,
            dev_progress,
            involved: BTreeSet::new(),
            struck: BTreeMap::new(),
            last_striker: BTreeMap::new(),
            launches: 0,
            events: Vec::new(),
        }
    }

    /// Append an event stamped with the current tick.
    pub fn push(&mut self, kind: EventKind) {
        self.events.push(Event { t: self.time, kind });
    }

    /// Stock ledger for a nation.
    ///
    /// # Panics
    /// Panics if `code` is not in the run (caller contract violation).
    pub fn stock(&self, code: &str) -> &Stockpile {
        self.remaining
            .get(code)
            .unwrap_or_else(|| panic!("stock: unknown nation {code}"))
    }

    /// Mutable stock ledger for a nation.
    ///
    /// # Panics
    /// Panics if `code` is not in the run (caller contract violation).
    pub fn stock_mut(&mut self, code: &str) -> &mut Stockpile {
        self.remaining
            .get_mut(code)
            .unwrap_or_else(|| panic!("stock_mut: unknown nation {code}"))
    }

    /// True iff the nation has any weapon remaining.
    pub fn can_launch(&self, code: &str) -> bool {
        self.stock(code).can_launch()
    }

    /// Record bookkeeping for one strike: both parties become involved,
    /// the (attacker, victim) strike count increments, the victim's
    /// last-striker pointer updates, and the launch tally grows.
    pub fn record_strike(&mut self, from: &str, to: &str) {
        self.involved.insert(from.to_string());
        self.involved.insert(to.to_string());
        *self
            .struck
            .entry((from.to_string(), to.to_string()))
            .or_insert(0) += 1;
        self.last_striker.insert(to.to_string(), from.to_string());
        self.launches += 1;
    }

    /// How many times `by` has struck `victim` so far.
    pub fn times_struck(&self, victim: &str, by: &str) -> u32 {
        self.struck
            .get(&(by.to_string(), victim.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// True iff `by` has struck `victim` at least once.
    pub fn has_struck(&self, by: &str, victim: &str) -> bool {
        self.times_struck(victim, by) > 0
    }
}
