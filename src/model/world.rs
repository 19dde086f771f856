use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::nation::{Nation, NationCode};
use super::relations::BilateralRelations;

/// A named group of nations with shared defense commitments.
/// Membership is recorded on each [`Nation`], keyed by faction id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub id: String,
    pub name: String,
}

/// Static reference data for a simulation run: nations, factions, and
/// bilateral relation scores.
///
/// Owned by the caller; the engine takes a private deep copy at run start
/// so a run can never mutate shared reference data. Nations iterate in
/// code order (`BTreeMap`), which fixes the enumeration order the
/// targeting draw relies on for zero-weight ties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldData {
    pub nations: BTreeMap<NationCode, Nation>,
    pub factions: BTreeMap<String, Faction>,
    pub relations: BilateralRelations,
}

impl WorldData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a nation keyed by its own code.
    pub fn add_nation(&mut self, nation: Nation) {
        self.nations.insert(nation.code.clone(), nation);
    }

    pub fn add_faction(&mut self, id: &str, name: &str) {
        self.factions.insert(
            id.to_string(),
            Faction {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    /// Look up a nation by code.
    ///
    /// # Panics
    /// Panics if `code` is not in the world. Unknown codes are a caller
    /// contract violation, not a recoverable condition.
    pub fn nation(&self, code: &str) -> &Nation {
        self.nations
            .get(code)
            .unwrap_or_else(|| panic!("nation: unknown code {code}"))
    }

    /// Symmetric bilateral relation score, defaulting to 0.
    pub fn relation(&self, a: &str, b: &str) -> f64 {
        self.relations.get(a, b)
    }
}
