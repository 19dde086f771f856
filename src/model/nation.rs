use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Unique key identifying a nation within a [`WorldData`](super::WorldData).
pub type NationCode = String;

/// A nation's declared nuclear-use posture. Affects targeting focus,
/// willingness to join a conflict, and weapons-development rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Doctrine {
    NoFirstUse,
    Retaliatory,
    Threshold,
    Latent,
    FirstUse,
    Dormant,
    Ambiguous,
}

string_enum!(Doctrine {
    NoFirstUse => "no-first-use",
    Retaliatory => "retaliatory",
    Threshold => "threshold",
    Latent => "latent",
    FirstUse => "first-use",
    Dormant => "dormant",
    Ambiguous => "ambiguous",
});

/// A launch or impact site. Listed capital-first on a nation; earlier
/// entries are weighted more heavily when a site is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// Starting weapon counts for a nation. These seed the run's mutable
/// stock ledger; the reference data itself is never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arsenal {
    pub icbm: u32,
    pub slbm: u32,
    pub air: u32,
}

impl Arsenal {
    pub fn new(icbm: u32, slbm: u32, air: u32) -> Self {
        Self { icbm, slbm, air }
    }

    pub fn total(&self) -> u32 {
        self.icbm + self.slbm + self.air
    }
}

/// Static reference data for one nation. Read-only during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nation {
    pub code: NationCode,
    pub name: String,
    /// 1 (minor) through 5 (superpower).
    pub power_tier: u8,
    pub doctrine: Doctrine,
    /// Faction ids this nation belongs to. Possibly empty.
    #[serde(default)]
    pub factions: BTreeSet<String>,
    pub capital: City,
    /// Additional major cities, in decreasing strategic weight.
    #[serde(default)]
    pub cities: Vec<City>,
    pub arsenal: Arsenal,
}

impl Nation {
    /// True if this nation shares at least one faction with `other`.
    pub fn shares_faction(&self, other: &Nation) -> bool {
        self.factions.iter().any(|f| other.factions.contains(f))
    }

    /// All sites in weight order: capital first, then major cities.
    pub fn sites(&self) -> impl Iterator<Item = &City> {
        std::iter::once(&self.capital).chain(self.cities.iter())
    }
}
