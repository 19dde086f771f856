use serde::{Deserialize, Serialize};

use super::nation::NationCode;

/// Weapon delivery platform, in launch-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WeaponKind {
    Icbm,
    Slbm,
    Air,
}

string_enum!(WeaponKind {
    Icbm => "icbm",
    Slbm => "slbm",
    Air => "air",
});

/// One timeline entry. The event log is the engine's sole output; the
/// presentation layer consumes it as ordered data and must treat `end`
/// as the unambiguous final element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Tick at which the event was appended. Non-decreasing across the log.
    pub t: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EventKind {
    /// A salvo in flight from one nation's site to another's.
    Launch {
        from: NationCode,
        to: NationCode,
        weapon: WeaponKind,
        count: u32,
        from_city: String,
        from_lat: f64,
        from_lon: f64,
        to_city: String,
        to_lat: f64,
        to_lon: f64,
    },
    /// An uninvolved nation entering the conflict out of affinity.
    AllyJoin {
        country: NationCode,
        /// The nation whose plight triggered the join.
        reason: NationCode,
        intensity: f64,
    },
    /// An uninvolved nation entering the conflict on a faction commitment.
    FactionJoin {
        country: NationCode,
        reason: NationCode,
        intensity: f64,
    },
    /// A developing nation first acquiring weapon stock.
    Breakout { country: NationCode },
    /// Terminal marker. Exactly one per run, always last.
    End,
}

impl Event {
    pub fn is_end(&self) -> bool {
        matches!(self.kind, EventKind::End)
    }

    pub fn is_launch(&self) -> bool {
        matches!(self.kind, EventKind::Launch { .. })
    }
}
