#[macro_use]
mod macros;

pub mod event;
pub mod nation;
pub mod relations;
pub mod world;

pub use event::{Event, EventKind, WeaponKind};
pub use nation::{Arsenal, City, Doctrine, Nation, NationCode};
pub use relations::BilateralRelations;
pub use world::{Faction, WorldData};
