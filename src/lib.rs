pub mod flush;
pub mod model;
pub mod scenario;
pub mod sim;

pub use model::{
    BilateralRelations, City, Doctrine, Event, EventKind, Nation, NationCode, WeaponKind,
    WorldData,
};
pub use sim::{RunConfig, RunState, run};
