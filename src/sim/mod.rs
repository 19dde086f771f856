pub mod development;
pub mod diplomacy;
mod engine;
mod helpers;
pub mod salvo;
pub mod state;
pub mod stockpile;
pub mod targeting;

pub use engine::{RunConfig, run};
pub use state::{DEV_ARMED, RunState};
pub use stockpile::{Stockpile, deduct, select_weapon};
pub use targeting::TargetChoice;
