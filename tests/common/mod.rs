use escalation_sim::model::{Event, WorldData};
use escalation_sim::scenario::default_world;
use escalation_sim::sim::{RunConfig, run};

/// Run the canned ten-nation scenario from its central rivalry (Arkavia
/// strikes Veldrany) with a fixed seed.
pub fn run_scenario(seed: u64) -> (WorldData, Vec<Event>) {
    let world = default_world();
    let events = run(&world, "AR", "VL", &RunConfig::seeded(seed));
    (world, events)
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
