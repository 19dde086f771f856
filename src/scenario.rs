//! Canned world data for tests and downstream demos. The nations are
//! fictional; no real-world accuracy is intended anywhere in the model.

use std::collections::BTreeSet;

use crate::model::nation::{Arsenal, City, Doctrine, Nation};
use crate::model::world::WorldData;

fn nation(
    code: &str,
    name: &str,
    power_tier: u8,
    doctrine: Doctrine,
    factions: &[&str],
    capital: City,
    cities: Vec<City>,
    arsenal: Arsenal,
) -> Nation {
    Nation {
        code: code.to_string(),
        name: name.to_string(),
        power_tier,
        doctrine,
        factions: factions.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
        capital,
        cities,
        arsenal,
    }
}

/// A ten-nation world with two factions, a spread of doctrines and power
/// tiers, and enough bilateral tension to escalate from any starting pair.
pub fn default_world() -> WorldData {
    let mut world = WorldData::new();
    world.add_faction("concord", "Northern Concord");
    world.add_faction("pact", "Meridian Pact");

    world.add_nation(nation(
        "VL",
        "Veldrany",
        5,
        Doctrine::FirstUse,
        &["pact"],
        City::new("Vel Arra", 48.2, 61.5),
        vec![
            City::new("Dravik", 51.0, 58.3),
            City::new("Ostrev", 44.7, 66.1),
        ],
        Arsenal::new(60, 12, 30),
    ));
    world.add_nation(nation(
        "AR",
        "Arkavia",
        5,
        Doctrine::Retaliatory,
        &["concord"],
        City::new("Arkenfell", 55.4, -12.8),
        vec![
            City::new("Brundholm", 58.9, -9.2),
            City::new("Caldris", 52.1, -17.5),
        ],
        Arsenal::new(55, 14, 25),
    ));
    world.add_nation(nation(
        "KH",
        "Khormend",
        4,
        Doctrine::NoFirstUse,
        &["pact"],
        City::new("Khor Aszad", 31.6, 74.9),
        vec![City::new("Mezrat", 28.4, 70.2)],
        Arsenal::new(20, 4, 10),
    ));
    world.add_nation(nation(
        "SE",
        "Serathia",
        3,
        Doctrine::Retaliatory,
        &["concord"],
        City::new("Serat", 41.3, -3.7),
        vec![City::new("Volmere", 43.8, -0.9)],
        Arsenal::new(8, 2, 6),
    ));
    world.add_nation(nation(
        "NR",
        "Norvik",
        3,
        Doctrine::NoFirstUse,
        &["concord"],
        City::new("Norvik Keep", 63.1, 5.4),
        vec![],
        Arsenal::new(6, 0, 4),
    ));
    world.add_nation(nation(
        "QA",
        "Qadesh",
        2,
        Doctrine::FirstUse,
        &[],
        City::new("Qadesh City", 24.9, 39.6),
        vec![],
        Arsenal::new(4, 0, 2),
    ));
    world.add_nation(nation(
        "TY",
        "Tyrennia",
        2,
        Doctrine::Ambiguous,
        &[],
        City::new("Tyre Nova", 36.2, 22.8),
        vec![],
        Arsenal::new(3, 0, 1),
    ));
    world.add_nation(nation(
        "OS",
        "Ossoria",
        3,
        Doctrine::Threshold,
        &[],
        City::new("Ossgard", 47.5, 19.1),
        vec![City::new("Pellin", 45.0, 15.6)],
        Arsenal::default(),
    ));
    world.add_nation(nation(
        "ML",
        "Maliya",
        2,
        Doctrine::Latent,
        &[],
        City::new("Malin Sur", 14.7, 47.3),
        vec![],
        Arsenal::default(),
    ));
    world.add_nation(nation(
        "ZA",
        "Zansul",
        1,
        Doctrine::Dormant,
        &[],
        City::new("Zan Tarai", -8.3, 33.0),
        vec![],
        Arsenal::default(),
    ));

    // Rivalries and friendships. Scores are symmetric on lookup, so each
    // pair is stored once.
    let rel = &mut world.relations;
    rel.set("AR", "VL", -7.0);
    rel.set("AR", "KH", -5.0);
    rel.set("SE", "VL", -4.0);
    rel.set("NR", "KH", -2.0);
    rel.set("OS", "VL", -6.0);
    rel.set("QA", "AR", -3.0);
    rel.set("TY", "VL", -2.0);
    rel.set("KH", "VL", 6.0);
    rel.set("AR", "SE", 7.0);
    rel.set("AR", "NR", 6.0);
    rel.set("SE", "NR", 5.0);
    rel.set("ML", "AR", 4.0);
    rel.set("OS", "AR", 3.0);
    rel.set("QA", "VL", 2.0);

    world
}
