//! World construction from parsed seed records: validation, the two-pass
//! graph build, and the random scatter of creatures and items. Also carries
//! the built-in canonical world so the game runs without any data files.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::errors::GameError;
use super::types::{Creature, CreatureRecord, Item, ItemRecord, LocationRecord};
use super::world::{Location, WorldGraph};

/// Chance that a consumable item is duplicated into a second location.
const DUPLICATE_CHANCE: f64 = 0.5;

/// Parsed seed records, ready for world construction. Produced by the
/// loader or by [`canonical_seed`].
#[derive(Debug, Clone, Default)]
pub struct WorldSeed {
    pub locations: Vec<LocationRecord>,
    pub creatures: Vec<CreatureRecord>,
    pub items: Vec<ItemRecord>,
}

/// A constructed world plus the creatures scattered over it.
#[derive(Debug)]
pub struct BuiltWorld {
    pub graph: WorldGraph,
    pub creatures: Vec<Creature>,
    /// Uniformly random starting location for the player's Pymon.
    pub start: String,
}

/// Validate the seed and build the graph, then scatter creatures and items
/// over uniformly random locations. Consumable items have an independent
/// 50% chance of a second, distinct copy elsewhere.
pub fn build_world(seed: &WorldSeed, rng: &mut impl Rng) -> Result<BuiltWorld, GameError> {
    if seed.locations.is_empty() {
        return Err(GameError::bad_seed(
            "locations",
            "no locations found in the seed",
        ));
    }

    // Pass one: validate and insert every node.
    let mut graph = WorldGraph::new();
    let mut seen = HashSet::new();
    for record in &seed.locations {
        if record.name.trim().is_empty() || record.description.trim().is_empty() {
            return Err(GameError::bad_seed(
                "locations",
                "location name and description cannot be empty",
            ));
        }
        if !seen.insert(record.name.clone()) {
            return Err(GameError::bad_seed(
                "locations",
                format!("duplicate location name '{}'", record.name),
            ));
        }
        graph.insert(Location::new(&record.name, &record.description));
    }

    // Pass two: connect. Every declared neighbor must exist by now.
    for record in &seed.locations {
        for (direction, neighbor) in record.neighbors() {
            if graph.location(neighbor).is_none() {
                return Err(GameError::bad_seed(
                    "locations",
                    format!(
                        "'{}' connects {} to unknown location '{}'",
                        record.name, direction, neighbor
                    ),
                ));
            }
            graph
                .connect(&record.name, direction, neighbor)
                .map_err(|e| GameError::bad_seed("locations", e.to_string()))?;
        }
    }

    let names: Vec<String> = graph.location_names().iter().map(|s| s.to_string()).collect();

    // Creatures land on uniformly random locations.
    let mut creatures = Vec::with_capacity(seed.creatures.len());
    for record in &seed.creatures {
        let home = names.choose(rng).cloned().unwrap_or_else(|| names[0].clone());
        graph.place_creature(&home, &record.nickname);
        debug!("creature {} placed at {}", record.nickname, home);
        creatures.push(Creature {
            nickname: record.nickname.clone(),
            description: record.description.clone(),
            location: home,
            adoptable: record.adoptable,
        });
    }

    // Items too; consumables may get one deliberate duplicate.
    for record in &seed.items {
        let spot = names.choose(rng).cloned().unwrap_or_else(|| names[0].clone());
        graph.place_item(&spot, Item::from(record));
        debug!("item {} placed at {}", record.name, spot);
        if record.consumable && rng.gen_bool(DUPLICATE_CHANCE) {
            let second = names.choose(rng).cloned().unwrap_or_else(|| names[0].clone());
            graph.place_item(&second, Item::from(record));
            debug!("item {} duplicated into {}", record.name, second);
        }
    }

    let start = names.choose(rng).cloned().unwrap_or_else(|| names[0].clone());
    info!(
        "world built: {} locations, {} creatures, starting at {}",
        graph.len(),
        creatures.len(),
        start
    );

    Ok(BuiltWorld {
        graph,
        creatures,
        start,
    })
}

/// The built-in world: a small connected map with a handful of creatures
/// and the three effectful items, so `pymon play` works out of the box.
pub fn canonical_seed() -> WorldSeed {
    let location = |name: &str,
                    description: &str,
                    west: Option<&str>,
                    north: Option<&str>,
                    east: Option<&str>,
                    south: Option<&str>| LocationRecord {
        name: name.to_string(),
        description: description.to_string(),
        west: west.map(str::to_string),
        north: north.map(str::to_string),
        east: east.map(str::to_string),
        south: south.map(str::to_string),
    };
    let creature = |nickname: &str, description: &str, adoptable: bool| CreatureRecord {
        nickname: nickname.to_string(),
        description: description.to_string(),
        adoptable,
    };
    let item = |name: &str, description: &str, pickable: bool, consumable: bool| ItemRecord {
        name: name.to_string(),
        description: description.to_string(),
        pickable,
        consumable,
    };

    WorldSeed {
        locations: vec![
            location(
                "Playground",
                "an open playground with a rusty slide",
                None,
                Some("Beach"),
                Some("School"),
                None,
            ),
            location(
                "School",
                "an old school building with creaky floors",
                Some("Playground"),
                None,
                None,
                Some("Jungle"),
            ),
            location(
                "Beach",
                "a windy beach littered with driftwood",
                None,
                None,
                None,
                Some("Playground"),
            ),
            location(
                "Jungle",
                "a dense jungle humming with insects",
                None,
                Some("School"),
                None,
                None,
            ),
        ],
        creatures: vec![
            creature("Marimon", "small and fierce with a glowing tail", true),
            creature("Tobimon", "gentle but quick to flee", true),
            creature("Gorillamon", "huge, grumpy, and untameable", false),
        ],
        items: vec![
            item("apple", "a crisp red apple that restores energy", true, true),
            item(
                "magic potion",
                "a shimmering flask granting battle immunity",
                true,
                true,
            ),
            item(
                "binocular",
                "a pair of binoculars for scouting nearby places",
                true,
                false,
            ),
            item("tree", "a tall tree, firmly rooted", false, false),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn canonical_seed_builds() {
        let mut rng = StdRng::seed_from_u64(1);
        let built = build_world(&canonical_seed(), &mut rng).unwrap();
        assert_eq!(built.graph.len(), 4);
        assert!(built.graph.location(&built.start).is_some());
    }

    #[test]
    fn duplicate_location_names_are_rejected() {
        let mut seed = canonical_seed();
        let copy = seed.locations[0].clone();
        seed.locations.push(copy);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_world(&seed, &mut rng),
            Err(GameError::InvalidInputFormat { .. })
        ));
    }

    #[test]
    fn unknown_neighbor_is_rejected() {
        let mut seed = canonical_seed();
        seed.locations[0].west = Some("Atlantis".to_string());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_world(&seed, &mut rng),
            Err(GameError::InvalidInputFormat { .. })
        ));
    }
}
