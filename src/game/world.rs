//! The location graph: nodes, directional doors, and energy-constrained
//! movement. The graph owns the placement of creatures and items; every
//! presence mutation goes through it so the location lists stay authoritative.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use super::errors::GameError;
use super::types::{Direction, Item, Pymon, MOVES_PER_ENERGY};

/// One node in the world graph.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// Directional doors. A present entry names the neighboring location;
    /// an absent entry is a wall.
    pub doors: HashMap<Direction, String>,
    /// Nicknames of everything present here, the active Pymon included.
    pub creatures: Vec<String>,
    /// Items lying here, owned by this location until picked up.
    pub items: Vec<Item>,
}

impl Location {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            doors: HashMap::new(),
            creatures: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Neighbor names behind doors, in a stable direction order.
    pub fn neighbors(&self) -> Vec<&str> {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.doors.get(dir).map(String::as_str))
            .collect()
    }
}

/// Report of one successful move, including any energy effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the Pymon ended up after walking through the door.
    pub arrived: String,
    /// Whether this move was the one that cost an energy charge.
    pub energy_spent: bool,
    /// Energy after the move.
    pub energy: u8,
    /// Where exhaustion flung the Pymon, when energy hit zero and the
    /// destination had at least one connected neighbor.
    pub forced_relocation: Option<String>,
}

/// The interconnected location graph and everything placed on it.
#[derive(Debug, Default)]
pub struct WorldGraph {
    locations: HashMap<String, Location>,
}

impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location node. Overwrites silently; construction validates
    /// uniqueness before inserting.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    pub fn location_names(&self) -> Vec<&str> {
        self.locations.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Set a single door without touching the reciprocal slot. One-way doors
    /// are only ever built this way, never through [`WorldGraph::connect`].
    pub fn set_door(&mut self, from: &str, direction: Direction, to: &str) {
        if let Some(location) = self.locations.get_mut(from) {
            location.doors.insert(direction, to.to_string());
        }
    }

    /// Connect `a` to `b` in the given direction and mirror the connection
    /// on `b` in the opposite direction.
    pub fn connect(&mut self, a: &str, direction: Direction, b: &str) -> Result<(), GameError> {
        if !self.locations.contains_key(a) {
            return Err(GameError::InvalidSelection(format!(
                "unknown location '{a}'"
            )));
        }
        if !self.locations.contains_key(b) {
            return Err(GameError::InvalidSelection(format!(
                "unknown location '{b}'"
            )));
        }
        self.set_door(a, direction, b);
        self.set_door(b, direction.opposite(), a);
        Ok(())
    }

    /// Record a creature (by nickname) as present in a location.
    pub fn place_creature(&mut self, location: &str, nickname: &str) {
        if let Some(loc) = self.locations.get_mut(location) {
            if !loc.creatures.iter().any(|n| n == nickname) {
                loc.creatures.push(nickname.to_string());
            }
        }
    }

    /// Remove a creature's presence from a location, if recorded.
    pub fn remove_creature(&mut self, location: &str, nickname: &str) {
        if let Some(loc) = self.locations.get_mut(location) {
            loc.creatures.retain(|n| n != nickname);
        }
    }

    /// Drop an item into a location's list.
    pub fn place_item(&mut self, location: &str, item: Item) {
        if let Some(loc) = self.locations.get_mut(location) {
            loc.items.push(item);
        }
    }

    /// Take an item out of a location by case-insensitive name, transferring
    /// ownership to the caller.
    pub fn take_item(&mut self, location: &str, name: &str) -> Option<Item> {
        let loc = self.locations.get_mut(location)?;
        let index = loc.items.iter().position(|item| item.matches(name))?;
        Some(loc.items.remove(index))
    }

    /// Walk the Pymon through a door. Fails with `InvalidDirection` when the
    /// slot is a wall. Every `MOVES_PER_ENERGY`-th successful move costs one
    /// energy charge; at zero energy the Pymon panics and escapes through a
    /// random door of its new location.
    pub fn move_pymon(
        &mut self,
        pymon: &mut Pymon,
        direction: Direction,
        rng: &mut impl Rng,
    ) -> Result<MoveReport, GameError> {
        let destination = self
            .locations
            .get(&pymon.location)
            .and_then(|loc| loc.doors.get(&direction))
            .cloned()
            .ok_or_else(|| GameError::InvalidDirection(direction.to_string()))?;

        let origin = pymon.location.clone();
        self.remove_creature(&origin, &pymon.nickname);
        self.place_creature(&destination, &pymon.nickname);
        pymon.location = destination.clone();

        pymon.moves_since_rest += 1;
        let mut energy_spent = false;
        let mut forced_relocation = None;
        if pymon.moves_since_rest >= MOVES_PER_ENERGY {
            pymon.moves_since_rest = 0;
            pymon.energy = pymon.energy.saturating_sub(1);
            energy_spent = true;
            debug!(
                "{} spent an energy charge moving, {} left",
                pymon.nickname, pymon.energy
            );
            if pymon.energy == 0 {
                forced_relocation = self.forced_relocation(pymon, rng);
            }
        }

        Ok(MoveReport {
            arrived: destination,
            energy_spent,
            energy: pymon.energy,
            forced_relocation,
        })
    }

    /// Fling an exhausted Pymon through a uniformly random connected door of
    /// its current location. A location with no doors leaves the Pymon where
    /// it stands and returns `None`.
    fn forced_relocation(&mut self, pymon: &mut Pymon, rng: &mut impl Rng) -> Option<String> {
        let neighbors: Vec<String> = self
            .locations
            .get(&pymon.location)?
            .neighbors()
            .into_iter()
            .map(str::to_string)
            .collect();
        let refuge = neighbors.choose(rng)?.clone();

        let origin = pymon.location.clone();
        self.remove_creature(&origin, &pymon.nickname);
        self.place_creature(&refuge, &pymon.nickname);
        pymon.location = refuge.clone();
        debug!("{} escaped to {} out of exhaustion", pymon.nickname, refuge);
        Some(refuge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_mirrors_the_opposite_door() {
        let mut world = WorldGraph::new();
        world.insert(Location::new("forest", "a quiet forest"));
        world.insert(Location::new("cave", "a damp cave"));
        world.connect("forest", Direction::East, "cave").unwrap();

        assert_eq!(
            world.location("forest").unwrap().doors.get(&Direction::East),
            Some(&"cave".to_string())
        );
        assert_eq!(
            world.location("cave").unwrap().doors.get(&Direction::West),
            Some(&"forest".to_string())
        );
    }

    #[test]
    fn set_door_allows_one_way_passages() {
        let mut world = WorldGraph::new();
        world.insert(Location::new("ledge", "a high ledge"));
        world.insert(Location::new("pit", "a deep pit"));
        world.set_door("ledge", Direction::South, "pit");

        assert_eq!(
            world.location("ledge").unwrap().doors.get(&Direction::South),
            Some(&"pit".to_string())
        );
        assert!(world.location("pit").unwrap().doors.is_empty());
    }
}
