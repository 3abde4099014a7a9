use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

/// Energy cap for every Pymon. Newly tamed Pymons start here.
pub const ENERGY_MAX: u8 = 3;

/// Number of successful moves that cost one point of energy.
pub const MOVES_PER_ENERGY: u8 = 2;

/// Rounds a challenger must win (or lose) to end a match.
pub const ROUNDS_TO_SETTLE: u8 = 2;

/// The four cardinal directions a location can open onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    West,
    North,
    East,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    /// The reciprocal direction, used to mirror connections.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "west" | "w" => Ok(Direction::West),
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "south" | "s" => Ok(Direction::South),
            other => Err(GameError::InvalidDirection(other.to_string())),
        }
    }
}

/// A collectible object. Owned by exactly one container at a time: a
/// location's item list or a Pymon's inventory. Transfers are moves, never
/// copies; only world setup deliberately duplicates consumables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub pickable: bool,
    pub consumable: bool,
}

impl Item {
    /// Item names match case-insensitively throughout the game.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// A wild creature placed somewhere in the world. The location's creature
/// list is the authoritative record of presence; `location` here is a lookup
/// convenience. Non-adoptable creatures can never be captured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creature {
    pub nickname: String,
    pub description: String,
    pub location: String,
    pub adoptable: bool,
}

/// A player-controllable creature: a creature plus the player-state payload
/// (energy, inventory, movement fatigue, battle immunity).
///
/// The pet bench and the battle ledger deliberately live outside the Pymon,
/// on the roster and the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pymon {
    pub nickname: String,
    pub description: String,
    pub location: String,
    /// Always within `[0, ENERGY_MAX]`.
    pub energy: u8,
    pub inventory: Vec<Item>,
    /// Successful moves since the last energy charge was spent.
    pub moves_since_rest: u8,
    /// Set by a magic potion; spares one loss penalty in the next battle.
    pub immunity: bool,
}

impl Pymon {
    /// A freshly tamed Pymon at full energy with an empty inventory.
    pub fn tame(nickname: &str, description: &str, location: &str) -> Self {
        Self {
            nickname: nickname.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            energy: ENERGY_MAX,
            inventory: Vec::new(),
            moves_since_rest: 0,
            immunity: false,
        }
    }

    /// Find an inventory item by case-insensitive name.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.inventory.iter().position(|item| item.matches(name))
    }
}

// ============================================================================
// Seed records
// ============================================================================
// The parsed-record shapes the loader hands to world construction. These are
// the external contract of the core: the loader validates, the core consumes.

/// One location definition. Directional fields name other locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub west: Option<String>,
    #[serde(default)]
    pub north: Option<String>,
    #[serde(default)]
    pub east: Option<String>,
    #[serde(default)]
    pub south: Option<String>,
}

impl LocationRecord {
    /// Declared neighbors paired with their directions.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, &str)> {
        [
            (Direction::West, self.west.as_deref()),
            (Direction::North, self.north.as_deref()),
            (Direction::East, self.east.as_deref()),
            (Direction::South, self.south.as_deref()),
        ]
        .into_iter()
        .filter_map(|(dir, name)| name.map(|n| (dir, n)))
    }
}

/// One wild-creature definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatureRecord {
    pub nickname: String,
    pub description: String,
    pub adoptable: bool,
}

/// One item definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    pub pickable: bool,
    pub consumable: bool,
}

impl From<&ItemRecord> for Item {
    fn from(record: &ItemRecord) -> Self {
        Item {
            name: record.name.clone(),
            description: record.description.clone(),
            pickable: record.pickable,
            consumable: record.consumable,
        }
    }
}
