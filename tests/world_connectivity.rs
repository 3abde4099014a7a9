//! Connectivity laws of the world graph: symmetric connections, one-way
//! doors, and the movement scenario from Forest to Cave.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pymon::game::{Direction, GameError, Location, Pymon, WorldGraph};

fn two_rooms() -> WorldGraph {
    let mut world = WorldGraph::new();
    world.insert(Location::new("Forest", "a quiet forest"));
    world.insert(Location::new("Cave", "a damp cave"));
    world.connect("Forest", Direction::East, "Cave").unwrap();
    world
}

#[test]
fn connect_sets_both_door_slots() {
    let world = two_rooms();
    assert_eq!(
        world.location("Forest").unwrap().doors.get(&Direction::East),
        Some(&"Cave".to_string())
    );
    assert_eq!(
        world.location("Cave").unwrap().doors.get(&Direction::West),
        Some(&"Forest".to_string())
    );
}

#[test]
fn connect_rejects_unknown_locations() {
    let mut world = two_rooms();
    assert!(world.connect("Forest", Direction::North, "Atlantis").is_err());
    assert!(world.connect("Atlantis", Direction::North, "Cave").is_err());
}

#[test]
fn one_way_door_stays_one_way() {
    let mut world = two_rooms();
    world.set_door("Forest", Direction::South, "Cave");
    assert_eq!(
        world.location("Forest").unwrap().doors.get(&Direction::South),
        Some(&"Cave".to_string())
    );
    // set_door never mirrors; Cave's north slot stays a wall.
    assert!(world
        .location("Cave")
        .unwrap()
        .doors
        .get(&Direction::North)
        .is_none());
}

#[test]
fn moving_east_from_forest_lands_in_cave() {
    let mut world = two_rooms();
    let mut pymon = Pymon::tame("Kimimon", "the player's Pymon", "Forest");
    world.place_creature("Forest", "Kimimon");
    let mut rng = StdRng::seed_from_u64(3);

    let report = world.move_pymon(&mut pymon, Direction::East, &mut rng).unwrap();
    assert_eq!(report.arrived, "Cave");
    assert_eq!(pymon.location, "Cave");
    assert!(world
        .location("Forest")
        .unwrap()
        .creatures
        .iter()
        .all(|n| n != "Kimimon"));
    assert!(world
        .location("Cave")
        .unwrap()
        .creatures
        .iter()
        .any(|n| n == "Kimimon"));
}

#[test]
fn moving_through_a_wall_is_an_invalid_direction() {
    let mut world = two_rooms();
    let mut pymon = Pymon::tame("Kimimon", "", "Forest");
    world.place_creature("Forest", "Kimimon");
    let mut rng = StdRng::seed_from_u64(3);

    let err = world
        .move_pymon(&mut pymon, Direction::North, &mut rng)
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidDirection(_)));
    assert_eq!(pymon.location, "Forest");
    assert_eq!(pymon.moves_since_rest, 0);
}
