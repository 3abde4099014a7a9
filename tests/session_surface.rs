//! The session command/query surface: views, the binocular peek flow, and
//! bench switching.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pymon::game::{
    Direction, GameError, GameSession, ItemRecord, LocationRecord, PeekTarget, UseOutcome,
    WorldSeed,
};

fn seed_with_binocular() -> WorldSeed {
    WorldSeed {
        locations: vec![LocationRecord {
            name: "Hill".to_string(),
            description: "a grassy hill".to_string(),
            west: None,
            north: None,
            east: None,
            south: None,
        }],
        creatures: Vec::new(),
        items: vec![ItemRecord {
            name: "binocular".to_string(),
            description: "a pair of binoculars".to_string(),
            pickable: true,
            consumable: false,
        }],
    }
}

fn session() -> GameSession {
    GameSession::with_rng(&seed_with_binocular(), "Kimimon", StdRng::seed_from_u64(2)).unwrap()
}

#[test]
fn location_view_hides_the_viewer() {
    let session = session();
    let view = session.current_location();
    assert_eq!(view.name, "Hill");
    assert!(view.creatures.iter().all(|n| n != "Kimimon"));
    assert_eq!(view.items, vec!["binocular".to_string()]);
}

#[test]
fn peek_without_a_binocular_in_play_is_rejected() {
    let mut session = session();
    let err = session.peek(PeekTarget::Current).unwrap_err();
    assert!(matches!(err, GameError::InvalidSelection(_)));
}

#[test]
fn binocular_peek_consumes_the_item_once_used() {
    let mut session = session();
    session.pick("binocular").unwrap();
    assert_eq!(session.inventory().len(), 1);

    let outcome = session.use_item("binocular").unwrap();
    assert_eq!(outcome, UseOutcome::InspectionReady);

    let view = session.peek(PeekTarget::Current).unwrap();
    assert_eq!(view.name, "Hill");
    assert!(session.inventory().is_empty(), "consumed after the peek");

    // The pending inspection is spent along with the item.
    let err = session.peek(PeekTarget::Current).unwrap_err();
    assert!(matches!(err, GameError::InvalidSelection(_)));
}

#[test]
fn peeking_at_a_wall_keeps_the_binocular() {
    let mut session = session();
    session.pick("binocular").unwrap();
    session.use_item("binocular").unwrap();

    let err = session.peek(PeekTarget::Toward(Direction::North)).unwrap_err();
    assert!(matches!(err, GameError::InvalidDirection(_)));
    // The inspection never happened, so the item is still in hand.
    assert_eq!(session.inventory().len(), 1);
    assert!(session.peek(PeekTarget::Current).is_ok());
}

#[test]
fn switching_with_an_empty_bench_is_rejected() {
    let mut session = session();
    let err = session.switch_pet(0).unwrap_err();
    assert!(matches!(err, GameError::InvalidSelection(_)));
    assert_eq!(session.active_pymon().nickname, "Kimimon");
}

#[test]
fn moving_into_a_wall_from_the_session_is_invalid_direction() {
    let mut session = session();
    let err = session.move_pymon(Direction::East).unwrap_err();
    assert!(matches!(err, GameError::InvalidDirection(_)));
}
