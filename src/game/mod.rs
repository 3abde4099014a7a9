//! Game core: the world graph, creature lifecycle, and battle resolution.
//! Everything here is synchronous and print-free; the presentation layer
//! drives it through [`session::GameSession`].

pub mod battle;
pub mod errors;
pub mod inventory;
pub mod roster;
pub mod seed;
pub mod session;
pub mod stats;
pub mod types;
pub mod world;

pub use battle::{Gesture, MatchEnd, RoundReport, RoundResult};
pub use errors::GameError;
pub use inventory::{effect_for, ItemEffect, PickOutcome, UseOutcome};
pub use roster::CreatureRoster;
pub use seed::{build_world, canonical_seed, BuiltWorld, WorldSeed};
pub use session::{
    BattleSummary, BattleTurn, ChallengeOutcome, GameSession, LocationView, MatchOutcome,
    PeekTarget, PymonView,
};
pub use stats::{BattleRecord, BattleStats, PymonReport};
pub use types::{
    Creature, CreatureRecord, Direction, Item, ItemRecord, LocationRecord, Pymon, ENERGY_MAX,
    MOVES_PER_ENERGY, ROUNDS_TO_SETTLE,
};
pub use world::{Location, MoveReport, WorldGraph};
