//! The session orchestrator: owns the world, the roster, the ledger, and
//! the in-flight battle, and exposes the command/query surface the
//! presentation layer drives. Commands return structured results or a
//! [`GameError`]; the session never prints.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::battle::{self, Battle, Gesture, MatchEnd, RoundReport};
use super::errors::GameError;
use super::inventory::{self, PickOutcome, UseOutcome};
use super::roster::CreatureRoster;
use super::seed::{build_world, WorldSeed};
use super::stats::{BattleStats, PymonReport};
use super::types::{Creature, Direction, Pymon};
use super::world::{MoveReport, WorldGraph};

/// Read-only snapshot of a location, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub name: String,
    pub description: String,
    /// Creatures present, the viewer excluded.
    pub creatures: Vec<String>,
    pub items: Vec<String>,
}

/// Read-only snapshot of one owned Pymon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PymonView {
    pub nickname: String,
    pub description: String,
    pub location: String,
    pub energy: u8,
    pub immunity: bool,
}

impl From<&Pymon> for PymonView {
    fn from(pymon: &Pymon) -> Self {
        Self {
            nickname: pymon.nickname.clone(),
            description: pymon.description.clone(),
            location: pymon.location.clone(),
            energy: pymon.energy,
            immunity: pymon.immunity,
        }
    }
}

/// What to point the binoculars at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeekTarget {
    Current,
    Toward(Direction),
}

/// How a challenge opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// Wild, non-adoptable creature: a flavor line and nothing else.
    Flavor { line: String },
    /// An adoptable opponent accepted; drive rounds with
    /// [`GameSession::battle_round`].
    Underway { opponent: String },
    /// The challenger had no energy left: an immediate 0/0/0 loss,
    /// already resolved.
    Resolved(BattleSummary),
}

/// A settled match, after the session applied its consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSummary {
    pub opponent: String,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    pub end: MatchOutcome,
}

/// Terminal consequence of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The opponent was captured and joined the bench.
    Captured { nickname: String },
    /// The challenger fell; a benched Pymon took over.
    Defeated { successor: String },
    /// The challenger fell with an empty bench. The session is over.
    GameOver,
}

/// Report of one battle round, with the resolved summary once the match
/// settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleTurn {
    pub round: RoundReport,
    pub settled: Option<BattleSummary>,
}

/// One full game: a world graph, a creature roster, a battle ledger, and
/// whatever encounter is currently in flight.
pub struct GameSession {
    world: WorldGraph,
    roster: CreatureRoster,
    creatures: Vec<Creature>,
    stats: BattleStats,
    battle: Option<Battle>,
    pending_inspection: bool,
    over: bool,
    rng: StdRng,
}

impl GameSession {
    /// Build a session from seed records with entropy-seeded randomness.
    pub fn new(seed: &WorldSeed, player_name: &str) -> Result<Self, GameError> {
        Self::with_rng(seed, player_name, StdRng::from_entropy())
    }

    /// Build a session with caller-provided randomness. Tests use this with
    /// a fixed seed to make placement and battles deterministic.
    pub fn with_rng(
        seed: &WorldSeed,
        player_name: &str,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let built = build_world(seed, &mut rng)?;
        let mut world = built.graph;
        let pymon = Pymon::tame(player_name, "The player's own Pymon", &built.start);
        world.place_creature(&built.start, &pymon.nickname);
        info!("{} spawned at {}", pymon.nickname, built.start);

        Ok(Self {
            world,
            roster: CreatureRoster::new(pymon),
            creatures: built.creatures,
            stats: BattleStats::new(),
            battle: None,
            pending_inspection: false,
            over: false,
            rng,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn battle_underway(&self) -> bool {
        self.battle.is_some()
    }

    pub fn active_pymon(&self) -> PymonView {
        PymonView::from(self.roster.active())
    }

    pub fn bench(&self) -> Vec<PymonView> {
        self.roster.bench().map(PymonView::from).collect()
    }

    pub fn inventory(&self) -> Vec<(String, String)> {
        self.roster
            .active()
            .inventory
            .iter()
            .map(|item| (item.name.clone(), item.description.clone()))
            .collect()
    }

    pub fn battle_report(&self) -> Vec<PymonReport> {
        self.stats.report()
    }

    /// The active Pymon's current surroundings.
    pub fn current_location(&self) -> LocationView {
        self.view_of(&self.roster.active().location)
    }

    fn view_of(&self, name: &str) -> LocationView {
        let viewer = &self.roster.active().nickname;
        match self.world.location(name) {
            Some(location) => LocationView {
                name: location.name.clone(),
                description: location.description.clone(),
                creatures: location
                    .creatures
                    .iter()
                    .filter(|n| *n != viewer)
                    .cloned()
                    .collect(),
                items: location.items.iter().map(|i| i.name.clone()).collect(),
            },
            None => LocationView {
                name: name.to_string(),
                description: String::new(),
                creatures: Vec::new(),
                items: Vec::new(),
            },
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    fn guard(&self) -> Result<(), GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if self.battle.is_some() {
            return Err(GameError::InvalidSelection(
                "a battle is underway; settle it first".to_string(),
            ));
        }
        Ok(())
    }

    /// Walk the active Pymon in a direction.
    pub fn move_pymon(&mut self, direction: Direction) -> Result<MoveReport, GameError> {
        self.guard()?;
        self.world
            .move_pymon(self.roster.active_mut(), direction, &mut self.rng)
    }

    /// Pick a named item up from the current location.
    pub fn pick(&mut self, name: &str) -> Result<PickOutcome, GameError> {
        self.guard()?;
        Ok(inventory::pick_item(
            &mut self.world,
            self.roster.active_mut(),
            name,
        ))
    }

    /// Use a named inventory item. An `InspectionReady` outcome leaves the
    /// binocular in hand until [`GameSession::peek`] supplies a target.
    pub fn use_item(&mut self, name: &str) -> Result<UseOutcome, GameError> {
        self.guard()?;
        let outcome = inventory::use_item(self.roster.active_mut(), name)?;
        if outcome == UseOutcome::InspectionReady {
            self.pending_inspection = true;
        }
        Ok(outcome)
    }

    /// Perform the pending binocular inspection: a read-only look at the
    /// current location or a connected neighbor. Consumes the binocular.
    pub fn peek(&mut self, target: PeekTarget) -> Result<LocationView, GameError> {
        self.guard()?;
        if !self.pending_inspection {
            return Err(GameError::InvalidSelection(
                "nothing to look through; use a binocular first".to_string(),
            ));
        }

        let here = self.roster.active().location.clone();
        let view = match target {
            PeekTarget::Current => self.view_of(&here),
            PeekTarget::Toward(direction) => {
                let neighbor = self
                    .world
                    .location(&here)
                    .and_then(|loc| loc.doors.get(&direction))
                    .cloned()
                    .ok_or_else(|| GameError::InvalidDirection(direction.to_string()))?;
                self.view_of(&neighbor)
            }
        };

        inventory::consume_inspect_item(self.roster.active_mut());
        self.pending_inspection = false;
        Ok(view)
    }

    /// Challenge a creature in the current location by exact nickname.
    pub fn challenge(&mut self, nickname: &str) -> Result<ChallengeOutcome, GameError> {
        self.guard()?;
        let nickname = nickname.trim();
        if nickname == self.roster.active().nickname {
            return Err(GameError::InvalidSelection(
                "you cannot challenge your own Pymon".to_string(),
            ));
        }
        let here = self.roster.active().location.clone();
        let present = self
            .world
            .location(&here)
            .map(|loc| loc.creatures.iter().any(|n| n == nickname))
            .unwrap_or(false);
        if !present {
            return Err(GameError::InvalidSelection(format!(
                "{nickname} is not available here"
            )));
        }
        let opponent = self
            .creatures
            .iter()
            .find(|c| c.nickname == nickname)
            .cloned()
            .ok_or_else(|| {
                GameError::InvalidSelection(format!("{nickname} is not available here"))
            })?;

        if !opponent.adoptable {
            let line = battle::flavor_line(&opponent.nickname, &mut self.rng);
            debug!("{} refused the challenge", opponent.nickname);
            return Ok(ChallengeOutcome::Flavor { line });
        }

        info!(
            "{} challenged {}",
            self.roster.active().nickname,
            opponent.nickname
        );
        let battle = Battle::new(opponent);

        // An exhausted challenger loses before a single gesture is thrown.
        if self.roster.active().energy == 0 {
            let summary = self.resolve(battle)?;
            return Ok(ChallengeOutcome::Resolved(summary));
        }

        let opponent = battle.opponent.nickname.clone();
        self.battle = Some(battle);
        Ok(ChallengeOutcome::Underway { opponent })
    }

    /// Play one battle round. Once the match settles, its consequences are
    /// applied and reported; afterwards the session accepts commands again.
    pub fn battle_round(&mut self, gesture: Gesture) -> Result<BattleTurn, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let Some(mut battle) = self.battle.take() else {
            return Err(GameError::InvalidSelection(
                "no battle is underway".to_string(),
            ));
        };

        let round = battle.round(self.roster.active_mut(), gesture, &mut self.rng);
        let settled = match round.end {
            Some(_) => Some(self.resolve(battle)?),
            None => {
                self.battle = Some(battle);
                None
            }
        };
        Ok(BattleTurn { round, settled })
    }

    /// Promote a benched Pymon by index (0-based). The previous active joins
    /// the back of the bench and the view shifts to the promoted Pymon.
    pub fn switch_pet(&mut self, index: usize) -> Result<PymonView, GameError> {
        self.guard()?;
        let previous = self.roster.active().clone();
        let promoted = self.roster.switch(index)?;
        let view = PymonView::from(promoted);
        // Presence follows the switch: the demoted Pymon steps out of the
        // world's eye, the promoted one steps in at its own location.
        self.world.remove_creature(&previous.location, &previous.nickname);
        self.world.place_creature(&view.location, &view.nickname);
        info!("{} is now the primary Pymon", view.nickname);
        Ok(view)
    }

    // ------------------------------------------------------------------
    // Match resolution
    // ------------------------------------------------------------------

    /// Apply a settled match: capture or defeat, then append exactly one
    /// ledger record with the final tally. The challenger's immunity never
    /// outlives its battle.
    fn resolve(&mut self, battle: Battle) -> Result<BattleSummary, GameError> {
        let challenger = self.roster.active().nickname.clone();
        let opponent = battle.opponent.clone();
        let (wins, draws, losses) = (battle.wins, battle.draws, battle.losses);

        // Cleared before any promotion: a benched Pymon's armed potion must
        // survive a battle it never fought.
        self.roster.active_mut().immunity = false;

        let end = match battle.settled(self.roster.active().energy) {
            Some(MatchEnd::Captured) => {
                self.world
                    .remove_creature(&opponent.location, &opponent.nickname);
                self.creatures.retain(|c| c.nickname != opponent.nickname);
                let captured = Pymon::tame(
                    &opponent.nickname,
                    &opponent.description,
                    &opponent.location,
                );
                self.roster.adopt(captured);
                info!("{} captured {}", challenger, opponent.nickname);
                MatchOutcome::Captured {
                    nickname: opponent.nickname.clone(),
                }
            }
            _ => {
                // The fallen Pymon runs into the wild.
                match self.roster.promote_front() {
                    Some((mut fallen, successor)) => {
                        let successor = successor.nickname.clone();
                        let fallen_location = fallen.location.clone();
                        let inherited = std::mem::take(&mut fallen.inventory);
                        self.world.remove_creature(&fallen_location, &fallen.nickname);
                        let active = self.roster.active_mut();
                        active.inventory.extend(inherited);
                        let home = active.location.clone();
                        let nickname = active.nickname.clone();
                        self.world.place_creature(&home, &nickname);
                        info!("{} fell; {} takes over at {}", challenger, successor, home);
                        MatchOutcome::Defeated { successor }
                    }
                    None => {
                        let home = self.roster.active().location.clone();
                        self.world.remove_creature(&home, &challenger);
                        self.over = true;
                        info!("{} fell with an empty bench: game over", challenger);
                        MatchOutcome::GameOver
                    }
                }
            }
        };

        self.stats
            .record(&challenger, &opponent.nickname, wins, draws, losses);

        Ok(BattleSummary {
            opponent: opponent.nickname,
            wins,
            draws,
            losses,
            end,
        })
    }
}
