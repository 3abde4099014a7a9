//! # Pymon - a text-driven exploration and battle game
//!
//! The player guides a Pymon between interconnected locations, collects
//! items, and challenges wild creatures to best-of-three rock/paper/scissors
//! matches to capture them. Movement drains energy, losses drain it faster,
//! and running out of Pymons ends the game.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pymon::config::Config;
//! use pymon::game::{canonical_seed, GameSession};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut session = GameSession::new(&canonical_seed(), &config.game.player_name)?;
//!     pymon::ui::run(&mut session)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - The core: world graph, inventory, battle engine, roster,
//!   battle ledger, and the session command surface
//! - [`loader`] - JSON seed-file loading into the core's record types
//! - [`config`] - TOML configuration management
//! - [`ui`] - The interactive menu loop and output formatting
//!
//! ## Architecture
//!
//! The core never performs I/O or printing: every command returns a
//! structured result or a [`game::GameError`], and the [`ui`] layer decides
//! how to render it. Data flows one way: parsed seed records in, view
//! structs and outcome enums out.

pub mod config;
pub mod game;
pub mod loader;
pub mod ui;
