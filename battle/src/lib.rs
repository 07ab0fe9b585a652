//! Turn resolution engine for two-sided creature battles.
//!
//! Each side brings a roster of creatures with one active at a time. Every
//! round both sides pick an action (attack with a skill or swap the active
//! creature), the engine orders and applies them, computes damage and runs
//! the faint / forced swap / battle end state machine.
//!
//! # Overview
//!
//! ```text
//! duel-protocol (choices, requests, narration)
//!        │
//!        ▼
//! duel-battle (rules + round loop) ← THIS CRATE
//!        │
//!        └─> duel-client (console and scripted handlers)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Element`] - Elements with the effectiveness chart
//! - [`Creature`], [`Skill`], [`Stats`] - Roster members and their moves
//! - [`SideState`] - One side's roster and active slot
//! - [`Action`] - A side's move for the round
//!
//! ## Engine
//! - [`Battle`] - Owns both sides and drives rounds
//! - [`Handler`] - The collaborator that answers menus and receives narration
//! - [`run_battle`] - Run a whole battle and get its [`Outcome`]
//!
//! # Example Usage
//!
//! ```ignore
//! use duel_battle::{run_battle, Creature, Element, Skill, Stats};
//!
//! let outcome = run_battle(player_roster, opponent_roster, &mut handler)?;
//! match outcome.winner() {
//!     Some(side) => println!("{} wins", side),
//!     None => println!("Draw"),
//! }
//! ```

pub mod config;
pub mod damage;
pub mod engine;
pub mod error;
pub mod handler;
pub mod query;
pub mod rng;
pub mod types;


// Re-export main types at crate root for convenience
pub use config::BattleConfig;
pub use damage::{DamageRoll, damage};
pub use engine::{Battle, Outcome, run_battle, run_battle_with_config};
pub use error::BattleError;
pub use handler::Handler;
pub use rng::BattleRng;
pub use types::{
    Action, Creature, CreatureId, EFFECTIVENESS_CHART, Element, SideState, Skill, SkillId, Stats,
    effectiveness,
};

// Re-export commonly used protocol types
pub use duel_protocol::{ActionRequest, Choice, MenuOption, Narration, RequestKind, SideId};
