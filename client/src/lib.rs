//! Front-ends for duel battles.
//!
//! The engine in `duel-battle` only talks to a [`Handler`]. This crate
//! provides the ones the `duel` binary wires together:
//!
//! - [`ConsoleHandler`] prompts a human on a line-based terminal
//! - [`RandomHandler`] plays a side on its own
//! - [`SplitHandler`] gives each side its own handler
//!
//! plus JSON roster loading.
//!
//! ```ignore
//! let player = starter_roster(SideId::Player);
//! let opponent = starter_roster(SideId::Opponent);
//! let mut handler = SplitHandler::new(ConsoleHandler::stdio(), RandomHandler::new(None));
//! let outcome = run_battle(player, opponent, &mut handler)?;
//! ```

mod console;
mod random;
mod roster;
mod split;

pub use duel_battle::Handler;

pub use console::ConsoleHandler;
pub use random::RandomHandler;
pub use roster::{load_roster, parse_roster, starter_roster};
pub use split::SplitHandler;
