//! Battle controller and turn resolution

mod battle;
mod request;
mod resolver;

pub use battle::{Battle, Outcome, run_battle, run_battle_with_config};
pub(crate) use resolver::QueuedAttack;
