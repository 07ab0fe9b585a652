//! Contract violations raised by the engine

use duel_protocol::{Choice, RequestKind, SideId};
use thiserror::Error;

/// Fatal errors: the battle is aborted and never resumed.
///
/// Game situations (speed ties, no swap target, a side running out of
/// creatures) are not errors; these only cover bad input from the caller
/// or a controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error("{0} roster is empty")]
    EmptyRoster(SideId),

    #[error("{side} roster member {index} ({name}) has zero max HP")]
    InvalidCreature {
        side: SideId,
        index: usize,
        name: String,
    },

    #[error("{side} chose `{choice}` which the {kind:?} menu does not offer")]
    IllegalChoice {
        side: SideId,
        kind: RequestKind,
        choice: Choice,
    },

    #[error("{0} has no legal action")]
    NoLegalAction(SideId),

    #[error("{side} did not settle on an action after {attempts} menu selections")]
    ChoiceLoopExceeded { side: SideId, attempts: usize },

    #[error("{side} active creature has no skill {index}")]
    UnknownSkill { side: SideId, index: usize },

    #[error("{side} roster has no creature {index}")]
    UnknownCreature { side: SideId, index: usize },

    #[error("{side} cannot swap to {name}: fainted or already active")]
    SwapToUnavailable {
        side: SideId,
        index: usize,
        name: String,
    },

    #[error("{0} has no active creature")]
    NoActiveCreature(SideId),
}
