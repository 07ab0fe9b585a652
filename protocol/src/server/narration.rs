//! Narration messages describing what happened during a battle

use serde::{Deserialize, Serialize};

use super::battle::SideId;

/// Observational events emitted while a battle is resolved.
///
/// `side` is always the side the event concerns: the attacker for
/// [`Narration::UseSkill`], the defender for [`Narration::Damage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Narration {
    /// |turn|NUMBER
    TurnStart { turn: u32 },

    /// |switch|SIDE|NAME
    SwitchIn { side: SideId, creature: String },

    /// |move|SIDE|NAME|SKILL
    UseSkill {
        side: SideId,
        creature: String,
        skill: String,
    },

    /// |-damage|SIDE|NAME|HP/MAX
    Damage {
        side: SideId,
        creature: String,
        amount: u32,
        hp: u32,
        max_hp: u32,
    },

    /// |-supereffective|SIDE or |-resisted|SIDE
    Effectiveness { side: SideId, multiplier: f32 },

    /// |faint|SIDE|NAME
    Faint { side: SideId, creature: String },

    /// |-noswitch|SIDE
    NoSwitchTarget { side: SideId },

    /// |win|SIDE
    Win { side: SideId },

    /// |tie
    Draw,
}

impl Narration {
    /// Serialize narration to a protocol line
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::TurnStart { turn } => format!("|turn|{}", turn),
            Self::SwitchIn { side, creature } => format!("|switch|{}|{}", side.as_str(), creature),
            Self::UseSkill {
                side,
                creature,
                skill,
            } => format!("|move|{}|{}|{}", side.as_str(), creature, skill),
            Self::Damage {
                side,
                creature,
                hp,
                max_hp,
                ..
            } => format!("|-damage|{}|{}|{}/{}", side.as_str(), creature, hp, max_hp),
            Self::Effectiveness { side, multiplier } => {
                if *multiplier > 1.0 {
                    format!("|-supereffective|{}", side.as_str())
                } else {
                    format!("|-resisted|{}", side.as_str())
                }
            }
            Self::Faint { side, creature } => format!("|faint|{}|{}", side.as_str(), creature),
            Self::NoSwitchTarget { side } => format!("|-noswitch|{}", side.as_str()),
            Self::Win { side } => format!("|win|{}", side.as_str()),
            Self::Draw => "|tie".to_string(),
        }
    }

    /// Check if this message ends the battle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Win { .. } | Self::Draw)
    }
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnStart { turn } => write!(f, "=== Turn {} ===", turn),
            Self::SwitchIn { side, creature } => write!(f, "{} sent out {}!", side, creature),
            Self::UseSkill {
                creature, skill, ..
            } => write!(f, "{} used {}!", creature, skill),
            Self::Damage {
                creature,
                amount,
                hp,
                max_hp,
                ..
            } => write!(
                f,
                "{} took {} damage ({}/{} HP left).",
                creature, amount, hp, max_hp
            ),
            Self::Effectiveness { multiplier, .. } => {
                if *multiplier > 1.0 {
                    write!(f, "It's super effective!")
                } else {
                    write!(f, "It's not very effective...")
                }
            }
            Self::Faint { creature, .. } => write!(f, "{} fainted!", creature),
            Self::NoSwitchTarget { side } => {
                write!(f, "{} has no other creature able to battle.", side)
            }
            Self::Win { side } => write!(f, "{} wins the battle!", side),
            Self::Draw => write!(f, "The battle ended in a draw."),
        }
    }
}
