//! Shared types for battle protocol messages

use serde::{Deserialize, Serialize};

/// One of the two participants in a battle (p1 is the player, p2 the opponent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    Player,
    Opponent,
}

impl SideId {
    /// Both sides in request order: the player is always asked first
    pub const ALL: [SideId; 2] = [SideId::Player, SideId::Opponent];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(SideId::Player),
            "p2" => Some(SideId::Opponent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::Player => "p1",
            SideId::Opponent => "p2",
        }
    }

    /// The other side of the battle
    pub fn opponent(&self) -> SideId {
        match self {
            SideId::Player => SideId::Opponent,
            SideId::Opponent => SideId::Player,
        }
    }

    /// Array index for per-side storage
    pub fn index(&self) -> usize {
        match self {
            SideId::Player => 0,
            SideId::Opponent => 1,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideId::Player => write!(f, "Player"),
            SideId::Opponent => write!(f, "Opponent"),
        }
    }
}
