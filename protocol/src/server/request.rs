//! Action request types
//!
//! These types describe the menu a controller must pick from.

use serde::{Deserialize, Serialize};

use super::battle::SideId;
use crate::client::Choice;

/// Which menu is being presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestKind {
    /// Top-level menu: fight or switch
    Command,

    /// Skill menu for the active creature
    Skill,

    /// Voluntary swap menu
    Switch,

    /// Mandatory replacement after the active creature fainted
    ForcedSwitch,
}

/// One legal entry of a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    pub choice: Choice,

    /// Display text for the entry
    pub label: String,
}

impl MenuOption {
    pub fn new(choice: Choice, label: impl Into<String>) -> Self {
        Self {
            choice,
            label: label.into(),
        }
    }
}

/// A request asking one side to make a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// Side being asked
    pub side: SideId,

    /// Turn number the decision belongs to
    pub turn: u32,

    pub kind: RequestKind,

    /// Legal options, in display order
    pub options: Vec<MenuOption>,
}

impl ActionRequest {
    pub fn new(side: SideId, turn: u32, kind: RequestKind) -> Self {
        Self {
            side,
            turn,
            kind,
            options: Vec::new(),
        }
    }

    /// Append an option to the menu
    pub fn push(&mut self, choice: Choice, label: impl Into<String>) {
        self.options.push(MenuOption::new(choice, label));
    }

    /// Check if a choice is one of the offered options
    pub fn allows(&self, choice: &Choice) -> bool {
        self.options.iter().any(|o| o.choice == *choice)
    }

    /// Iterate over the legal choices
    pub fn choices(&self) -> impl Iterator<Item = Choice> + '_ {
        self.options.iter().map(|o| o.choice)
    }

    /// Check if this is a forced switch request
    pub fn is_forced_switch(&self) -> bool {
        self.kind == RequestKind::ForcedSwitch
    }

    /// Check if the menu offers a way back to the top level
    pub fn can_go_back(&self) -> bool {
        self.allows(&Choice::Back)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
