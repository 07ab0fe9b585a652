//! Creature and skill types

use super::element::Element;

/// Immutable battle stats of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub attack: u32,
    pub sp_attack: u32,
    pub defense: u32,
    pub sp_defense: u32,
    pub speed: u32,
    pub max_hp: u32,
}

/// A move a creature can use
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub element: Element,

    /// Base power
    pub power: u32,

    /// Physical skills use attack/defense, special ones sp_attack/sp_defense
    pub physical: bool,
}

impl Skill {
    pub fn physical(name: impl Into<String>, element: Element, power: u32) -> Self {
        Self {
            name: name.into(),
            element,
            power,
            physical: true,
        }
    }

    pub fn special(name: impl Into<String>, element: Element, power: u32) -> Self {
        Self {
            name: name.into(),
            element,
            power,
            physical: false,
        }
    }
}

/// A creature taking part in a battle
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub name: String,
    pub element: Element,
    pub stats: Stats,
    pub skills: Vec<Skill>,

    /// Current HP, always within 0..=max_hp
    hp: u32,
}

impl Creature {
    /// Create a creature at full HP with no skills
    pub fn new(name: impl Into<String>, element: Element, stats: Stats) -> Self {
        Self {
            name: name.into(),
            element,
            stats,
            skills: Vec::new(),
            hp: stats.max_hp,
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    /// Set current HP, clamped to the valid range
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.stats.max_hp);
    }

    /// Subtract damage from HP without going below zero.
    /// Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restore HP to max
    pub fn restore(&mut self) {
        self.hp = self.stats.max_hp;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_fainted()
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.stats.max_hp == 0 {
            return 0;
        }
        (self.hp * 100) / self.stats.max_hp
    }

    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }
}
