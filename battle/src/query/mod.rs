//! Query helpers for battle decision making
//!
//! This module provides utilities for analyzing element matchups and
//! picking skills, useful for opponent strategies.

mod matchup;

pub use matchup::{
    // Element-level queries
    is_weak_to,
    resistances,
    resists,
    weaknesses,
    // Creature-level queries
    best_skill,
    super_effective_skills,
};
