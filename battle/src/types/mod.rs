//! Domain types for battle state

mod action;
mod creature;
mod element;
mod side;

pub use action::{Action, CreatureId, SkillId};
pub use creature::{Creature, Skill, Stats};
pub use element::{EFFECTIVENESS_CHART, Element, effectiveness};
pub use side::SideState;
