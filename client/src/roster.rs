//! Roster files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use duel_battle::{Creature, Element, SideId, Skill, Stats};
use serde::{Deserialize, Serialize};

/// A creature as written in a roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreatureEntry {
    name: String,
    element: String,

    #[serde(flatten)]
    stats: Stats,

    #[serde(default)]
    skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillEntry {
    name: String,
    element: String,
    power: u32,

    #[serde(default = "default_physical")]
    physical: bool,
}

fn default_physical() -> bool {
    true
}

fn element(name: &str, owner: &str) -> Result<Element> {
    Element::from_protocol(name).ok_or_else(|| anyhow!("unknown element '{}' on {}", name, owner))
}

impl CreatureEntry {
    fn into_creature(self) -> Result<Creature> {
        let mut creature = Creature::new(
            self.name.clone(),
            element(&self.element, &self.name)?,
            self.stats,
        );

        for skill in self.skills {
            let owner = format!("{}'s {}", self.name, skill.name);
            creature = creature.with_skill(Skill {
                element: element(&skill.element, &owner)?,
                name: skill.name,
                power: skill.power,
                physical: skill.physical,
            });
        }

        Ok(creature)
    }
}

/// Parse a roster from JSON: an array of creatures with flat stats
pub fn parse_roster(json: &str) -> Result<Vec<Creature>> {
    let entries: Vec<CreatureEntry> = serde_json::from_str(json).context("Invalid roster JSON")?;
    if entries.is_empty() {
        bail!("Roster has no creatures");
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_creature().with_context(|| format!("Roster entry {}", i + 1)))
        .collect()
}

/// Load a roster file
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Creature>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    parse_roster(&json).with_context(|| format!("Failed to load roster {}", path.display()))
}

fn stats(attack: u32, sp_attack: u32, defense: u32, sp_defense: u32, speed: u32, max_hp: u32) -> Stats {
    Stats {
        attack,
        sp_attack,
        defense,
        sp_defense,
        speed,
        max_hp,
    }
}

/// Built-in three-creature roster for either side
pub fn starter_roster(side: SideId) -> Vec<Creature> {
    match side {
        SideId::Player => vec![
            Creature::new("Pyrrat", Element::Fire, stats(12, 10, 6, 6, 18, 42))
                .with_skill(Skill::physical("Flame Fang", Element::Fire, 8))
                .with_skill(Skill::physical("Quick Bite", Element::Normal, 5)),
            Creature::new("Drizzlet", Element::Water, stats(8, 13, 7, 8, 12, 48))
                .with_skill(Skill::special("Bubble Jet", Element::Water, 5))
                .with_skill(Skill::physical("Tackle", Element::Normal, 6)),
            Creature::new("Sproutle", Element::Leaf, stats(10, 9, 9, 7, 9, 52))
                .with_skill(Skill::physical("Vine Lash", Element::Leaf, 8))
                .with_skill(Skill::special("Spore Burst", Element::Leaf, 4)),
        ],
        SideId::Opponent => vec![
            Creature::new("Cindermole", Element::Fire, stats(11, 11, 8, 5, 11, 46))
                .with_skill(Skill::special("Ember Spit", Element::Fire, 5))
                .with_skill(Skill::physical("Dig In", Element::Normal, 6)),
            Creature::new("Reedling", Element::Leaf, stats(9, 12, 6, 9, 16, 40))
                .with_skill(Skill::special("Leaf Storm", Element::Leaf, 5))
                .with_skill(Skill::physical("Slam", Element::Normal, 7)),
            Creature::new("Tidehorn", Element::Water, stats(13, 8, 10, 6, 7, 55))
                .with_skill(Skill::physical("Wave Ram", Element::Water, 9))
                .with_skill(Skill::physical("Headbutt", Element::Normal, 5)),
        ],
    }
}
