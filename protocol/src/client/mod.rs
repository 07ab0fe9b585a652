//! Choices a controller sends back to the engine

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A single menu selection returned from a controller.
///
/// Indices are zero-based in memory and one-based on the wire
/// (`move 1` selects `Skill(0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "lowercase")]
pub enum Choice {
    /// fight: open the skill menu
    Fight,

    /// switch: open the swap menu
    Switch,

    /// move N: use the Nth skill of the active creature
    Skill(usize),

    /// switch N: send out the Nth roster member
    Creature(usize),

    /// back: return to the top-level menu
    Back,
}

impl Choice {
    /// Serialize choice to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Fight => "fight".to_string(),
            Self::Switch => "switch".to_string(),
            Self::Skill(index) => format!("move {}", index + 1),
            Self::Creature(index) => format!("switch {}", index + 1),
            Self::Back => "back".to_string(),
        }
    }

    /// Parse a choice from its protocol form (case-insensitive)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(ParseError::InvalidFormat(input));
        }

        match (verb, arg) {
            ("fight", None) => Ok(Self::Fight),
            ("back", None) => Ok(Self::Back),
            ("switch", None) => Ok(Self::Switch),
            ("switch", Some(n)) => parse_slot(n).map(Self::Creature),
            ("move", Some(n)) => parse_slot(n).map(Self::Skill),
            ("move", None) => Err(ParseError::MissingField("move slot".to_string())),
            _ => Err(ParseError::InvalidFormat(input)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_protocol_string())
    }
}

fn parse_slot(s: &str) -> Result<usize, ParseError> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidFormat(format!("slot must be a positive number: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_protocol_string() {
        assert_eq!(Choice::Fight.to_protocol_string(), "fight");
        assert_eq!(Choice::Switch.to_protocol_string(), "switch");
        assert_eq!(Choice::Skill(0).to_protocol_string(), "move 1");
        assert_eq!(Choice::Creature(2).to_protocol_string(), "switch 3");
        assert_eq!(Choice::Back.to_protocol_string(), "back");
    }

    #[test]
    fn test_parse_menu_verbs() {
        assert_eq!(Choice::parse("fight"), Ok(Choice::Fight));
        assert_eq!(Choice::parse("  BACK "), Ok(Choice::Back));
        assert_eq!(Choice::parse("Switch"), Ok(Choice::Switch));
    }

    #[test]
    fn test_parse_indexed() {
        assert_eq!(Choice::parse("move 2"), Ok(Choice::Skill(1)));
        assert_eq!(Choice::parse("switch 1"), Ok(Choice::Creature(0)));
        assert_eq!(Choice::parse("move   4"), Ok(Choice::Skill(3)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Choice::parse(""), Err(ParseError::EmptyMessage));
        assert!(matches!(Choice::parse("move 0"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Choice::parse("move x"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Choice::parse("move"), Err(ParseError::MissingField(_))));
        assert!(matches!(Choice::parse("dance"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Choice::parse("switch 1 2"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Choice::Skill(1)).unwrap();
        assert_eq!(json, r#"{"type":"skill","index":1}"#);
        let back: Choice = serde_json::from_str(r#"{"type":"back"}"#).unwrap();
        assert_eq!(back, Choice::Back);
    }
}
