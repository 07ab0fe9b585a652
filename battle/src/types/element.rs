//! Element system and effectiveness chart

/// Creature and skill elements.
///
/// Fire, Water and Leaf form the advantage cycle
/// (Fire beats Leaf, Leaf beats Water, Water beats Fire).
/// Normal takes part in no matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Element {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Leaf = 3,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Normal, Element::Fire, Element::Water, Element::Leaf];

    /// The elements that take part in the advantage cycle, in cycle order
    pub const CYCLE: [Element; 3] = [Element::Fire, Element::Leaf, Element::Water];

    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Get effectiveness of this element attacking a defender of `defender` element
    pub fn effectiveness(&self, defender: Element) -> f32 {
        EFFECTIVENESS_CHART[*self as usize][defender as usize]
    }

    /// The element this one deals double damage to
    pub fn beats(&self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Leaf),
            Element::Leaf => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::Normal => None,
        }
    }

    /// The element that deals double damage to this one
    pub fn weak_to(&self) -> Option<Element> {
        Self::CYCLE.iter().copied().find(|e| e.beats() == Some(*self))
    }

    /// Parse from protocol string (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Element::Normal),
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "leaf" | "grass" => Some(Element::Leaf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "Normal",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Leaf => "Leaf",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Effectiveness multiplier of a skill element against a defender element.
///
/// Pure lookup: unlisted pairings are neutral.
pub fn effectiveness(attack: Element, defend: Element) -> f32 {
    attack.effectiveness(defend)
}

/// 4x4 effectiveness chart
/// Row = attacking element, Column = defending element
///
/// Order: Normal, Fire, Water, Leaf
#[rustfmt::skip]
pub static EFFECTIVENESS_CHART: [[f32; 4]; 4] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0],
    // Fire attacking
    [1.0, 1.0, 0.5, 2.0],
    // Water attacking
    [1.0, 2.0, 1.0, 0.5],
    // Leaf attacking
    [1.0, 0.5, 2.0, 1.0],
];
