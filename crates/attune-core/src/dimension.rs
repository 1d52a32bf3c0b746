//! The four measured dimensions and their opposing poles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four personality axes, in fixed type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Where energy comes from in social settings
    SocialEnergy,
    /// What draws attention in a partner
    AttractionDriver,
    /// How choices are weighed
    DecisionFilter,
    /// Preferred pace and shape of a relationship
    RelationshipRhythm,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::SocialEnergy,
        Dimension::AttractionDriver,
        Dimension::DecisionFilter,
        Dimension::RelationshipRhythm,
    ];

    pub fn index(&self) -> usize {
        match self {
            Dimension::SocialEnergy => 0,
            Dimension::AttractionDriver => 1,
            Dimension::DecisionFilter => 2,
            Dimension::RelationshipRhythm => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::SocialEnergy => "Social Energy",
            Dimension::AttractionDriver => "Attraction Driver",
            Dimension::DecisionFilter => "Decision Filter",
            Dimension::RelationshipRhythm => "Relationship Rhythm",
        }
    }

    /// Pole selected by a score of 50 or more
    pub fn first_pole(&self) -> Pole {
        match self {
            Dimension::SocialEnergy => Pole::Connector,
            Dimension::AttractionDriver => Pole::Present,
            Dimension::DecisionFilter => Pole::Logic,
            Dimension::RelationshipRhythm => Pole::Structured,
        }
    }

    pub fn second_pole(&self) -> Pole {
        match self {
            Dimension::SocialEnergy => Pole::Focuser,
            Dimension::AttractionDriver => Pole::Visionary,
            Dimension::DecisionFilter => Pole::Empathy,
            Dimension::RelationshipRhythm => Pole::Adaptive,
        }
    }

    pub fn poles(&self) -> [Pole; 2] {
        [self.first_pole(), self.second_pole()]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named endpoint of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pole {
    Connector,
    Focuser,
    Present,
    Visionary,
    Logic,
    Empathy,
    Structured,
    Adaptive,
}

impl Pole {
    pub const ALL: [Pole; 8] = [
        Pole::Connector,
        Pole::Focuser,
        Pole::Present,
        Pole::Visionary,
        Pole::Logic,
        Pole::Empathy,
        Pole::Structured,
        Pole::Adaptive,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            Pole::Connector | Pole::Focuser => Dimension::SocialEnergy,
            Pole::Present | Pole::Visionary => Dimension::AttractionDriver,
            Pole::Logic | Pole::Empathy => Dimension::DecisionFilter,
            Pole::Structured | Pole::Adaptive => Dimension::RelationshipRhythm,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Pole::Connector => 'C',
            Pole::Focuser => 'F',
            Pole::Present => 'P',
            Pole::Visionary => 'V',
            Pole::Logic => 'L',
            Pole::Empathy => 'E',
            Pole::Structured => 'S',
            Pole::Adaptive => 'A',
        }
    }

    pub fn from_letter(letter: char) -> Option<Pole> {
        Pole::ALL
            .into_iter()
            .find(|p| p.letter() == letter.to_ascii_uppercase())
    }

    /// Display word used in type names
    pub fn name(&self) -> &'static str {
        match self {
            Pole::Connector => "Connector",
            Pole::Focuser => "Focuser",
            Pole::Present => "Present",
            Pole::Visionary => "Visionary",
            Pole::Logic => "Logic",
            Pole::Empathy => "Empathy",
            Pole::Structured => "Structured",
            Pole::Adaptive => "Adaptive",
        }
    }

    pub fn is_first(&self) -> bool {
        self.dimension().first_pole() == *self
    }

    pub fn opposite(&self) -> Pole {
        let dim = self.dimension();
        if self.is_first() {
            dim.second_pole()
        } else {
            dim.first_pole()
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
