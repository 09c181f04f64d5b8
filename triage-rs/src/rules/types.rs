//! Category and rule data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email category.
///
/// A closed set: adding a category is a source-level change, and
/// [`Category::Uncategorized`] is the first-class fallback when no rule
/// matches rather than a sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Dog fostering applications.
    DogFoster,
    /// Cat fostering applications.
    CatFoster,
    /// Rabbits, guinea pigs, hamsters and other small animals.
    SmallAnimal,
    /// General volunteering offers.
    Volunteer,
    /// Event and outreach participation.
    Events,
    /// Questions about hours, process, etc.
    GeneralInquiry,
    /// Fallback when no rule matched. Never carries rules of its own.
    Uncategorized,
}

impl Category {
    /// Stable identifier used in reports, CSV output and rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DogFoster => "DOG_FOSTER",
            Self::CatFoster => "CAT_FOSTER",
            Self::SmallAnimal => "SMALL_ANIMAL",
            Self::Volunteer => "VOLUNTEER",
            Self::Events => "EVENTS",
            Self::GeneralInquiry => "GENERAL_INQUIRY",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// Parse an identifier as written in rule files.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DOG_FOSTER" => Some(Self::DogFoster),
            "CAT_FOSTER" => Some(Self::CatFoster),
            "SMALL_ANIMAL" => Some(Self::SmallAnimal),
            "VOLUNTEER" => Some(Self::Volunteer),
            "EVENTS" => Some(Self::Events),
            "GENERAL_INQUIRY" => Some(Self::GeneralInquiry),
            "UNCATEGORIZED" => Some(Self::Uncategorized),
            _ => None,
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DogFoster => "Dog Foster",
            Self::CatFoster => "Cat Foster",
            Self::SmallAnimal => "Small Animal",
            Self::Volunteer => "Volunteer",
            Self::Events => "Events",
            Self::GeneralInquiry => "General Inquiry",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger and exclusion terms for one category.
///
/// Immutable after the owning [`super::RuleSet`] is constructed; terms are
/// stored normalized (lower-cased, whitespace-collapsed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category this rule assigns.
    pub category: Category,
    /// Substrings whose presence matches the category.
    pub triggers: Vec<String>,
    /// Substrings whose presence vetoes the category.
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl CategoryRule {
    /// Convenience constructor from string slices.
    pub fn new(category: Category, triggers: &[&str], exclusions: &[&str]) -> Self {
        Self {
            category,
            triggers: triggers.iter().map(ToString::to_string).collect(),
            exclusions: exclusions.iter().map(ToString::to_string).collect(),
        }
    }
}
