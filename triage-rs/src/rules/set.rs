//! Rule set construction and validation

use std::collections::{BTreeSet, HashSet};

use crate::error::{Result, TriageError};
use crate::utils::text::normalize_text;

use super::types::{Category, CategoryRule};

/// Ordered, immutable collection of category rules.
///
/// Declaration order is priority order: the classifier tests categories in
/// the order they appear here and the first non-excluded match wins.
/// Construction validates the rules once; afterwards the set is read-only
/// and safe to share across threads by reference.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    /// Build a rule set, normalizing every term and rejecting malformed or
    /// ambiguous input with [`TriageError::Configuration`].
    ///
    /// Rejected: a category with zero triggers, an empty/whitespace-only
    /// term, the same category declared twice, rules attached to
    /// [`Category::Uncategorized`], and two categories declaring identical
    /// trigger-term sets (ambiguous priority, flagged instead of silently
    /// resolved).
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self> {
        let mut seen: HashSet<Category> = HashSet::new();
        let mut trigger_sets: Vec<(Category, BTreeSet<String>)> = Vec::new();
        let mut normalized_rules = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.category == Category::Uncategorized {
                return Err(TriageError::Configuration(
                    "UNCATEGORIZED is the fallback category and cannot carry rules".to_string(),
                ));
            }
            if !seen.insert(rule.category) {
                return Err(TriageError::Configuration(format!(
                    "category {} is declared more than once",
                    rule.category
                )));
            }

            let triggers = normalize_terms(rule.category, "trigger", &rule.triggers)?;
            let exclusions = normalize_terms(rule.category, "exclusion", &rule.exclusions)?;

            if triggers.is_empty() {
                return Err(TriageError::Configuration(format!(
                    "category {} has no trigger terms",
                    rule.category
                )));
            }

            let trigger_set: BTreeSet<String> = triggers.iter().cloned().collect();
            if let Some((other, _)) = trigger_sets.iter().find(|(_, set)| *set == trigger_set) {
                return Err(TriageError::Configuration(format!(
                    "categories {} and {} declare identical trigger terms",
                    other, rule.category
                )));
            }
            trigger_sets.push((rule.category, trigger_set));

            normalized_rules.push(CategoryRule {
                category: rule.category,
                triggers,
                exclusions,
            });
        }

        Ok(Self {
            rules: normalized_rules,
        })
    }

    /// The default shelter rule set.
    ///
    /// Keyword lists come from sorting real volunteer-application mail;
    /// `test_builtin_rules_are_valid` keeps them honest against `new`.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Categories in priority order (excludes `Uncategorized`).
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules.iter().map(|r| r.category)
    }

    /// Look up the rule for a category, if the set declares one.
    pub fn rule_for(&self, category: Category) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// Number of categories with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set declares no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize_terms(category: Category, kind: &str, terms: &[String]) -> Result<Vec<String>> {
    let mut normalized = Vec::with_capacity(terms.len());
    for term in terms {
        let term = normalize_text(term);
        if term.is_empty() {
            return Err(TriageError::Configuration(format!(
                "category {} has an empty {} term",
                category, kind
            )));
        }
        normalized.push(term);
    }
    Ok(normalized)
}

// Terms are written pre-normalized (lower-case, single spaces) so the
// constructor here can skip validation; the unit test below re-runs them
// through `RuleSet::new`.
fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::DogFoster,
            &["dog", "dogs", "puppy", "puppies", "canine", "hound"],
            &[],
        ),
        CategoryRule::new(
            Category::CatFoster,
            &["cat", "cats", "kitten", "kittens", "feline"],
            &[],
        ),
        CategoryRule::new(
            Category::SmallAnimal,
            &["rabbit", "rabbits", "guinea pig", "hamster", "small animal"],
            &[],
        ),
        CategoryRule::new(
            Category::Volunteer,
            &["volunteer", "volunteers", "cuddle", "socialize", "help"],
            &[],
        ),
        CategoryRule::new(
            Category::Events,
            &["event", "events", "outreach", "community", "festival"],
            &[],
        ),
        CategoryRule::new(
            Category::GeneralInquiry,
            &["hours", "question", "inquiry", "information", "open"],
            &[],
        ),
    ]
}
