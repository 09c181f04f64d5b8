//! Classification engine

use crate::rules::{Category, RuleSet};
use crate::utils::text::normalize_text;

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Assigned category.
    pub category: Category,
    /// Trigger terms of the assigned category found in the text, in rule
    /// declaration order. Empty for [`Category::Uncategorized`].
    pub matched_terms: Vec<String>,
}

impl Classification {
    fn uncategorized() -> Self {
        Self {
            category: Category::Uncategorized,
            matched_terms: Vec::new(),
        }
    }
}

/// Keyword classifier over a borrowed, read-only rule set.
pub struct Classifier<'a> {
    rules: &'a RuleSet,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Classify free-form email text.
    ///
    /// Categories are tested in rule-set priority order. A category whose
    /// exclusion term appears in the text is removed from candidacy before
    /// the ordering applies, so evaluation falls through to later
    /// categories. Matching is case-insensitive substring matching on the
    /// normalized text; "foster dog" matches the trigger "dog", but so
    /// would "cat" inside "category" (accepted limitation of keyword
    /// spotting).
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Classification::uncategorized();
        }

        for rule in self.rules.rules() {
            if rule
                .exclusions
                .iter()
                .any(|term| normalized.contains(term.as_str()))
            {
                continue;
            }

            let matched_terms: Vec<String> = rule
                .triggers
                .iter()
                .filter(|term| normalized.contains(term.as_str()))
                .cloned()
                .collect();

            if !matched_terms.is_empty() {
                return Classification {
                    category: rule.category,
                    matched_terms,
                };
            }
        }

        Classification::uncategorized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CategoryRule;

    fn foster_rules() -> RuleSet {
        RuleSet::new(vec![
            CategoryRule::new(Category::DogFoster, &["dog", "puppy"], &[]),
            CategoryRule::new(Category::CatFoster, &["cat", "kitten"], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_classifies_by_trigger() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("I want to foster a dog");
        assert_eq!(result.category, Category::DogFoster);
        assert_eq!(result.matched_terms, vec!["dog"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("LOOKING TO ADOPT A KITTEN");
        assert_eq!(result.category, Category::CatFoster);
        assert_eq!(result.matched_terms, vec!["kitten"]);
    }

    #[test]
    fn test_empty_text_is_uncategorized() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("");
        assert_eq!(result.category, Category::Uncategorized);
        assert!(result.matched_terms.is_empty());

        let result = classifier.classify("  \n\t ");
        assert_eq!(result.category, Category::Uncategorized);
    }

    #[test]
    fn test_no_match_is_uncategorized() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("what time do you open?");
        assert_eq!(result.category, Category::Uncategorized);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        // Both categories trigger; DOG_FOSTER is declared first.
        let result = classifier.classify("we have a dog and a cat");
        assert_eq!(result.category, Category::DogFoster);
    }

    #[test]
    fn test_all_matching_triggers_are_reported() {
        let rules = foster_rules();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("our dog just had a puppy");
        assert_eq!(result.matched_terms, vec!["dog", "puppy"]);
    }

    #[test]
    fn test_exclusion_falls_through_to_next_category() {
        let rules = RuleSet::new(vec![
            CategoryRule::new(Category::DogFoster, &["dog", "puppy"], &["cat"]),
            CategoryRule::new(Category::CatFoster, &["cat", "kitten"], &[]),
        ])
        .unwrap();
        let classifier = Classifier::new(&rules);

        // "cat" vetoes DOG_FOSTER; CAT_FOSTER then matches on "cat".
        let result = classifier.classify("looking for a cat-friendly dog home");
        assert_eq!(result.category, Category::CatFoster);
        assert_eq!(result.matched_terms, vec!["cat"]);
    }

    #[test]
    fn test_exclusion_can_leave_text_uncategorized() {
        let rules = RuleSet::new(vec![CategoryRule::new(
            Category::DogFoster,
            &["dog"],
            &["cat"],
        )])
        .unwrap();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("cat-friendly dog home");
        assert_eq!(result.category, Category::Uncategorized);
    }

    #[test]
    fn test_multi_word_trigger_across_line_break() {
        let rules = RuleSet::new(vec![CategoryRule::new(
            Category::SmallAnimal,
            &["guinea pig"],
            &[],
        )])
        .unwrap();
        let classifier = Classifier::new(&rules);

        let result = classifier.classify("I would love to adopt a guinea\npig");
        assert_eq!(result.category, Category::SmallAnimal);
    }
}
