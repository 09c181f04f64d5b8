use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TriageError};
use crate::rules::{Category, CategoryRule, RuleSet};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ingest: IngestConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
    /// Optional override of the builtin rule set.
    #[serde(default)]
    pub rules: Option<RulesConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Default directory scanned for .txt email files.
    pub email_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Where CSV reports land.
    pub csv_dir: String,
    /// Where organized per-category copies land.
    pub organize_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Rule declarations as written in TOML: `[[rules.category]]` tables in a
/// config file, or top-level `[[category]]` tables in a standalone rules
/// file. Order of declaration is priority order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub category: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleEntry {
    pub name: String,
    pub triggers: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TriageError::Configuration(e.to_string()))?;

        toml::from_str(&content).map_err(|e| TriageError::Configuration(e.to_string()))
    }

    /// Resolve the rule set: configured categories when present, the
    /// builtin shelter rules otherwise. Validation happens here, before
    /// any batch runs.
    pub fn rule_set(&self) -> Result<RuleSet> {
        match &self.rules {
            Some(rules) if !rules.category.is_empty() => rules.to_rule_set(),
            _ => Ok(RuleSet::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:5000".to_string(),
            },
            ingest: IngestConfig {
                email_dir: "data/sample_emails".to_string(),
            },
            report: ReportConfig {
                csv_dir: "reports".to_string(),
                organize_dir: "categorized".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            rules: None,
        }
    }
}

impl RulesConfig {
    /// Load a standalone rules file (top-level `[[category]]` tables).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TriageError::Configuration(e.to_string()))?;

        toml::from_str(&content).map_err(|e| TriageError::Configuration(e.to_string()))
    }

    /// Build and validate a rule set from the declared entries.
    pub fn to_rule_set(&self) -> Result<RuleSet> {
        let mut rules = Vec::with_capacity(self.category.len());
        for entry in &self.category {
            let category = Category::parse(&entry.name).ok_or_else(|| {
                TriageError::Configuration(format!("unknown category name: {}", entry.name))
            })?;
            rules.push(CategoryRule {
                category,
                triggers: entry.triggers.clone(),
                exclusions: entry.exclusions.clone(),
            });
        }
        RuleSet::new(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_rules() {
        let config = Config::default();
        let rules = config.rule_set().unwrap();
        assert_eq!(rules.len(), 6);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let toml_text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed.server.listen_addr, config.server.listen_addr);
        assert_eq!(parsed.ingest.email_dir, config.ingest.email_dir);
    }

    #[test]
    fn test_rules_from_toml() {
        let rules_config: RulesConfig = toml::from_str(
            r#"
            [[category]]
            name = "DOG_FOSTER"
            triggers = ["dog", "puppy"]
            exclusions = ["cat"]

            [[category]]
            name = "CAT_FOSTER"
            triggers = ["cat", "kitten"]
            "#,
        )
        .unwrap();

        let rules = rules_config.to_rule_set().unwrap();
        assert_eq!(rules.len(), 2);
        let dog = rules.rule_for(Category::DogFoster).unwrap();
        assert_eq!(dog.exclusions, vec!["cat"]);
    }

    #[test]
    fn test_unknown_category_name_is_rejected() {
        let rules_config = RulesConfig {
            category: vec![RuleEntry {
                name: "REPTILES".to_string(),
                triggers: vec!["gecko".to_string()],
                exclusions: Vec::new(),
            }],
        };

        let result = rules_config.to_rule_set();
        assert!(matches!(result, Err(TriageError::Configuration(_))));
    }

    #[test]
    fn test_declaration_order_is_priority_order() {
        let rules_config: RulesConfig = toml::from_str(
            r#"
            [[category]]
            name = "CAT_FOSTER"
            triggers = ["cat"]

            [[category]]
            name = "DOG_FOSTER"
            triggers = ["dog"]
            "#,
        )
        .unwrap();

        let rules = rules_config.to_rule_set().unwrap();
        let order: Vec<Category> = rules.categories().collect();
        assert_eq!(order, vec![Category::CatFoster, Category::DogFoster]);
    }
}
