use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::errors::Error;
use crate::core::{Language, RuleId, Severity};
use crate::rules::RuleSettings;

pub const CONFIG_FILE_NAME: &str = "quadlint.toml";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuadlintConfig {
    /// Severity overrides keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleLevel>,

    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub languages: LanguageConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_languages")]
    pub enabled: Vec<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: default_languages(),
        }
    }
}

fn default_languages() -> Vec<String> {
    vec!["javascript".to_string(), "typescript".to_string()]
}

impl QuadlintConfig {
    /// Loads an explicit config file, or `quadlint.toml` from `root` when
    /// present, or the defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                candidate.exists().then_some(candidate)
            }
        };
        match path {
            Some(path) => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Default rule settings with this config's overrides applied.
    pub fn rule_settings(&self) -> Result<RuleSettings> {
        let mut settings = RuleSettings::defaults();
        for (name, level) in &self.rules {
            let rule: RuleId = name
                .parse()
                .map_err(Error::Configuration)?;
            match level {
                RuleLevel::Off => settings.disable(rule),
                RuleLevel::Warn => settings.set(rule, Severity::Warn),
                RuleLevel::Error => settings.set(rule, Severity::Error),
            }
        }
        Ok(settings)
    }

    pub fn enabled_languages(&self) -> Result<Vec<Language>> {
        self.languages
            .enabled
            .iter()
            .map(|name| match name.as_str() {
                "javascript" => Ok(Language::JavaScript),
                "typescript" => Ok(Language::TypeScript),
                other => {
                    Err(Error::Configuration(format!("unknown language '{other}'")).into())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_config_uses_defaults() {
        let config: QuadlintConfig = toml::from_str("").unwrap();
        let settings = config.rule_settings().unwrap();
        for rule in RuleId::ALL {
            assert_eq!(settings.severity(rule), Some(Severity::Warn));
        }
        assert_eq!(
            config.enabled_languages().unwrap(),
            vec![Language::JavaScript, Language::TypeScript]
        );
    }

    #[test]
    fn rule_levels_override_defaults() {
        let config: QuadlintConfig = toml::from_str(indoc! {r#"
            [rules]
            no-immutable-reduce = "off"
            prefer-filter-first = "error"
        "#})
        .unwrap();
        let settings = config.rule_settings().unwrap();
        assert!(!settings.is_enabled(RuleId::NoImmutableReduce));
        assert_eq!(
            settings.severity(RuleId::PreferFilterFirst),
            Some(Severity::Error)
        );
        assert_eq!(
            settings.severity(RuleId::NoQuadraticLoopOperations),
            Some(Severity::Warn)
        );
    }

    #[test]
    fn unknown_rule_name_is_a_configuration_error() {
        let config: QuadlintConfig = toml::from_str(indoc! {r#"
            [rules]
            no-such-rule = "warn"
        "#})
        .unwrap();
        let err = config.rule_settings().unwrap_err();
        assert!(err.to_string().contains("no-such-rule"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let config: QuadlintConfig = toml::from_str(indoc! {r#"
            [languages]
            enabled = ["javascript", "cobol"]
        "#})
        .unwrap();
        assert!(config.enabled_languages().is_err());
    }

    #[test]
    fn ignore_patterns_deserialize() {
        let config: QuadlintConfig = toml::from_str(indoc! {r#"
            [ignore]
            patterns = ["node_modules/**", "*.min.js"]
        "#})
        .unwrap();
        assert_eq!(config.ignore.patterns.len(), 2);
    }
}
