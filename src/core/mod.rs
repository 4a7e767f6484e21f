pub mod ast;
pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|ext| Language::from_extension(&ext.to_string_lossy()))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    NoImmutableReduce,
    NoQuadraticLoopOperations,
    NoUnnecessaryArraySpread,
    PreferFilterFirst,
    PreferArrayFrom,
    PreferLayoutEffect,
}

impl RuleId {
    pub const ALL: [RuleId; 6] = [
        RuleId::NoImmutableReduce,
        RuleId::NoQuadraticLoopOperations,
        RuleId::NoUnnecessaryArraySpread,
        RuleId::PreferFilterFirst,
        RuleId::PreferArrayFrom,
        RuleId::PreferLayoutEffect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleId::NoImmutableReduce => "no-immutable-reduce",
            RuleId::NoQuadraticLoopOperations => "no-quadratic-loop-operations",
            RuleId::NoUnnecessaryArraySpread => "no-unnecessary-array-spread",
            RuleId::PreferFilterFirst => "prefer-filter-first",
            RuleId::PreferArrayFrom => "prefer-array-from",
            RuleId::PreferLayoutEffect => "prefer-layout-effect",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| format!("unknown rule '{s}'"))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub id: String,
    pub rule: RuleId,
    pub severity: Severity,
    pub file: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub project_path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub files_analyzed: usize,
    pub summary: ReportSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    pub fn from_files(project_path: PathBuf, files: Vec<FileReport>) -> Self {
        let files_analyzed = files.len();
        let diagnostics: Vec<Diagnostic> = files
            .into_iter()
            .flat_map(|file| file.diagnostics)
            .collect();
        let errors = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        Self {
            project_path,
            timestamp: Utc::now(),
            files_analyzed,
            summary: ReportSummary {
                total: diagnostics.len(),
                errors,
                warnings: diagnostics.len() - errors,
            },
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_round_trip() {
        for rule in RuleId::ALL {
            assert_eq!(rule.name().parse::<RuleId>(), Ok(rule));
        }
    }

    #[test]
    fn unknown_rule_name_is_rejected() {
        assert!("no-such-rule".parse::<RuleId>().is_err());
    }

    #[test]
    fn language_from_extension() {
        assert_eq!(Language::from_extension("js"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("py"), None);
    }

    #[test]
    fn summary_counts_severities() {
        let diag = |severity| Diagnostic {
            id: "t".to_string(),
            rule: RuleId::NoImmutableReduce,
            severity,
            file: PathBuf::from("a.js"),
            line: 1,
            column: None,
            message: String::new(),
        };
        let report = AnalysisReport::from_files(
            PathBuf::from("."),
            vec![FileReport {
                path: PathBuf::from("a.js"),
                language: Language::JavaScript,
                diagnostics: vec![diag(Severity::Warn), diag(Severity::Error)],
            }],
        );
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.warnings, 1);
    }
}
