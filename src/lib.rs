// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Diagnostic, FileReport, Language, ReportSummary, RuleId, Severity,
};

pub use crate::analysis::Engine;
pub use crate::analyzers::{analyze_file, get_analyzer, Analyzer, JavaScriptAnalyzer};
pub use crate::config::QuadlintConfig;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::find_source_files;
pub use crate::rules::{run_rule, RuleSettings};
