mod javascript;

pub use javascript::JavaScriptAnalyzer;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ast::Ast;
use crate::core::errors::Error;
use crate::core::{FileReport, Language};
use crate::rules::RuleSettings;

pub trait Analyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<Ast>;
    fn analyze(&self, ast: &Ast, settings: &RuleSettings) -> FileReport;
    fn language(&self) -> Language;
}

pub fn get_analyzer(language: Language) -> Box<dyn Analyzer> {
    match language {
        Language::JavaScript => Box::new(JavaScriptAnalyzer::new_javascript()),
        Language::TypeScript => Box::new(JavaScriptAnalyzer::new_typescript()),
    }
}

pub fn analyze_file(path: &Path, settings: &RuleSettings) -> Result<FileReport> {
    let language =
        Language::from_path(path).ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let analyzer = get_analyzer(language);
    let ast = analyzer.parse(&content, path.to_path_buf())?;
    Ok(analyzer.analyze(&ast, settings))
}
