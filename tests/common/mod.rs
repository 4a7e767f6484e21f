#![allow(dead_code)]

use quadlint::analyzers::{Analyzer, JavaScriptAnalyzer};
use quadlint::core::Diagnostic;
use quadlint::rules::RuleSettings;
use std::path::PathBuf;

pub fn analyze_js(source: &str) -> Vec<Diagnostic> {
    analyze_js_with(source, &RuleSettings::defaults())
}

pub fn analyze_js_with(source: &str, settings: &RuleSettings) -> Vec<Diagnostic> {
    let analyzer = JavaScriptAnalyzer::new_javascript();
    let ast = analyzer
        .parse(source, PathBuf::from("test.js"))
        .expect("source should parse");
    analyzer.analyze(&ast, settings).diagnostics
}

pub fn analyze_ts(source: &str) -> Vec<Diagnostic> {
    let analyzer = JavaScriptAnalyzer::new_typescript();
    let ast = analyzer
        .parse(source, PathBuf::from("test.ts"))
        .expect("source should parse");
    analyzer
        .analyze(&ast, &RuleSettings::defaults())
        .diagnostics
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
