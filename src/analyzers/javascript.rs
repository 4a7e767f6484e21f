use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tree_sitter::Parser;

use crate::analysis::Engine;
use crate::core::ast::{Ast, JavaScriptAst, TypeScriptAst};
use crate::core::{FileReport, Language};
use crate::rules::RuleSettings;

use super::Analyzer;

pub struct JavaScriptAnalyzer {
    language: Language,
}

impl JavaScriptAnalyzer {
    pub fn new_javascript() -> Self {
        Self {
            language: Language::JavaScript,
        }
    }

    pub fn new_typescript() -> Self {
        Self {
            language: Language::TypeScript,
        }
    }

    fn configured_parser(&self, path: &Path) -> Result<Parser> {
        let mut parser = Parser::new();
        match self.language {
            Language::JavaScript => {
                parser
                    .set_language(&tree_sitter_javascript::LANGUAGE.into())
                    .context("Failed to set JavaScript language")?;
            }
            Language::TypeScript => {
                // .tsx needs the JSX-aware grammar variant.
                let grammar = if path.extension().is_some_and(|ext| ext == "tsx") {
                    tree_sitter_typescript::LANGUAGE_TSX
                } else {
                    tree_sitter_typescript::LANGUAGE_TYPESCRIPT
                };
                parser
                    .set_language(&grammar.into())
                    .context("Failed to set TypeScript language")?;
            }
        }
        Ok(parser)
    }
}

impl Analyzer for JavaScriptAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<Ast> {
        let mut parser = self.configured_parser(&path)?;
        let tree = parser
            .parse(content, None)
            .context("Failed to parse JavaScript/TypeScript code")?;
        Ok(match self.language {
            Language::JavaScript => Ast::JavaScript(JavaScriptAst {
                tree,
                source: content.to_string(),
                path,
            }),
            Language::TypeScript => Ast::TypeScript(TypeScriptAst {
                tree,
                source: content.to_string(),
                path,
            }),
        })
    }

    fn analyze(&self, ast: &Ast, settings: &RuleSettings) -> FileReport {
        FileReport {
            path: ast.path().to_path_buf(),
            language: self.language,
            diagnostics: Engine::analyze(ast, settings),
        }
    }

    fn language(&self) -> Language {
        self.language
    }
}
