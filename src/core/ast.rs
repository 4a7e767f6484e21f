use std::path::{Path, PathBuf};
use tree_sitter::Tree;

pub struct JavaScriptAst {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
}

pub struct TypeScriptAst {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
}

pub enum Ast {
    JavaScript(JavaScriptAst),
    TypeScript(TypeScriptAst),
}

impl Ast {
    pub fn tree(&self) -> &Tree {
        match self {
            Ast::JavaScript(ast) => &ast.tree,
            Ast::TypeScript(ast) => &ast.tree,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Ast::JavaScript(ast) => &ast.source,
            Ast::TypeScript(ast) => &ast.source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Ast::JavaScript(ast) => &ast.path,
            Ast::TypeScript(ast) => &ast.path,
        }
    }
}
