pub mod aliases;
pub mod loops;
pub mod scope;
pub mod walk;

use tree_sitter::Node;

use crate::analysis::aliases::{reduce_callback_param, AliasStack};
use crate::analysis::scope::DeclarationIndex;
use crate::analysis::walk::node_text;
use crate::core::ast::Ast;
use crate::core::{Diagnostic, RuleId};
use crate::rules;
use crate::rules::RuleSettings;

/// Single-pass analysis engine for one file.
///
/// Walks the tree once in document order; at each node it records shared
/// state (declarations, accumulator aliases) and dispatches the enabled
/// matchers. State is owned by the engine instance and never shared across
/// files, so one engine per file can run in parallel with others.
pub struct Engine<'a> {
    source: &'a str,
    path: &'a std::path::Path,
    settings: &'a RuleSettings,
    declarations: DeclarationIndex<'a>,
    aliases: AliasStack,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Engine<'a> {
    pub fn analyze(ast: &'a Ast, settings: &'a RuleSettings) -> Vec<Diagnostic> {
        let mut engine = Engine {
            source: ast.source(),
            path: ast.path(),
            settings,
            declarations: DeclarationIndex::new(),
            aliases: AliasStack::new(),
            diagnostics: Vec::new(),
        };
        engine.walk(ast.tree().root_node());
        debug_assert_eq!(engine.aliases.depth(), 0, "unbalanced alias scopes");
        engine.diagnostics
    }

    fn walk(&mut self, node: Node<'a>) {
        let pushed_scope = self.track_state(node);
        self.match_node(node);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk(child);
        }
        if pushed_scope {
            self.aliases.pop_scope();
        }
    }

    /// Updates the declaration index and alias scopes. Returns whether an
    /// alias scope was pushed for this node.
    fn track_state(&mut self, node: Node<'a>) -> bool {
        match node.kind() {
            "variable_declarator" => {
                self.track_declarator(node);
                false
            }
            "assignment_expression" => {
                self.track_assignment(node);
                false
            }
            "arrow_function" | "function_expression" => {
                match reduce_callback_param(node, self.source) {
                    Some(param) => {
                        self.aliases.push_scope(param);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn track_declarator(&mut self, node: Node<'a>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        if name.kind() != "identifier" {
            return;
        }
        let name = node_text(name, self.source);
        self.declarations.record(name, node);
        if let Some(value) = node.child_by_field_name("value") {
            if value.kind() == "identifier" {
                self.aliases.record_copy(name, node_text(value, self.source));
            }
        }
    }

    fn track_assignment(&mut self, node: Node<'a>) {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return;
        };
        if left.kind() == "identifier" && right.kind() == "identifier" {
            self.aliases
                .record_copy(node_text(left, self.source), node_text(right, self.source));
        }
    }

    fn match_node(&mut self, node: Node<'a>) {
        match node.kind() {
            "call_expression" => self.match_call(node),
            "spread_element" => {
                if self.settings.is_enabled(RuleId::NoImmutableReduce) {
                    if let Some((target, message)) =
                        rules::immutable_reduce::check_spread(node, self.source, &self.aliases)
                    {
                        self.emit(RuleId::NoImmutableReduce, target, message);
                    }
                }
            }
            "array" => {
                if self.settings.is_enabled(RuleId::NoUnnecessaryArraySpread) {
                    if let Some((target, message)) =
                        rules::unnecessary_array_spread::check(node, self.source)
                    {
                        self.emit(RuleId::NoUnnecessaryArraySpread, target, message);
                    }
                }
            }
            _ => {}
        }
    }

    fn match_call(&mut self, node: Node<'a>) {
        if self.settings.is_enabled(RuleId::NoImmutableReduce) {
            if let Some((target, message)) =
                rules::immutable_reduce::check_concat(node, self.source, &self.aliases)
            {
                self.emit(RuleId::NoImmutableReduce, target, message);
            }
        }
        if self.settings.is_enabled(RuleId::NoQuadraticLoopOperations) {
            if let Some((target, message)) =
                rules::quadratic_loop_ops::check(node, self.source, &self.declarations)
            {
                self.emit(RuleId::NoQuadraticLoopOperations, target, message);
            }
        }
        if self.settings.is_enabled(RuleId::PreferFilterFirst) {
            if let Some((target, message)) = rules::prefer_filter_first::check(node, self.source) {
                self.emit(RuleId::PreferFilterFirst, target, message);
            }
        }
        if self.settings.is_enabled(RuleId::PreferArrayFrom) {
            if let Some((target, message)) = rules::prefer_array_from::check(node, self.source) {
                self.emit(RuleId::PreferArrayFrom, target, message);
            }
        }
        if self.settings.is_enabled(RuleId::PreferLayoutEffect) {
            if let Some((target, message)) = rules::prefer_layout_effect::check(node, self.source) {
                self.emit(RuleId::PreferLayoutEffect, target, message);
            }
        }
    }

    fn emit(&mut self, rule: RuleId, node: Node<'a>, message: String) {
        let Some(severity) = self.settings.severity(rule) else {
            return;
        };
        let position = node.start_position();
        let line = position.row + 1;
        self.diagnostics.push(Diagnostic {
            id: format!("{}-{}-{}", rule.name(), self.path.display(), line),
            rule,
            severity,
            file: self.path.to_path_buf(),
            line,
            column: Some(position.column),
            message,
        });
    }
}
