use std::collections::HashSet;
use tree_sitter::Node;

use crate::analysis::walk::node_text;

/// Identifier names known to reference the accumulator of the reduce
/// callback currently being traversed.
///
/// One scope is pushed per reduce callback and popped when the callback
/// ends, so nested reduce calls never see each other's aliases. Membership
/// checks consult the active (top) scope only, and a name is never removed
/// from a scope once added: the set models "same mutable reference", not
/// "same value".
#[derive(Debug, Default)]
pub struct AliasStack {
    scopes: Vec<HashSet<String>>,
}

impl AliasStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_scope(&mut self, accumulator: &str) {
        self.scopes.push(HashSet::from([accumulator.to_string()]));
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Records `target = source_name`; the target joins the active scope
    /// when the source is already in it.
    pub fn record_copy(&mut self, target: &str, source_name: &str) {
        if let Some(active) = self.scopes.last_mut() {
            if active.contains(source_name) {
                active.insert(target.to_string());
            }
        }
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|active| active.contains(name))
    }
}

/// The accumulator parameter name of a reduce callback, when `node` is a
/// function literal passed as the first argument of a `.reduce(...)` call
/// and its first parameter is a bare identifier. Any other shape is skipped.
pub(crate) fn reduce_callback_param<'s>(node: Node, source: &'s str) -> Option<&'s str> {
    let arguments = node.parent()?;
    if arguments.kind() != "arguments" {
        return None;
    }
    let call = arguments.parent()?;
    if call.kind() != "call_expression" {
        return None;
    }
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if node_text(property, source) != "reduce" {
        return None;
    }
    if arguments.named_child(0)?.id() != node.id() {
        return None;
    }
    first_parameter_name(node, source)
}

fn first_parameter_name<'s>(callback: Node, source: &'s str) -> Option<&'s str> {
    // `acc => ...` keeps the lone parameter outside a parameter list.
    if let Some(single) = callback.child_by_field_name("parameter") {
        return (single.kind() == "identifier").then(|| node_text(single, source));
    }
    let parameters = callback.child_by_field_name("parameters")?;
    let first = parameters.named_child(0)?;
    match first.kind() {
        "identifier" => Some(node_text(first, source)),
        // TypeScript wraps each parameter and nests the pattern inside.
        "required_parameter" | "optional_parameter" => {
            let pattern = first.child_by_field_name("pattern")?;
            (pattern.kind() == "identifier").then(|| node_text(pattern, source))
        }
        _ => None,
    }
}
