use std::collections::HashMap;
use tree_sitter::Node;

use crate::analysis::loops::{is_iteration_method_call, LoopContext};
use crate::analysis::walk::ancestors;

/// Variable name to the declarator node of its most recent declaration.
/// Built in document order during the traversal; last writer wins.
#[derive(Default)]
pub struct DeclarationIndex<'t> {
    by_name: HashMap<String, Node<'t>>,
}

impl<'t> DeclarationIndex<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, declarator: Node<'t>) {
        self.by_name.insert(name.to_string(), declarator);
    }

    pub fn get(&self, name: &str) -> Option<Node<'t>> {
        self.by_name.get(name).copied()
    }
}

/// Whether a variable is recreated each iteration or carried across them.
///
/// `Unknown` covers bindings the index never saw (parameters, imports); those
/// are deliberately not reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeVerdict {
    LoopLocal,
    CarriedAcross,
    Unknown,
}

pub fn resolve<'t>(
    name: &str,
    loop_context: LoopContext<'t>,
    referencing: Node<'t>,
    index: &DeclarationIndex<'t>,
    source: &str,
) -> ScopeVerdict {
    let Some(declaration) = index.get(name) else {
        return ScopeVerdict::Unknown;
    };
    if is_descendant_of(declaration, loop_context.node()) {
        return ScopeVerdict::LoopLocal;
    }
    // The declaration may still be local to the iteration callback the
    // reference sits in, which the loop node alone cannot tell us.
    if let Some(callback) = enclosing_iteration_callback(referencing, source) {
        if is_descendant_of(declaration, callback) {
            return ScopeVerdict::LoopLocal;
        }
    }
    ScopeVerdict::CarriedAcross
}

fn is_descendant_of(node: Node, ancestor: Node) -> bool {
    std::iter::once(node)
        .chain(ancestors(node))
        .any(|current| current.id() == ancestor.id())
}

/// The nearest enclosing function literal passed as a callback to an
/// array-iteration method.
fn enclosing_iteration_callback<'t>(node: Node<'t>, source: &str) -> Option<Node<'t>> {
    ancestors(node).find(|candidate| {
        matches!(candidate.kind(), "arrow_function" | "function_expression")
            && candidate.parent().is_some_and(|args| {
                args.kind() == "arguments"
                    && args
                        .parent()
                        .is_some_and(|call| is_iteration_method_call(call, source))
            })
    })
}
