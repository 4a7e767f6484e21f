use tree_sitter::Node;

use crate::analysis::walk::{ancestors, node_text};

/// Array methods whose callback runs once per element, making their bodies
/// loop-equivalent for hazard classification.
pub const ITERATION_METHODS: &[&str] = &[
    "forEach",
    "map",
    "filter",
    "reduce",
    "some",
    "every",
    "find",
    "findIndex",
];

const EXPLICIT_LOOPS: &[&str] = &[
    "for_statement",
    "for_in_statement",
    "for_of_statement",
    "while_statement",
    "do_statement",
];

/// The nearest enclosing iterative construct of a node.
///
/// `Explicit` wraps a real loop statement; `IterationCallback` wraps the call
/// expression of an array-iteration method whose callback the node sits in.
/// The two are kept apart because only explicit loops have a condition
/// expression to inspect.
#[derive(Clone, Copy, Debug)]
pub enum LoopContext<'t> {
    Explicit(Node<'t>),
    IterationCallback(Node<'t>),
}

impl<'t> LoopContext<'t> {
    pub fn node(self) -> Node<'t> {
        match self {
            LoopContext::Explicit(node) | LoopContext::IterationCallback(node) => node,
        }
    }

    /// The test expression of a `while`/`do-while`/`for` loop, if any.
    pub fn condition(self) -> Option<Node<'t>> {
        match self {
            LoopContext::Explicit(node)
                if matches!(
                    node.kind(),
                    "while_statement" | "do_statement" | "for_statement"
                ) =>
            {
                node.child_by_field_name("condition")
            }
            _ => None,
        }
    }
}

/// Walks parent references from `node` and returns the nearest loop-like
/// ancestor, or `None` when the root is reached without one.
pub fn enclosing_loop<'t>(node: Node<'t>, source: &str) -> Option<LoopContext<'t>> {
    ancestors(node).find_map(|ancestor| {
        if EXPLICIT_LOOPS.contains(&ancestor.kind()) {
            Some(LoopContext::Explicit(ancestor))
        } else if is_iteration_method_call(ancestor, source) {
            Some(LoopContext::IterationCallback(ancestor))
        } else {
            None
        }
    })
}

/// A call expression of the shape `receiver.<iteration method>(...)`.
pub(crate) fn is_iteration_method_call(node: Node, source: &str) -> bool {
    if node.kind() != "call_expression" {
        return false;
    }
    let Some(callee) = node.child_by_field_name("function") else {
        return false;
    };
    if callee.kind() != "member_expression" {
        return false;
    }
    let Some(property) = callee.child_by_field_name("property") else {
        return false;
    };
    property.kind() == "property_identifier"
        && ITERATION_METHODS.contains(&node_text(property, source))
}

/// Whether an expression subtree mentions the identifier `name`.
pub fn condition_mentions(node: Node, name: &str, source: &str) -> bool {
    if node.kind() == "identifier" && node_text(node, source) == name {
        return true;
    }
    let mut cursor = node.walk();
    let result = node.children(&mut cursor)
        .any(|child| condition_mentions(child, name, source));
    result
}
