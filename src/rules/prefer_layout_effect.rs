// getBoundingClientRect forces a reflow; inside useEffect it runs after
// paint and causes an extra one. useLayoutEffect reads before paint.

use tree_sitter::Node;

use crate::analysis::walk::{ancestors, node_text};

pub(crate) fn check<'t>(node: Node<'t>, source: &str) -> Option<(Node<'t>, String)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if node_text(property, source) != "getBoundingClientRect" {
        return None;
    }
    let enclosing = ancestors(node)
        .find(|candidate| matches!(candidate.kind(), "arrow_function" | "function_expression"))?;
    let arguments = enclosing.parent()?;
    if arguments.kind() != "arguments" {
        return None;
    }
    let call = arguments.parent()?;
    if call.kind() != "call_expression" {
        return None;
    }
    let effect = call.child_by_field_name("function")?;
    if effect.kind() != "identifier" || node_text(effect, source) != "useEffect" {
        return None;
    }
    Some((
        node,
        "Prefer `useLayoutEffect` over `useEffect` when reading from DOM with \
         `getBoundingClientRect` to avoid causing an extra reflow."
            .to_string(),
    ))
}
