// `xs.map(f).filter(g)` runs the map over elements the filter then throws
// away; filtering first shrinks the map's input.

use tree_sitter::Node;

use crate::analysis::walk::node_text;

pub(crate) fn check<'t>(node: Node<'t>, source: &str) -> Option<(Node<'t>, String)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if node_text(property, source) != "map" {
        return None;
    }
    let parent = node.parent()?;
    if parent.kind() != "member_expression" {
        return None;
    }
    if parent.child_by_field_name("object")?.id() != node.id() {
        return None;
    }
    let chained = parent.child_by_field_name("property")?;
    if node_text(chained, source) != "filter" {
        return None;
    }
    Some((
        parent,
        "Prefer using `arr.filter(a => !a).map(a => a)` instead of \
         `arr.map(a => a).filter(a => !a)` to reduce the iterations the `map` runs over."
            .to_string(),
    ))
}
