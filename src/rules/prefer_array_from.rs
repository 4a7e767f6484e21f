// `Array.from(a).map(b)` materializes an intermediate array that
// `Array.from(a, b)` builds in one pass.

use tree_sitter::Node;

use crate::analysis::walk::node_text;

pub(crate) fn check<'t>(node: Node<'t>, source: &str) -> Option<(Node<'t>, String)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let object = callee.child_by_field_name("object")?;
    if object.kind() != "identifier" || node_text(object, source) != "Array" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if node_text(property, source) != "from" {
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
    if node_text(chained, source) != "map" {
        return None;
    }
    Some((
        parent,
        "Prefer using `Array.from(arr, a => a)` over `Array.from(arr).map(a => a)` \
         to avoid an unnecessary function call while keeping functionality equal."
            .to_string(),
    ))
}
