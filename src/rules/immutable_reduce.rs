// Accumulator rebuild patterns inside reduce callbacks: spreading the
// accumulator (or any alias of it) into a fresh array/object literal, or
// calling .concat() on it, copies every element already accumulated.

use tree_sitter::Node;

use crate::analysis::aliases::AliasStack;
use crate::analysis::walk::node_text;

pub(crate) fn check_spread<'t>(
    node: Node<'t>,
    source: &str,
    aliases: &AliasStack,
) -> Option<(Node<'t>, String)> {
    let argument = node.named_child(0)?;
    if argument.kind() != "identifier" {
        return None;
    }
    let name = node_text(argument, source);
    if !aliases.is_alias(name) {
        return None;
    }
    let parent = node.parent()?;
    match parent.kind() {
        "array" => Some((
            node,
            format!(
                "Avoid spreading accumulator in reduce (O(n²) complexity). \
                 Use {name}.push() instead for O(n) performance."
            ),
        )),
        "object" => Some((
            node,
            format!(
                "Avoid spreading accumulator in reduce (O(n²) complexity). \
                 Mutate {name} directly (e.g., {name}[key] = value) for O(n) performance."
            ),
        )),
        _ => None,
    }
}

pub(crate) fn check_concat<'t>(
    node: Node<'t>,
    source: &str,
    aliases: &AliasStack,
) -> Option<(Node<'t>, String)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if node_text(property, source) != "concat" {
        return None;
    }
    let receiver = callee.child_by_field_name("object")?;
    if receiver.kind() != "identifier" {
        return None;
    }
    let name = node_text(receiver, source);
    if !aliases.is_alias(name) {
        return None;
    }
    Some((
        node,
        format!(
            "Avoid using concat on accumulator in reduce (O(n²) complexity). \
             Use {name}.push() instead for O(n) performance."
        ),
    ))
}
