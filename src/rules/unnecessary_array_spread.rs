// Array literals whose only element is a spread, chained straight into a
// member access: the copy is iterated once to build it and again by the
// chained method. Bare defensive copies (`const c = [...xs]`) are allowed.
//
// This rule can false-positive when the spread converts an array-like (e.g.
// a NodeList) rather than copying an array.

use tree_sitter::Node;

use crate::analysis::walk::node_text;

pub(crate) fn check<'t>(node: Node<'t>, source: &str) -> Option<(Node<'t>, String)> {
    if node.named_child_count() != 1 {
        return None;
    }
    let element = node.named_child(0)?;
    if element.kind() != "spread_element" {
        return None;
    }
    let parent = node.parent()?;
    if parent.kind() != "member_expression" {
        return None;
    }
    let argument = element.named_child(0)?;
    match argument.kind() {
        "identifier" => {
            let name = node_text(argument, source);
            Some((
                node,
                format!(
                    "Unnecessary array spread operator - prefer direct {name}.map call. \
                     For extra safety, mark callback parameter as Readonly<T>.\n\
                     Example: array.map((item: Readonly<T>) => ..."
                ),
            ))
        }
        "new_expression" => is_array_constructor(
            argument.child_by_field_name("constructor")?,
            source,
        )
        .then(|| (node, fill_message())),
        "call_expression" => is_array_constructor(
            argument.child_by_field_name("function")?,
            source,
        )
        .then(|| (node, fill_message())),
        _ => None,
    }
}

fn is_array_constructor(callee: Node, source: &str) -> bool {
    callee.kind() == "identifier" && node_text(callee, source) == "Array"
}

fn fill_message() -> String {
    "Unnecessary array spread operator - prefer new Array(n).fill(value).map call\n\
     Example: new Array(10).fill(0).map(item => ..."
        .to_string()
}
