// Front-removal operations inside loops. shift()/unshift() reposition every
// element of the array, so doing either once per iteration on an array that
// survives across iterations is quadratic in total.

use log::debug;
use tree_sitter::Node;

use crate::analysis::loops::{condition_mentions, enclosing_loop};
use crate::analysis::scope::{resolve, DeclarationIndex, ScopeVerdict};
use crate::analysis::walk::node_text;

const UNSHIFT_MESSAGE: &str = "unshift() in loop causes O(n²) complexity. Consider: use push() \
     then reverse once, iterate in reverse order, or use a deque data structure";
const SHIFT_MESSAGE: &str = "shift() in loop causes O(n²) complexity. Consider: use an index \
     pointer, iterate in reverse with pop(), or use a deque data structure";

pub(crate) fn check<'t>(
    node: Node<'t>,
    source: &str,
    declarations: &DeclarationIndex<'t>,
) -> Option<(Node<'t>, String)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    let method = node_text(property, source);
    if method != "shift" && method != "unshift" {
        return None;
    }
    let receiver = callee.child_by_field_name("object")?;
    if receiver.kind() != "identifier" {
        return None;
    }
    let name = node_text(receiver, source);

    let loop_context = enclosing_loop(node, source)?;
    match resolve(name, loop_context, node, declarations, source) {
        ScopeVerdict::LoopLocal | ScopeVerdict::Unknown => return None,
        ScopeVerdict::CarriedAcross => {}
    }

    let message = if method == "unshift" {
        // Accumulating at the front repositions every element, always.
        UNSHIFT_MESSAGE
    } else {
        // An outer-scope receiver is reported whether or not it appears in
        // the loop condition; a condition hit is the clear-cut
        // self-modification case.
        if loop_context
            .condition()
            .is_some_and(|test| condition_mentions(test, name, source))
        {
            debug!("shift receiver '{name}' drives the enclosing loop condition");
        }
        SHIFT_MESSAGE
    };
    Some((node, message.to_string()))
}
