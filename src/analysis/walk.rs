use tree_sitter::Node;

/// Parent chains longer than this indicate a corrupted tree, not real code.
const MAX_ANCESTOR_DEPTH: usize = 10_000;

/// Upward walk over parent references, nearest ancestor first.
///
/// Every context query in the engine goes through this iterator rather than
/// hand-rolled `parent()` loops.
pub fn ancestors(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    let mut depth = 0usize;
    std::iter::successors(node.parent(), move |current| {
        depth += 1;
        debug_assert!(
            depth < MAX_ANCESTOR_DEPTH,
            "parent chain did not terminate"
        );
        current.parent()
    })
}

/// Helper to get text from a node
pub fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn ancestors_end_at_the_root() {
        let tree = parse("const a = 1;");
        let root = tree.root_node();
        let mut node = root;
        while node.child_count() > 0 {
            node = node.child(0).unwrap();
        }
        let chain: Vec<_> = ancestors(node).collect();
        assert!(!chain.is_empty());
        assert_eq!(chain.last().unwrap().id(), root.id());
    }

    #[test]
    fn node_text_slices_the_source() {
        let source = "const abc = 1;";
        let tree = parse(source);
        let declarator = tree
            .root_node()
            .child(0)
            .unwrap()
            .child(1)
            .unwrap();
        let name = declarator.child_by_field_name("name").unwrap();
        assert_eq!(node_text(name, source), "abc");
    }
}
