//! Depth-first tree walk with enter/leave callbacks.

use smallvec::SmallVec;
use tree_sitter::{Node, Tree};

/// Callbacks for [`walk`]. Anonymous tokens (punctuation, keywords) are
/// reported like any other node.
pub trait TreeVisitor<'tree> {
    /// Called before any child of `node` is visited.
    fn enter(&mut self, node: Node<'tree>, parent: Option<Node<'tree>>);

    /// Called after every child of `node` has been visited.
    fn leave(&mut self, _node: Node<'tree>, _parent: Option<Node<'tree>>) {}
}

/// Visit every node of `tree` once, pre-order enter and post-order leave,
/// children in document order.
pub fn walk<'tree, V: TreeVisitor<'tree>>(tree: &'tree Tree, visitor: &mut V) {
    let mut cursor = tree.walk();
    let mut ancestors: SmallVec<[Node<'tree>; 32]> = SmallVec::new();

    loop {
        let node = cursor.node();
        visitor.enter(node, ancestors.last().copied());
        if cursor.goto_first_child() {
            ancestors.push(node);
            continue;
        }
        visitor.leave(node, ancestors.last().copied());

        // Climb until a sibling is available or the root has been left.
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            if let Some(finished) = ancestors.pop() {
                visitor.leave(finished, ancestors.last().copied());
            }
        }
    }
}
