use super::node::TrieNode;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Depth-first traversal over an immutable `TrieNode`.
/// Uses an explicit stack to avoid recursion on deep trees.
#[inline]
pub(super) fn traverse<F>(root: &TrieNode, mut action: F)
where
    F: FnMut(&TrieNode),
{
    let mut stack: Vec<&TrieNode> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push(root);

    while let Some(node) = stack.pop() {
        action(node);

        for child in node.static_children.values() {
            stack.push(child);
        }
        if let Some(param) = node.param_child.as_deref() {
            stack.push(param);
        }
        if let Some(wildcard) = node.wildcard_child.as_deref() {
            stack.push(wildcard);
        }
    }
}
