//! Subtree plumbing: owned nodes, height bookkeeping, rotations.
//!
//! Every helper takes a subtree by value and hands the (possibly rotated)
//! new subtree root back to the caller, so rebalancing falls out of the
//! recursion unwind without parent pointers.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Cached subtree height; a node with no children has height 1.
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute the cached height from the children's cached heights.
    pub(crate) fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Promote the left child. Fixes a left-heavy node.
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node.left.take().expect("left-heavy node has a left child");
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

/// Promote the right child. Fixes a right-heavy node.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node.right.take().expect("right-heavy node has a right child");
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

/// Restore the AVL invariant at `node` after one child subtree changed
/// height. At most one single or double rotation is needed; the double
/// case first rotates the heavy child away from its own heavy side.
pub(crate) fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();
    let bf = node.balance_factor();
    if bf > 1 {
        let left = node.left.take().expect("left-heavy node has a left child");
        if left.balance_factor() < 0 {
            // Left-right case.
            node.left = Some(rotate_left(left));
        } else {
            node.left = Some(left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        let right = node
            .right
            .take()
            .expect("right-heavy node has a right child");
        if right.balance_factor() > 0 {
            // Right-left case.
            node.right = Some(rotate_right(right));
        } else {
            node.right = Some(right);
        }
        return rotate_left(node);
    }
    node
}

/// Detach the minimum of a subtree, rebalancing the descent path on the
/// way back up. Returns the remaining subtree and the detached value.
pub(crate) fn pop_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = pop_min(left);
            node.left = rest;
            (Some(balance(node)), min)
        }
        None => {
            let node = *node;
            (node.right, node.value)
        }
    }
}
