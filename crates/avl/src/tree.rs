use std::cmp::Ordering;
use std::fmt::Debug;
use std::mem;

use structures_containers::ArrayList;
use thiserror::Error;

use crate::node::{balance, height, pop_min, Link, Node};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate value")]
    DuplicateValue,
    #[error("value not found")]
    ValueNotFound,
    #[error("tree is empty")]
    EmptyTree,
}

/// Self-balancing binary search tree (AVL).
///
/// Stores unique values under a strict total order. Every mutation keeps
/// the height-balance invariant, so `insert`, `remove` and `contains` are
/// O(log n). Mutations are atomic: a failed call leaves the tree exactly
/// as it was, with no partial rotation or stale cached height observable.
///
/// Traversals copy the stored values into a fresh [`ArrayList`] pre-sized
/// to the number of nodes.
///
/// # Examples
///
/// ```
/// use structures_avl::{AvlTree, TreeError};
///
/// let mut tree = AvlTree::new();
/// tree.insert(10)?;
/// tree.insert(20)?;
/// tree.insert(30)?;
///
/// // Inserting 30 rotated the root: the tree is two levels tall, not three.
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.in_order().as_slice(), &[10, 20, 30]);
/// assert_eq!(tree.insert(20), Err(TreeError::DuplicateValue));
///
/// assert_eq!(tree.remove(&10)?, 10);
/// assert!(!tree.contains(&10));
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Debug)]
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
    size: usize,
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Height of the whole tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }
}

impl<T: Ord> AvlTree<T> {
    /// Insert `value`, rebalancing as needed.
    ///
    /// Fails with [`TreeError::DuplicateValue`] if the value is already
    /// stored; the tree is untouched in that case.
    pub fn insert(&mut self, value: T) -> Result<(), TreeError> {
        Self::insert_in(&mut self.root, value)?;
        self.size += 1;
        Ok(())
    }

    /// Remove `value` and hand it back, rebalancing as needed.
    ///
    /// Fails with [`TreeError::EmptyTree`] on an empty tree and
    /// [`TreeError::ValueNotFound`] when the value is absent; the tree is
    /// untouched in either case.
    pub fn remove(&mut self, value: &T) -> Result<T, TreeError> {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        let removed = Self::remove_in(&mut self.root, value)?;
        self.size -= 1;
        Ok(removed)
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    fn insert_in(link: &mut Link<T>, value: T) -> Result<(), TreeError> {
        let Some(node) = link.as_deref_mut() else {
            *link = Some(Box::new(Node::new(value)));
            return Ok(());
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::insert_in(&mut node.left, value)?,
            Ordering::Greater => Self::insert_in(&mut node.right, value)?,
            // Error propagates before any height or link was touched.
            Ordering::Equal => return Err(TreeError::DuplicateValue),
        }
        let node = link.take().expect("subtree is non-empty");
        *link = Some(balance(node));
        Ok(())
    }

    fn remove_in(link: &mut Link<T>, value: &T) -> Result<T, TreeError> {
        let Some(node) = link.as_deref_mut() else {
            return Err(TreeError::ValueNotFound);
        };
        let removed = match value.cmp(&node.value) {
            Ordering::Less => Self::remove_in(&mut node.left, value)?,
            Ordering::Greater => Self::remove_in(&mut node.right, value)?,
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Two children: swap in the in-order successor's value
                    // and let the right subtree shrink by one.
                    let (rest, successor) = pop_min(right);
                    node.left = Some(left);
                    node.right = rest;
                    mem::replace(&mut node.value, successor)
                }
                (child, None) | (None, child) => {
                    // Zero or one child: splice the child into this slot.
                    let node = link.take().expect("subtree is non-empty");
                    *link = child;
                    return Ok(node.value);
                }
            },
        };
        let node = link.take().expect("subtree is non-empty");
        *link = Some(balance(node));
        Ok(removed)
    }
}

impl<T: Clone> AvlTree<T> {
    /// Values in root, left, right order.
    pub fn pre_order(&self) -> ArrayList<T> {
        let mut out = ArrayList::with_max_size(self.size);
        pre_order_in(&self.root, &mut out);
        out
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> ArrayList<T> {
        let mut out = ArrayList::with_max_size(self.size);
        in_order_in(&self.root, &mut out);
        out
    }

    /// Values in left, right, root order.
    pub fn post_order(&self) -> ArrayList<T> {
        let mut out = ArrayList::with_max_size(self.size);
        post_order_in(&self.root, &mut out);
        out
    }
}

impl<T: Ord + Debug> AvlTree<T> {
    /// Walk the whole tree and report the first violated invariant:
    /// strict BST order, fresh cached heights, the AVL balance bound, and
    /// the size counter.
    pub fn assert_valid(&self) -> Result<(), String> {
        let mut count = 0;
        check(&self.root, None, None, &mut count)?;
        if count != self.size {
            return Err(format!(
                "size() is {} but {} nodes are reachable",
                self.size, count
            ));
        }
        Ok(())
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn emit<T: Clone>(value: &T, out: &mut ArrayList<T>) {
    out.push_back(value.clone())
        .expect("output buffer sized to the tree");
}

fn pre_order_in<T: Clone>(link: &Link<T>, out: &mut ArrayList<T>) {
    if let Some(node) = link {
        emit(&node.value, out);
        pre_order_in(&node.left, out);
        pre_order_in(&node.right, out);
    }
}

fn in_order_in<T: Clone>(link: &Link<T>, out: &mut ArrayList<T>) {
    if let Some(node) = link {
        in_order_in(&node.left, out);
        emit(&node.value, out);
        in_order_in(&node.right, out);
    }
}

fn post_order_in<T: Clone>(link: &Link<T>, out: &mut ArrayList<T>) {
    if let Some(node) = link {
        post_order_in(&node.left, out);
        post_order_in(&node.right, out);
        emit(&node.value, out);
    }
}

/// Returns the recomputed height of `link`, checking invariants on the
/// way. `min`/`max` are the exclusive bounds inherited from ancestors.
fn check<T: Ord + Debug>(
    link: &Link<T>,
    min: Option<&T>,
    max: Option<&T>,
    count: &mut usize,
) -> Result<usize, String> {
    let Some(node) = link else {
        return Ok(0);
    };
    if let Some(min) = min {
        if node.value <= *min {
            return Err(format!("value {:?} is not above bound {:?}", node.value, min));
        }
    }
    if let Some(max) = max {
        if node.value >= *max {
            return Err(format!("value {:?} is not below bound {:?}", node.value, max));
        }
    }
    let left = check(&node.left, min, Some(&node.value), count)?;
    let right = check(&node.right, Some(&node.value), max, count)?;
    let expected = 1 + left.max(right);
    if node.height != expected {
        return Err(format!(
            "node {:?} caches height {} but subtree height is {}",
            node.value, node.height, expected
        ));
    }
    let bf = left as isize - right as isize;
    if bf.abs() > 1 {
        return Err(format!("node {:?} has balance factor {}", node.value, bf));
    }
    *count += 1;
    Ok(expected)
}
