//! Self-balancing binary search tree (AVL) with order traversals.
//!
//! [`AvlTree`] keeps a strict binary-search-tree ordering under the AVL
//! height-balance invariant: after every insert or remove, no node's
//! subtrees differ in height by more than one, restored by at most one
//! single or double rotation per ancestor on the recursion unwind.
//!
//! Traversal output is written into an
//! [`ArrayList`](structures_containers::ArrayList) from the companion
//! containers crate, pre-sized to the number of stored values.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tree`] | [`AvlTree`] and [`TreeError`] |
//! | [`print`] | text rendering of the tree shape |

mod node;
pub mod print;
pub mod tree;

pub use print::print_tree;
pub use tree::{AvlTree, TreeError};
