//! Classic linear-container exercises.
//!
//! Three standalone generic containers, each with a small bounds-checked
//! API and a shared [`ContainerError`] taxonomy:
//!
//! - [`ArrayList`] — order-preserving sequence, optionally bounded.
//! - [`LinkedQueue`] — FIFO queue over singly linked nodes.
//! - [`CircularList`] — circular singly linked list.
//!
//! The linked containers store their links as `Option<u32>` indices into an
//! owned arena rather than pointers; freed slots are recycled through a
//! free list.

pub mod array_list;
pub mod circular_list;
pub mod error;
pub mod linked_queue;

pub use array_list::ArrayList;
pub use circular_list::CircularList;
pub use error::ContainerError;
pub use linked_queue::LinkedQueue;
