//! An ordered set of unique values backed by a self-balancing [AVL tree].
//!
//! [`AvlTree`] keeps the height difference between the two subtrees of every
//! node at most 1, rebalancing with rotations after each insertion and
//! removal, bounding point operations to `O(log n)` time.
//!
//! ```
//! use ordavl::{AvlTree, Order};
//!
//! let mut t = AvlTree::from([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert!(t.contains(&4));
//! assert_eq!(t.successor(&5), Some(&7));
//! assert_eq!(t.predecessor(&5), Some(&4));
//!
//! // Duplicates are ignored.
//! assert!(!t.insert(3));
//! assert_eq!(t.len(), 7);
//!
//! assert_eq!(t.remove(&5), Some(5));
//!
//! let mut sorted = vec![];
//! t.traverse(Order::InOrder, |v| sorted.push(*v));
//! assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
//!
//! assert_eq!(t.min(), Ok(&1));
//! assert_eq!(t.max(), Ok(&9));
//! ```
//!
//! Traversals are callback driven, visiting values in one of the four
//! [`Order`] variants.
//!
//! The tree performs no internal synchronisation - sharing a tree between
//! threads requires the caller wrap it in a lock.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    clippy::todo,
    clippy::dbg_macro,
    unused_crate_dependencies
)]

// Only used in benchmarks.
#[cfg(test)]
use criterion as _;

mod balance;
mod dot;
mod error;
mod node;
mod query;
mod traverse;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use traverse::Order;
pub use tree::*;
