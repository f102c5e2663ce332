use std::fmt::Debug;

use proptest::prelude::*;

use crate::{balance::balance, node::Node};

/// The (exclusive) upper bound of generated values, and the maximum number of
/// generated values in a collection.
pub(crate) const N_VALUES: usize = 200;

/// An operation to apply to a tree under test.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(usize),
    Remove(usize),
    Contains(usize),
    Successor(usize),
    Predecessor(usize),
    MinMax,
    CloneTree,
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    // A small value domain encourages multiple operations to act on the same
    // value.
    let value = || 0..20_usize;

    prop_oneof![
        value().prop_map(Op::Insert),
        value().prop_map(Op::Remove),
        value().prop_map(Op::Contains),
        value().prop_map(Op::Successor),
        value().prop_map(Op::Predecessor),
        Just(Op::MinMax),
        Just(Op::CloneTree),
    ]
}

/// Assert the BST and AVL properties of every node in the subtree rooted at
/// `root`, returning the number of nodes visited.
pub(crate) fn validate_subtree<T>(root: &Node<T>) -> usize
where
    T: Ord + Debug,
{
    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a value strictly less
        // than this node, and so does the whole left subtree (the right-most
        // node of the left subtree is its largest).
        if let Some(l) = n.left() {
            assert!(crate::query::max(l).value() < n.value());
        }

        // Invariant 2: the right subtree always contains values strictly
        // greater than this node.
        if let Some(r) = n.right() {
            assert!(crate::query::min(r).value() > n.value());
        }

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with value {:?} to have height {}, has {}",
            n.value(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance(n).abs();
        assert!(
            balance <= 1,
            "balance={balance}, node={:?}",
            n.value()
        );
    }

    n_nodes
}
