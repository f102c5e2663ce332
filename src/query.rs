//! Order-statistics queries over a subtree.
//!
//! All queries walk the tree top-down without recursion.

use std::{borrow::Borrow, cmp::Ordering};

use crate::node::Node;

/// Descend the left-most edge of the subtree rooted at `n`.
pub(crate) fn min<T>(n: &Node<T>) -> &Node<T> {
    let mut ptr = n;
    while let Some(v) = ptr.left() {
        ptr = v;
    }
    ptr
}

/// Descend the right-most edge of the subtree rooted at `n`.
pub(crate) fn max<T>(n: &Node<T>) -> &Node<T> {
    let mut ptr = n;
    while let Some(v) = ptr.right() {
        ptr = v;
    }
    ptr
}

pub(crate) fn get<'a, T, Q>(root: Option<&'a Node<T>>, value: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut ptr = root;
    while let Some(n) = ptr {
        ptr = match value.cmp(n.value().borrow()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n.value()),
            Ordering::Greater => n.right(),
        };
    }
    None
}

/// Return the value immediately following `value` in sorted order.
///
/// Returns [`None`] if `value` is not in the subtree, or is its maximum.
pub(crate) fn successor<'a, T, Q>(root: Option<&'a Node<T>>, value: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    // The nearest ancestor for which the descent went left, which is the
    // successor if the matching node has no right subtree.
    let mut ancestor = None;

    let mut ptr = root;
    while let Some(n) = ptr {
        ptr = match value.cmp(n.value().borrow()) {
            Ordering::Less => {
                ancestor = Some(n);
                n.left()
            }
            Ordering::Equal => {
                return n.right().map(min).or(ancestor).map(Node::value);
            }
            Ordering::Greater => n.right(),
        };
    }

    None
}

/// Return the value immediately preceding `value` in sorted order.
///
/// Returns [`None`] if `value` is not in the subtree, or is its minimum.
pub(crate) fn predecessor<'a, T, Q>(root: Option<&'a Node<T>>, value: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    // The nearest ancestor for which the descent went right.
    let mut ancestor = None;

    let mut ptr = root;
    while let Some(n) = ptr {
        ptr = match value.cmp(n.value().borrow()) {
            Ordering::Less => n.left(),
            Ordering::Equal => {
                return n.left().map(max).or(ancestor).map(Node::value);
            }
            Ordering::Greater => {
                ancestor = Some(n);
                n.right()
            }
        };
    }

    None
}
