use std::cmp::Ordering;

use crate::node::Node;

pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Recompute the height of `n` from its (already correct) children.
pub(crate) fn update_height<T>(n: &mut Node<T>) {
    n.height = height(n.left()).max(height(n.right())) + 1;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The slot `x` holds the new subtree root `P` on return. A subtree without a
/// right child cannot be rotated and is left unchanged.
pub(crate) fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The slot `y` holds the new subtree root `P` on return. A subtree without a
/// left child cannot be rotated and is left unchanged.
pub(crate) fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Restore the AVL property of `v` after a value was inserted below it.
///
/// `child_path` is the direction the inserted value took at the child of `v`
/// it was inserted under, equivalent to comparing the inserted value against
/// that child's value.
pub(crate) fn rebalance_after_insert<T>(v: &mut Box<Node<T>>, child_path: Ordering) {
    match (balance(v), child_path) {
        // Left-heavy
        (2, Ordering::Less) => {
            rotate_right(v);
        }
        (2, _) => {
            if let Some(l) = v.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        // Right-heavy
        (-2, Ordering::Greater) => {
            rotate_left(v);
        }
        (-2, _) => {
            if let Some(r) = v.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }
        (-1..=1, _) => { /* The tree is well balanced */ }
        _ => unreachable!(),
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(v).abs() <= 1);
}

/// Restore the AVL property of `v` after a value was removed below it.
///
/// No single inserted value exists to select the rotation case, so the balance
/// factor of the heavy child is used instead.
pub(crate) fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(l) = v.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(r) = v.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
