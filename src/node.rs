use std::{borrow::Borrow, cmp::Ordering};

use crate::balance::{rebalance_after_insert, rebalance_after_remove, update_height};

/// The outcome of inserting a value into a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// The value already exists in the subtree, which has not been modified.
    Duplicate,

    /// A new node was linked into the subtree, reached by following the
    /// [`Ordering`] of the new value relative to the subtree root.
    ///
    /// [`Ordering::Equal`] indicates the subtree root itself is the new node.
    Inserted(Ordering),
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    pub(crate) height: u8,

    pub(crate) value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Insert `value` into the subtree held in `slot`, allocating a new leaf when
/// an empty slot is reached and rebalancing every ancestor on the way back up.
///
/// Inserting a value that already exists leaves the subtree untouched.
pub(crate) fn insert<T>(slot: &mut Option<Box<Node<T>>>, value: T) -> InsertResult
where
    T: Ord,
{
    let node = match slot {
        Some(v) => v,
        None => {
            *slot = Some(Box::new(Node::new(value)));
            return InsertResult::Inserted(Ordering::Equal);
        }
    };

    let ordering = value.cmp(&node.value);
    let child = match ordering {
        Ordering::Less => &mut node.left,
        Ordering::Equal => return InsertResult::Duplicate,
        Ordering::Greater => &mut node.right,
    };

    // The direction the new value took at the child of "node" selects between
    // the single and double rotation cases, should "node" now be unbalanced.
    let child_path = match insert(child, value) {
        InsertResult::Inserted(v) => v,
        InsertResult::Duplicate => return InsertResult::Duplicate,
    };

    update_height(node);
    rebalance_after_insert(node, child_path);

    InsertResult::Inserted(ordering)
}

/// Remove `value` from the subtree held in `slot`, returning it if it was
/// found.
///
/// Every ancestor of the unlinked node is rebalanced as the recursion unwinds.
pub(crate) fn remove<T, Q>(slot: &mut Option<Box<Node<T>>>, value: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let ordering = value.cmp(slot.as_ref()?.value.borrow());
    if ordering == Ordering::Equal {
        return unlink(slot);
    }

    let node = slot.as_mut()?;
    let removed = match ordering {
        Ordering::Less => remove(&mut node.left, value),
        _ => remove(&mut node.right, value),
    }?;

    rebalance_after_remove(node);
    Some(removed)
}

/// Unlink the node held in `slot` from the tree, returning its value.
///
/// This node may have 0, 1 or 2 child node(s):
///
/// ```text
///                          +----------+
///                          |   slot   |
///                          +----------+
///                                |
///                                v
///                          +----------+
///                     +----|   node   |----+
///                     |    +----------+    |
///                     |                    |
///                     v                    v
///               +-----------+       +------------+
///               | node.left |       | node.right |
///               +-----------+       +------------+
/// ```
///
/// With at most one child, the child (if any) takes the place of the node.
///
/// With two children, the in-order successor (the minimum of the right
/// subtree) is removed from the right subtree and its value overwrites the
/// value of this node, which stays in place.
fn unlink<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let mut node = slot.take()?;

    let right = match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => {
            *slot = child;
            return Some(node.value);
        }
        (Some(left), Some(right)) => {
            node.left = Some(left);
            right
        }
    };

    node.right = Some(right);
    let node = slot.insert(node);

    let successor = remove_min(&mut node.right)?;
    let removed = std::mem::replace(&mut node.value, successor);

    rebalance_after_remove(node);
    Some(removed)
}

/// Remove the node holding the minimum value of the subtree in `slot`, linking
/// its right subtree (if any) in its place and returning the value.
fn remove_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        // Descend left to the leaf.
        let min = remove_min(&mut node.left);
        rebalance_after_remove(node);
        return min;
    }

    // This node is the end of the left edge, and has at most a right child.
    let node = slot.take()?;
    let Node { value, right, .. } = *node;
    *slot = right;

    Some(value)
}
