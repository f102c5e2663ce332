use std::{borrow::Borrow, fmt::Display};

use crate::{
    dot::Dot,
    error::Error,
    node::{self, InsertResult, Node},
    query,
    traverse::{self, Order},
};

/// An ordered set of unique values, stored in a self-balancing AVL tree.
///
/// Point operations ([`insert`], [`remove`], [`contains`], [`successor`], etc)
/// complete in `O(log n)` time, traversals in `O(n)`.
///
/// Values are compared using [`Ord`] alone; two values are the same value when
/// they compare as [`Ordering::Equal`].
///
/// [`insert`]: AvlTree::insert
/// [`remove`]: AvlTree::remove
/// [`contains`]: AvlTree::contains
/// [`successor`]: AvlTree::successor
/// [`Ordering::Equal`]: std::cmp::Ordering::Equal
#[derive(Debug)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf, or 0
    /// for an empty tree.
    pub fn height(&self) -> usize {
        self.root.as_ref().map(|v| v.height() as usize).unwrap_or_default()
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Move the contents of this tree into the returned tree, leaving `self`
    /// empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Return the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the tree holds no values.
    pub fn min(&self) -> Result<&T, Error> {
        self.root
            .as_deref()
            .map(|v| query::min(v).value())
            .ok_or(Error::Empty { op: "min" })
    }

    /// Return the largest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the tree holds no values.
    pub fn max(&self) -> Result<&T, Error> {
        self.root
            .as_deref()
            .map(|v| query::max(v).value())
            .ok_or(Error::Empty { op: "max" })
    }

    /// Call `f` with each value in the tree, visited in the specified `order`.
    pub fn traverse<F>(&self, order: Order, mut f: F)
    where
        F: FnMut(&T),
    {
        traverse::traverse(self.root.as_deref(), order, &mut f);
    }

    /// Call `f` with each value in ascending order.
    pub fn traverse_in_order<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::InOrder, f)
    }

    /// Call `f` with each value, visiting a node before its left and then right
    /// subtrees.
    pub fn traverse_pre_order<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::PreOrder, f)
    }

    /// Call `f` with each value, visiting a node after its left and then right
    /// subtrees.
    pub fn traverse_post_order<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::PostOrder, f)
    }

    /// Call `f` with each value, breadth first from the root, visiting each
    /// level from left to right.
    pub fn traverse_level_order<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::LevelOrder, f)
    }

    /// Render the values of the tree in each [`Order`], one labelled line per
    /// order.
    ///
    /// ```
    /// # use ordavl::AvlTree;
    /// let t = AvlTree::from([2, 1, 3]);
    /// assert_eq!(
    ///     t.dump_orders(),
    ///     "inorder: 1 2 3\npreorder: 2 1 3\npostorder: 1 3 2\nlevelorder: 2 1 3\n"
    /// );
    /// ```
    pub fn dump_orders(&self) -> String
    where
        T: Display,
    {
        let mut buf = String::new();
        for order in Order::ALL {
            buf.push_str(order.name());
            buf.push(':');
            self.traverse(order, |v| {
                buf.push(' ');
                buf.push_str(&v.to_string());
            });
            buf.push('\n');
        }
        buf
    }

    /// Render the node graph of the tree in the Graphviz DOT language.
    pub fn to_dot(&self) -> String
    where
        T: Display,
    {
        Dot(self.root.as_deref()).to_string()
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree, rebalancing as necessary.
    ///
    /// Returns true if the value was inserted, or false (leaving the tree
    /// unchanged) if an equal value already exists.
    pub fn insert(&mut self, value: T) -> bool {
        match node::insert(&mut self.root, value) {
            InsertResult::Inserted(_) => {
                self.len += 1;
                true
            }
            InsertResult::Duplicate => false,
        }
    }

    /// Remove `value` from the tree, returning it if it was present.
    ///
    /// Removing a value that is not in the tree is a no-op.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = node::remove(&mut self.root, value)?;
        self.len -= 1;
        Some(removed)
    }

    /// Returns true if `value` is in the tree.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Return a reference to the value in the tree equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        query::get(self.root.as_deref(), value)
    }

    /// Return the value immediately after `value` in ascending order.
    ///
    /// Returns [`None`] if `value` is not in the tree, or if it is the largest
    /// value.
    pub fn successor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        query::successor(self.root.as_deref(), value)
    }

    /// Return the value immediately before `value` in ascending order.
    ///
    /// Returns [`None`] if `value` is not in the tree, or if it is the smallest
    /// value.
    pub fn predecessor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        query::predecessor(self.root.as_deref(), value)
    }

    /// Return the value immediately after `value` in ascending order, or
    /// `value` itself if there is no such value.
    ///
    /// A returned `value` does not distinguish between `value` being the
    /// largest value and `value` not being in the tree at all - use
    /// [`AvlTree::successor()`] when the difference matters.
    ///
    /// ```
    /// # use ordavl::AvlTree;
    /// let t = AvlTree::from([1, 3, 4, 5, 7, 8, 9]);
    ///
    /// assert_eq!(*t.successor_of(&5), 7);
    /// assert_eq!(*t.successor_of(&9), 9);
    /// assert_eq!(*t.successor_of(&6), 6);
    /// ```
    pub fn successor_of<'a>(&'a self, value: &'a T) -> &'a T {
        self.successor(value).unwrap_or(value)
    }

    /// Return the value immediately before `value` in ascending order, or
    /// `value` itself if there is no such value.
    ///
    /// See [`AvlTree::successor_of()`] for the ambiguity of the returned value.
    pub fn predecessor_of<'a>(&'a self, value: &'a T) -> &'a T {
        self.predecessor(value).unwrap_or(value)
    }
}

/// Cloning replays the insertion of every value (in level order) into a new
/// tree, producing an independent node graph.
///
/// The clone holds the same values but is not guaranteed to have the same
/// shape as the original.
impl<T> Clone for AvlTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        let mut t = Self::new();
        self.traverse_level_order(|v| {
            t.insert(v.clone());
        });
        t
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

impl<T, const N: usize> From<[T; N]> for AvlTree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
