use std::collections::VecDeque;

use crate::node::Node;

/// The order in which a traversal visits the values of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, value, right subtree (ascending sorted order).
    InOrder,
    /// Value, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, value.
    PostOrder,
    /// Breadth first, visiting each level left to right.
    LevelOrder,
}

impl Order {
    /// All traversal orders.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Order::InOrder => "inorder",
            Order::PreOrder => "preorder",
            Order::PostOrder => "postorder",
            Order::LevelOrder => "levelorder",
        }
    }
}

/// Visit every value in the subtree rooted at `n` in the given `order`.
pub(crate) fn traverse<T, F>(n: Option<&Node<T>>, order: Order, f: &mut F)
where
    F: FnMut(&T),
{
    match order {
        Order::InOrder => in_order(n, f),
        Order::PreOrder => pre_order(n, f),
        Order::PostOrder => post_order(n, f),
        Order::LevelOrder => level_order(n, f),
    }
}

// The depth-first traversals recurse, which is bounded by the O(log n) height
// of the tree.

fn in_order<T, F>(n: Option<&Node<T>>, f: &mut F)
where
    F: FnMut(&T),
{
    let Some(n) = n else { return };
    in_order(n.left(), f);
    f(n.value());
    in_order(n.right(), f);
}

fn pre_order<T, F>(n: Option<&Node<T>>, f: &mut F)
where
    F: FnMut(&T),
{
    let Some(n) = n else { return };
    f(n.value());
    pre_order(n.left(), f);
    pre_order(n.right(), f);
}

fn post_order<T, F>(n: Option<&Node<T>>, f: &mut F)
where
    F: FnMut(&T),
{
    let Some(n) = n else { return };
    post_order(n.left(), f);
    post_order(n.right(), f);
    f(n.value());
}

fn level_order<T, F>(n: Option<&Node<T>>, f: &mut F)
where
    F: FnMut(&T),
{
    let mut queue = n.into_iter().collect::<VecDeque<_>>();

    while let Some(v) = queue.pop_front() {
        f(v.value());
        queue.extend(v.left().into_iter().chain(v.right()));
    }
}
