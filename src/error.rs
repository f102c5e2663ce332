use thiserror::Error;

/// Errors returned by [`AvlTree`](crate::AvlTree) queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree holds no values, so the requested extreme value does not
    /// exist.
    #[error("tree is empty, cannot read the {op} value")]
    Empty {
        /// The query that was attempted ("min" or "max").
        op: &'static str,
    },
}
