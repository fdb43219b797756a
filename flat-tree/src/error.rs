use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from flat-tree address computations.
///
/// The addressing space is total for almost every operation; only the
/// full-root decomposition has a checked precondition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An internal-node index was passed where a leaf boundary is required.
    #[error(
        "invalid argument: index {index} is odd; only leaf-level boundaries \
         (even indices) have a full-root decomposition"
    )]
    NotLeafBoundary {
        /// The offending flat index.
        index: u64,
    },
}
