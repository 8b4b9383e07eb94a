use thiserror::Error;

/// Reasons for a path to be rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PathError {
    /// The number of points does not match the number of points consumed by the verbs.
    #[error("path verbs consume {expected} points but the path holds {found}")]
    VertexCountMismatch { expected: usize, found: usize },
}
