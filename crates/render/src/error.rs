use thiserror::Error;

/// Errors reported by renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// `begin` was called while a session is already in progress.
    #[error("begin called twice without end")]
    AlreadyBegun,
    /// `end` was called without a matching `begin`.
    #[error("end called before begin")]
    NotBegun,
    /// The requested surface size is empty or too large.
    #[error("invalid surface size ({width}x{height})")]
    InvalidSurface { width: u32, height: u32 },
}
