//! Error types.
//!
//! The animation and transform core is infallible by design — degenerate
//! inputs clamp or fall back instead of failing. The one fallible surface
//! is structural mutation of the scene graph, covered by [`SceneError`].

use thiserror::Error;

/// Structural scene-graph misuse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// A node key did not resolve; the node was removed or never inserted.
    #[error("scene node not found")]
    NodeNotFound,

    /// Attempted to attach a node to itself.
    #[error("cannot attach a node to itself")]
    SelfAttach,
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
