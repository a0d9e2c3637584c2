//! Crate-wide error type and result alias.

use derive_more::{Display, Error, From};

/// Errors surfaced by this crate.
///
/// Rendering itself has no failure modes: unknown characters and out-of-range
/// coordinates are silent no-ops. Only construction-time invariant violations
/// and task plumbing propagate as errors.
#[derive(Debug, Display, Error, From)]
#[non_exhaustive]
pub enum Error {
    /// A canvas was constructed with a zero width or height.
    #[display("canvas width and height must be positive")]
    ZeroCanvasDimension,

    /// An embassy task could not be spawned.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),
}

/// Result alias using this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
