//! Reasons the effect can fail to mount.
//!
//! None of these reach the page: the mount path logs them and leaves the
//! background off.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// Absent or not a `<canvas>`.
    #[error("canvas #{0} not found")]
    MissingCanvas(String),

    #[error("2D context unavailable")]
    NoContext,

    /// A host API call failed while wiring listeners.
    #[error("host call failed: {0}")]
    Host(String),
}

pub type MountResult<T> = Result<T, MountError>;
