use thiserror::Error;

/// Error type for discovery operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The shared device worker thread is no longer running.
    #[error("device worker is gone")]
    WorkerGone,
    /// An I/O failure outside the per-device skip paths.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;
