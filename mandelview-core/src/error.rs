use thiserror::Error;

/// Errors originating from the core mapping and iteration types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid iteration bound: {0} (must be >= 1)")]
    InvalidIterationBound(u32),

    #[error("invalid zoom: {0} (must be > 0.0 and finite)")]
    InvalidZoom(f64),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}
