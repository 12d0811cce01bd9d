use thiserror::Error;

/// Errors originating from the frame pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The parallel compute backend could not be brought up. Fatal at
    /// construction time; the caller must not proceed to render.
    #[error("failed to initialize parallel backend: {0}")]
    BackendInit(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Core(#[from] mandelview_core::CoreError),

    #[error("png encoding failed: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
