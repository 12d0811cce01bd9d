pub mod dispatcher;
pub mod error;
pub mod export;
pub mod frame;
pub mod palette;
pub mod params;

// Re-export primary types for convenience.
pub use dispatcher::FrameDispatcher;
pub use error::EngineError;
pub use export::{export_png, ExportSettings};
pub use frame::FrameBuffer;
pub use palette::PaletteKind;
pub use params::ViewParameters;

/// Convenience result type for the engine crate.
pub type Result<T> = std::result::Result<T, EngineError>;
