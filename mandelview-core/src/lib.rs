pub mod complex;
pub mod error;
pub mod escape;
pub mod history;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{evaluate, EscapeTime, ESCAPE_RADIUS_SQ};
pub use history::{HistoryEntry, ViewHistory, MAX_HISTORY};
pub use viewport::{Viewport, BASE_PLANE_WIDTH, PRECISION_LIMIT_STEP};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
