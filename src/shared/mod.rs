pub mod errors;

// Re-exports for convenience
pub use errors::{AppError, AppResult};
