// Public modules
pub mod error;
pub mod generator;
pub mod manifest;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use manifest::{transform, Change, Scope, TransformOptions, TransformOutput};
