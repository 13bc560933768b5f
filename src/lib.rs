/// Macro for status logging to stdout, gated on the `--quiet` flag.
///
/// Usage:
/// ```ignore
/// log_status!(quiet, "Saved backup: {}", backup.display());
/// log_status!(quiet, "Wrote: {}", path.display());
/// ```
#[macro_export]
macro_rules! log_status {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            println!($($arg)*);
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `manifest_uuid::transform` instead of `manifest_uuid::core::manifest::transform`
pub use crate::core::*;
