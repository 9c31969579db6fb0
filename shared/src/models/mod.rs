//! Data models
//!
//! Field names follow the workbook columns (serde rename), so a serialized
//! row is column-compatible with the management sheets maintained outside
//! this system.

pub mod record;
pub mod reservation;
pub mod workbook;

// Re-exports
pub use record::*;
pub use reservation::*;
pub use workbook::*;
