//! Shared types for the Muelle workspace
//!
//! Domain models carrying their workbook boundary field names, the unified
//! error taxonomy, and the serde helpers for the workbook time formats.

pub mod error;
pub mod models;
pub mod time;

// Re-exports
pub use error::{AppError, AppResult};
pub use models::{ManagementRecord, OrderStatus, Reservation, Workbook};
pub use serde::{Deserialize, Serialize};
