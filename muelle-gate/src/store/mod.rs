//! Store collaborator
//!
//! The engine never talks to storage; it computes over a [`Workbook`]
//! snapshot that implementations of [`DataStore`] load and save wholesale.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::{AppResult, Workbook};

/// Snapshot store for the workbook collections.
///
/// `save` replaces the whole workbook; there are no partial writes at this
/// boundary. `load` returns a consistent snapshot that may lag writes from
/// other sessions by several minutes, so a read must never be assumed to
/// reflect the latest write.
///
/// # Concurrency contract
///
/// Nothing here locks. Two sessions running a read-modify-write cycle
/// against the same workbook race last-write-wins; callers that cannot
/// accept that MUST serialize their writers externally (a single-writer
/// queue, or a lock keyed by the business day).
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Load a consistent snapshot of all three collections
    async fn load(&self) -> AppResult<Workbook>;

    /// Replace the stored workbook with this snapshot
    async fn save(&self, workbook: &Workbook) -> AppResult<()>;
}
