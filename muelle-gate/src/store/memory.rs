//! In-memory store for tests and demos

use async_trait::async_trait;
use shared::{AppResult, Workbook};
use tokio::sync::RwLock;

use super::DataStore;

/// Workbook held behind an `RwLock`; snapshots are cloned out
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Workbook>,
}

impl MemoryStore {
    pub fn new(workbook: Workbook) -> Self {
        Self {
            inner: RwLock::new(workbook),
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn load(&self) -> AppResult<Workbook> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, workbook: &Workbook) -> AppResult<()> {
        *self.inner.write().await = workbook.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ManagementRecord;

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = MemoryStore::default();

        let mut workbook = store.load().await.unwrap();
        assert!(workbook.management.is_empty());

        workbook.management.push(ManagementRecord {
            order_id: "PO100".to_string(),
            supplier_name: "Transportes Vega".to_string(),
            package_count: 12,
            arrival_time: None,
            service_start_time: None,
            service_end_time: None,
            wait_minutes: None,
            service_minutes: None,
            total_minutes: None,
            delay_minutes: None,
        });
        store.save(&workbook).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.management.len(), 1);
        assert_eq!(reloaded.management[0].order_id, "PO100");
    }
}
