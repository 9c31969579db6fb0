//! JSON file store
//!
//! One JSON document per workbook. Saves write a sibling temp file and
//! rename it over the target, so a crashed save never leaves a half-written
//! workbook behind and `save` stays a full replace.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{AppError, AppResult, Workbook};

use super::DataStore;

/// Workbook store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file loads as an empty workbook; the first save creates it
    fn read_workbook(path: &Path) -> AppResult<Workbook> {
        if !path.exists() {
            return Ok(Workbook::default());
        }
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_workbook(path: &Path, workbook: &Workbook) -> AppResult<()> {
        let tmp = path.with_extension("tmp");
        let bytes = serde_json::to_vec_pretty(workbook)?;
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    async fn load(&self) -> AppResult<Workbook> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::read_workbook(&path))
            .await
            .map_err(|e| AppError::store(e.to_string()))?
    }

    async fn save(&self, workbook: &Workbook) -> AppResult<()> {
        let path = self.path.clone();
        let workbook = workbook.clone();
        tokio::task::spawn_blocking(move || Self::write_workbook(&path, &workbook))
            .await
            .map_err(|e| AppError::store(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::Reservation;

    #[tokio::test]
    async fn test_missing_file_loads_empty_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("gate.json"));

        let workbook = store.load().await.unwrap();
        assert!(workbook.credentials.is_empty());
        assert!(workbook.reservations.is_empty());
        assert!(workbook.management.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("gate.json"));

        let workbook = Workbook {
            credentials: vec![serde_json::json!({"Usuario": "vega"})],
            reservations: vec![Reservation {
                order_id: "PO100".to_string(),
                supplier_name: "Transportes Vega".to_string(),
                package_count: 12,
                reservation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                booked_time_range: "09:00-09:30".to_string(),
            }],
            management: vec![],
        };
        store.save(&workbook).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.reservations, workbook.reservations);
        assert_eq!(reloaded.credentials, workbook.credentials);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("gate.json"));

        let mut workbook = Workbook::default();
        workbook.credentials.push(serde_json::json!({"Usuario": "vega"}));
        store.save(&workbook).await.unwrap();

        store.save(&Workbook::default()).await.unwrap();
        let reloaded = store.load().await.unwrap();
        assert!(reloaded.credentials.is_empty());

        // No leftover temp file after a successful save
        assert!(!dir.path().join("gate.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gate.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let store = JsonFileStore::new(path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
