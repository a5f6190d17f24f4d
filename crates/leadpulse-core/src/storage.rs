//! Persisted local cache using redb.
//!
//! Mirrors the browser `localStorage` the dashboard was designed around: a
//! single string-keyed table holding JSON values. The active campaign lives
//! under [`ACTIVE_CAMPAIGN_KEY`].
//!
//! The cache is best-effort. It exists so a restarted app can rebuild the
//! in-progress view, and carries no ownership of its own: the controller
//! overwrites it wholesale on every mutation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::{CampaignError, CampaignResult};
use crate::types::{CampaignId, CampaignSnapshot, CampaignStatus, CurrentLead};

/// Key under which the active campaign is cached
pub const ACTIVE_CAMPAIGN_KEY: &str = "activeCampaign";

/// Database file name inside a data directory
pub const DB_FILE_NAME: &str = "leadpulse.redb";

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("local_storage");

/// JSON record cached under [`ACTIVE_CAMPAIGN_KEY`].
///
/// The first eight fields are the documented cache shape. The trailing
/// optional fields let a restored controller rebuild the full snapshot;
/// records written without them still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCampaign {
    pub campaign_id: String,
    pub campaign_name: String,
    pub status: CampaignStatus,
    pub progress: u32,
    pub success_count: u32,
    pub failed_count: u32,
    pub total_leads: u32,
    /// Unix millis of the write
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lead: Option<CurrentLead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl PersistedCampaign {
    /// Capture a snapshot, stamping the write time.
    pub fn from_snapshot(snapshot: &CampaignSnapshot, written_at: DateTime<Utc>) -> Self {
        Self {
            campaign_id: snapshot.campaign_id.to_string(),
            campaign_name: snapshot.campaign_name.clone(),
            status: snapshot.status,
            progress: snapshot.progress,
            success_count: snapshot.success_count,
            failed_count: snapshot.failed_count,
            total_leads: snapshot.total_leads,
            timestamp: written_at.timestamp_millis(),
            start_time: Some(snapshot.start_time.timestamp_millis()),
            current_lead: snapshot.current_lead.clone(),
            duration_ms: snapshot.duration.map(|d| d.as_millis() as u64),
        }
    }

    /// Rebuild a snapshot from the cached record.
    ///
    /// Falls back to the write timestamp when no start time was cached.
    pub fn into_snapshot(self) -> CampaignResult<CampaignSnapshot> {
        if self.total_leads == 0 {
            return Err(CampaignError::InvalidSnapshot(
                "cached campaign has no leads".to_string(),
            ));
        }
        if self.campaign_name.trim().is_empty() {
            return Err(CampaignError::InvalidSnapshot(
                "cached campaign has an empty name".to_string(),
            ));
        }

        let start_millis = self.start_time.unwrap_or(self.timestamp);
        let start_time = Utc
            .timestamp_millis_opt(start_millis)
            .single()
            .ok_or_else(|| {
                CampaignError::InvalidSnapshot(format!("bad start time {}", start_millis))
            })?;

        let mut snapshot = CampaignSnapshot {
            campaign_id: CampaignId::from_string(self.campaign_id),
            campaign_name: self.campaign_name,
            status: self.status,
            progress: self.progress,
            success_count: self.success_count,
            failed_count: self.failed_count,
            total_leads: self.total_leads,
            current_lead: self.current_lead,
            start_time,
            duration: self.duration_ms.map(Duration::from_millis),
        };
        snapshot.normalize();
        Ok(snapshot)
    }
}

/// Storage layer using redb for the local cache
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the local storage table
    pub fn new(path: impl AsRef<Path>) -> CampaignResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the cache database inside a data directory
    pub fn open_dir(data_dir: impl AsRef<Path>) -> CampaignResult<Self> {
        Self::new(data_dir.as_ref().join(DB_FILE_NAME))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Raw key/value access
    // ═══════════════════════════════════════════════════════════════════════

    /// Store a raw value, replacing any previous value for the key.
    pub fn set_item(&self, key: &str, value: &[u8]) -> CampaignResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a raw value. Returns `None` if the key is absent.
    pub fn get_item(&self, key: &str) -> CampaignResult<Option<Vec<u8>>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_vec()))
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove_item(&self, key: &str) -> CampaignResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Active campaign
    // ═══════════════════════════════════════════════════════════════════════

    /// Overwrite the cached active campaign.
    pub fn save_active_campaign(&self, record: &PersistedCampaign) -> CampaignResult<()> {
        let data = serde_json::to_vec(record)?;
        self.set_item(ACTIVE_CAMPAIGN_KEY, &data)
    }

    /// Load the cached active campaign, if any.
    pub fn load_active_campaign(&self) -> CampaignResult<Option<PersistedCampaign>> {
        match self.get_item(ACTIVE_CAMPAIGN_KEY)? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    /// Delete the cached active campaign.
    pub fn delete_active_campaign(&self) -> CampaignResult<()> {
        self.remove_item(ACTIVE_CAMPAIGN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CampaignDraft;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    fn sample_record() -> PersistedCampaign {
        let mut snapshot =
            CampaignSnapshot::from_draft(CampaignDraft::new("Spring Promo", 20), Utc::now());
        snapshot.progress = 45;
        snapshot.success_count = 8;
        snapshot.failed_count = 1;
        snapshot.current_lead = Some(CurrentLead::new("Lead 9", "+1 555 0009"));
        PersistedCampaign::from_snapshot(&snapshot, Utc::now())
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("dir").join("test.redb");

        let _storage = Storage::new(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_open_dir_uses_default_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let _storage = Storage::open_dir(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join(DB_FILE_NAME).exists());
    }

    #[test]
    fn test_raw_items() {
        let (storage, _temp) = create_test_storage();

        assert!(storage.get_item("theme").unwrap().is_none());
        storage.set_item("theme", b"dark").unwrap();
        assert_eq!(storage.get_item("theme").unwrap().unwrap(), b"dark");

        storage.remove_item("theme").unwrap();
        assert!(storage.get_item("theme").unwrap().is_none());

        // Removing twice is fine
        storage.remove_item("theme").unwrap();
    }

    #[test]
    fn test_save_and_load_active_campaign() {
        let (storage, _temp) = create_test_storage();
        let record = sample_record();

        storage.save_active_campaign(&record).unwrap();
        let loaded = storage.load_active_campaign().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_delete_active_campaign() {
        let (storage, _temp) = create_test_storage();
        storage.save_active_campaign(&sample_record()).unwrap();

        storage.delete_active_campaign().unwrap();
        assert!(storage.load_active_campaign().unwrap().is_none());
    }

    #[test]
    fn test_active_campaign_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let record = sample_record();

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.save_active_campaign(&record).unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.load_active_campaign().unwrap(), Some(record));
        }
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_record()).unwrap();
        for key in [
            "campaignId",
            "campaignName",
            "status",
            "progress",
            "successCount",
            "failedCount",
            "totalLeads",
            "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["status"], "sending");
    }

    #[test]
    fn test_minimal_record_loads() {
        let json = r#"{
            "campaignId": "c-1",
            "campaignName": "Legacy",
            "status": "sending",
            "progress": 30,
            "successCount": 3,
            "failedCount": 0,
            "totalLeads": 10,
            "timestamp": 1700000000000
        }"#;
        let record: PersistedCampaign = serde_json::from_str(json).unwrap();
        let snapshot = record.into_snapshot().unwrap();

        assert_eq!(snapshot.campaign_id.as_str(), "c-1");
        assert_eq!(snapshot.start_time.timestamp_millis(), 1_700_000_000_000);
        assert!(snapshot.current_lead.is_none());
    }

    #[test]
    fn test_record_snapshot_conversion_keeps_fields() {
        let record = sample_record();
        let snapshot = record.clone().into_snapshot().unwrap();

        assert_eq!(snapshot.progress, 45);
        assert_eq!(snapshot.success_count, 8);
        assert_eq!(snapshot.failed_count, 1);
        assert_eq!(snapshot.current_lead.as_ref().unwrap().name, "Lead 9");
        assert_eq!(Some(snapshot.start_time.timestamp_millis()), record.start_time);
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut record = sample_record();
        record.total_leads = 0;
        assert!(matches!(
            record.into_snapshot(),
            Err(CampaignError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_corrupt_record_is_a_serialization_error() {
        let (storage, _temp) = create_test_storage();
        storage.set_item(ACTIVE_CAMPAIGN_KEY, b"not json").unwrap();

        assert!(matches!(
            storage.load_active_campaign(),
            Err(CampaignError::Serialization(_))
        ));
    }
}
