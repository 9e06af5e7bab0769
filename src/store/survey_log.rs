//! Flat-file interaction log.
//!
//! Every processed survey is appended to a JSON array on disk. The file is
//! read-modify-rewritten under an in-process mutex; this service is the only
//! writer.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::models::SurveyRecord;

/// Persistence seam for recorded survey interactions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Appends one record to the log
    async fn append(&self, record: &SurveyRecord) -> AppResult<()>;
}

/// `SurveyStore` backed by a flat JSON-array file
pub struct JsonSurveyStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonSurveyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl SurveyStore for JsonSurveyStore {
    async fn append(&self, record: &SurveyRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut records: Vec<SurveyRecord> = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        records.push(record.clone());
        let serialized = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(&self.path, serialized).await?;

        tracing::debug!(
            path = %self.path.display(),
            total = records.len(),
            "Survey record appended"
        );
        Ok(())
    }
}
