use crate::types::{NormalizedReport, ReportListing, StoredReport};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persists a sanitized report under a fresh identifier and upload timestamp.
    async fn insert(&self, report: NormalizedReport) -> Result<StoredReport, String>;
    async fn get(&self, id: &str) -> Result<Option<StoredReport>, String>;
    /// Listing projections, newest upload first.
    async fn list(&self) -> Result<Vec<ReportListing>, String>;
    async fn delete(&self, id: &str) -> Result<bool, String>;
}

#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<StoredReport>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert(&self, report: NormalizedReport) -> Result<StoredReport, String> {
        let stored = StoredReport {
            id: Uuid::new_v4().to_string(),
            uploaded_at: Utc::now(),
            report,
        };
        let mut reports = self.reports.write().map_err(|e| e.to_string())?;
        reports.push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredReport>, String> {
        let reports = self.reports.read().map_err(|e| e.to_string())?;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<ReportListing>, String> {
        let reports = self.reports.read().map_err(|e| e.to_string())?;
        // Reverse first so equal timestamps keep newest-inserted first under the stable sort.
        let mut listings: Vec<ReportListing> = reports.iter().rev().map(ReportListing::from).collect();
        listings.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(listings)
    }

    async fn delete(&self, id: &str) -> Result<bool, String> {
        let mut reports = self.reports.write().map_err(|e| e.to_string())?;
        let before = reports.len();
        reports.retain(|r| r.id != id);
        Ok(reports.len() != before)
    }
}
