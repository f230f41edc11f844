use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(alias = "Credit Card")]
    CreditCard,
    Loan,
    Mortgage,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Closed,
    Delinquent,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicDetails {
    pub name: String,
    pub mobile: String,
    pub pan: String,
    pub credit_score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSummary {
    pub total_accounts: u32,
    pub active_accounts: u32,
    pub closed_accounts: u32,
    pub current_balance: f64,
    pub secured_amount: f64,
    pub unsecured_amount: f64,
    pub enquiries_last_7_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde(rename = "type")]
    pub type_: AccountType,
    pub provider: String,
    pub addresses: Vec<String>,
    pub account_number: String,
    pub amount_overdue: f64,
    pub current_balance: f64,
    pub status: AccountStatus,
}

impl Account {
    /// An account with no number, no provider and zero amounts carries no information.
    pub fn has_identifying_signal(&self) -> bool {
        !self.account_number.is_empty()
            || !self.provider.is_empty()
            || self.current_balance != 0.0
            || self.amount_overdue != 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReport {
    pub file_name: String,
    pub basic_details: BasicDetails,
    pub summary: ReportSummary,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub id: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: NormalizedReport,
}

/// Projection returned by report listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListing {
    pub id: String,
    pub file_name: String,
    pub basic_details: BasicDetails,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&StoredReport> for ReportListing {
    fn from(stored: &StoredReport) -> Self {
        Self {
            id: stored.id.clone(),
            file_name: stored.report.file_name.clone(),
            basic_details: stored.report.basic_details.clone(),
            uploaded_at: stored.uploaded_at,
        }
    }
}
