use crate::error::{IngestError, Result};
use crate::types::{Account, BasicDetails, NormalizedReport, ReportSummary};
use regex::Regex;
use std::sync::LazyLock;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());
static PAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{5}\d{4}[A-Z]$").unwrap());

pub const MIN_CREDIT_SCORE: f64 = 300.0;
pub const MAX_CREDIT_SCORE: f64 = 900.0;

pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value)
}

pub fn is_valid_pan(value: &str) -> bool {
    PAN_RE.is_match(value)
}

pub fn score_in_range(score: f64) -> bool {
    (MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&score)
}

fn floor_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn sanitize_basic(basic: BasicDetails) -> BasicDetails {
    let mobile = basic.mobile.trim().to_string();
    let pan = basic.pan.trim().to_ascii_uppercase();
    BasicDetails {
        name: basic.name.trim().to_string(),
        mobile: if is_valid_mobile(&mobile) { mobile } else { String::new() },
        pan: if is_valid_pan(&pan) { pan } else { String::new() },
        credit_score: basic
            .credit_score
            .filter(|score| score_in_range(f64::from(*score))),
    }
}

fn sanitize_summary(summary: ReportSummary) -> ReportSummary {
    ReportSummary {
        current_balance: floor_amount(summary.current_balance),
        secured_amount: floor_amount(summary.secured_amount),
        unsecured_amount: floor_amount(summary.unsecured_amount),
        ..summary
    }
}

fn sanitize_account(account: Account) -> Account {
    Account {
        provider: account.provider.trim().to_string(),
        account_number: account.account_number.trim().to_string(),
        addresses: account
            .addresses
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
        amount_overdue: floor_amount(account.amount_overdue),
        current_balance: floor_amount(account.current_balance),
        ..account
    }
}

/// Re-checks every output invariant before a report is handed to storage.
///
/// Only an empty file name is rejected; every other field degrades to its default.
pub fn sanitize_report(report: NormalizedReport) -> Result<NormalizedReport> {
    let file_name = report.file_name.trim().to_string();
    if file_name.is_empty() {
        return Err(IngestError::Validation("File name is required".to_string()));
    }

    let accounts = report
        .accounts
        .into_iter()
        .map(sanitize_account)
        .filter(Account::has_identifying_signal)
        .collect();

    Ok(NormalizedReport {
        file_name,
        basic_details: sanitize_basic(report.basic_details),
        summary: sanitize_summary(report.summary),
        accounts,
    })
}
