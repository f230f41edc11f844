//! Bureau code tables.
//!
//! Account-type codes follow the CAIS `Account_Type` list; portfolio codes are the single
//! letters `R` (revolving), `I` (instalment), `M` (mortgage), `O` (open) and `C` (line of
//! credit). Older exports spell the type out instead ("Credit Card", "Home Loan").

use crate::types::{AccountStatus, AccountType};

const CREDIT_CARD_TYPE_CODES: &[u32] = &[10, 16, 31, 35, 36];
const MORTGAGE_TYPE_CODES: &[u32] = &[2, 3, 44];
const LOAN_TYPE_CODES: &[u32] = &[
    1, 4, 5, 6, 7, 8, 9, 11, 12, 13, 15, 17, 32, 33, 34, 37, 38, 39, 40, 41, 42, 43, 45, 51, 52,
    53, 54, 55, 56, 57, 58, 59, 60, 61,
];

const ACTIVE_STATUS_CODES: &[u32] = &[11, 12];
const CLOSED_STATUS_CODES: &[u32] = &[13, 14, 15, 16, 17];
/// Write-offs, settlements, suits and the days-past-due buckets (21-25, and 71/78/80/82-84
/// for 31-60 through 180+ days past due). An open account that is past due counts as delinquent.
const DELINQUENT_STATUS_CODES: &[u32] = &[
    21, 22, 23, 24, 25, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71,
    72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94,
    95, 96, 97,
];

const INACTIVE_PHRASES: &[&str] = &["inactive", "not active", "non active", "non-active"];

const REVOLVING_TOKENS: &[&str] = &["r", "revolving"];
const REVOLVING_PHRASES: &[&str] = &["credit card", "creditcard", "revolv", "charge card"];
const INSTALMENT_TOKENS: &[&str] = &["i", "emi", "lease", "leasing"];
const INSTALMENT_PHRASES: &[&str] = &["loan", "instal", "overdraft"];
const MORTGAGE_TOKENS: &[&str] = &["m", "mortgage"];
const MORTGAGE_PHRASES: &[&str] = &["mortgage", "housing", "home loan", "property loan"];

/// Parses a purely numeric code, ignoring leading zeros ("02" and "2" are the same code).
fn numeric_code(code: &str) -> Option<u32> {
    let trimmed = code.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

fn matches_text(text: &str, whole_tokens: &[&str], phrases: &[&str]) -> bool {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return false;
    }
    let words = tokens(&lowered);
    words.iter().any(|w| whole_tokens.contains(&w.as_str()))
        || phrases.iter().any(|p| lowered.contains(p))
}

pub fn map_account_type(portfolio_code: &str, account_type_code: &str) -> AccountType {
    let type_num = numeric_code(account_type_code);
    let in_codes = |codes: &[u32]| type_num.is_some_and(|n| codes.contains(&n));
    let either = |words: &[&str], phrases: &[&str]| {
        matches_text(portfolio_code, words, phrases)
            || (type_num.is_none() && matches_text(account_type_code, words, phrases))
    };

    if in_codes(CREDIT_CARD_TYPE_CODES) || either(REVOLVING_TOKENS, REVOLVING_PHRASES) {
        return AccountType::CreditCard;
    }
    if in_codes(MORTGAGE_TYPE_CODES) || either(MORTGAGE_TOKENS, MORTGAGE_PHRASES) {
        return AccountType::Mortgage;
    }
    if in_codes(LOAN_TYPE_CODES) || either(INSTALMENT_TOKENS, INSTALMENT_PHRASES) {
        return AccountType::Loan;
    }
    AccountType::Other
}

pub fn map_account_status(status_code: &str) -> AccountStatus {
    if let Some(code) = numeric_code(status_code) {
        if ACTIVE_STATUS_CODES.contains(&code) {
            return AccountStatus::Active;
        }
        if CLOSED_STATUS_CODES.contains(&code) {
            return AccountStatus::Closed;
        }
        if DELINQUENT_STATUS_CODES.contains(&code) {
            return AccountStatus::Delinquent;
        }
        return AccountStatus::Unknown;
    }

    let lowered = status_code.trim().to_lowercase();
    if lowered.contains("delinquent") || lowered.contains("default") {
        AccountStatus::Delinquent
    } else if lowered.contains("closed") {
        AccountStatus::Closed
    } else if INACTIVE_PHRASES.iter().any(|p| lowered.contains(p)) {
        AccountStatus::Unknown
    } else if lowered.contains("active") {
        AccountStatus::Active
    } else {
        AccountStatus::Unknown
    }
}
