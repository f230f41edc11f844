//! Extraction for Experian-family credit bureau reports.

pub mod aliases;
pub mod codes;
pub mod coerce;
pub mod extract;
pub mod navigator;
pub mod resolve;

pub use extract::{extract_report, ExtractOptions};
pub use navigator::{AccountHit, AccountMergeStrategy};
