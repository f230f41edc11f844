use crate::experian::aliases::*;
use crate::experian::codes::{map_account_status, map_account_type};
use crate::experian::coerce::{as_sequence, coerce_count, coerce_number, coerce_string, non_negative};
use crate::experian::navigator::{
    collect_account_nodes, locate_basic, locate_root, locate_score, locate_summary,
    AccountMergeStrategy, BasicSources,
};
use crate::experian::resolve::{resolve, resolve_in};
use crate::sanitize::{is_valid_mobile, is_valid_pan, score_in_range};
use crate::types::{Account, BasicDetails, NormalizedReport, ReportSummary};
use crate::xml_tree::XmlValue;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    pub account_merge: AccountMergeStrategy,
}

pub fn normalize_text(input: &str) -> String {
    WHITESPACE_RE.replace_all(input.trim(), " ").to_string()
}

/// Reduces a phone number to its 10-digit national form, or empty.
pub fn normalize_mobile(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('0') => &digits[1..],
        12 if digits.starts_with("91") => &digits[2..],
        _ => "",
    };
    if is_valid_mobile(national) {
        national.to_string()
    } else {
        String::new()
    }
}

pub fn normalize_pan(raw: &str) -> String {
    let pan: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    if is_valid_pan(&pan) {
        pan
    } else {
        String::new()
    }
}

fn field<'a>(node: &'a XmlValue, aliases: &[&str]) -> Option<&'a XmlValue> {
    resolve(Some(node), aliases)
}

fn first_non_empty(nodes: &[&XmlValue], extract: impl Fn(&XmlValue) -> String) -> String {
    nodes
        .iter()
        .map(|&node| extract(node))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

fn name_from(node: &XmlValue) -> String {
    let parts: Vec<String> = [FIRST_NAME, MIDDLE_NAME, LAST_NAME]
        .iter()
        .map(|aliases| coerce_string(field(node, aliases)))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        normalize_text(&coerce_string(field(node, FULL_NAME)))
    } else {
        normalize_text(&parts.join(" "))
    }
}

fn extract_score(root: &XmlValue, basic: &BasicSources) -> Option<u32> {
    let dedicated = locate_score(root)
        .and_then(|node| coerce_number(resolve(Some(node), SCORE_VALUE).or(Some(node))));
    let score = dedicated.or_else(|| {
        basic
            .identity_order()
            .into_iter()
            .find_map(|node| coerce_number(field(node, BASIC_SCORE)))
    })?;
    let rounded = score.round();
    score_in_range(rounded).then_some(rounded as u32)
}

fn extract_basic_details(root: &XmlValue) -> BasicDetails {
    let basic = locate_basic(root);
    let identity = basic.identity_order();

    BasicDetails {
        name: first_non_empty(&basic.name_order(), name_from),
        mobile: first_non_empty(&identity, |node| {
            normalize_mobile(&coerce_string(field(node, MOBILE)))
        }),
        pan: first_non_empty(&identity, |node| normalize_pan(&coerce_string(field(node, PAN)))),
        credit_score: extract_score(root, &basic),
    }
}

fn summary_figure(nodes: &[&XmlValue], aliases: &[&str]) -> Option<f64> {
    nodes
        .iter()
        .find_map(|node| coerce_number(field(node, aliases)))
}

fn extract_summary(root: &XmlValue, accounts: &[Account]) -> ReportSummary {
    let nodes = locate_summary(root).ordered();
    let count = |aliases: &[&str]| coerce_count(summary_figure(&nodes, aliases));
    let amount = |aliases: &[&str]| summary_figure(&nodes, aliases).map(|n| non_negative(Some(n)));

    ReportSummary {
        total_accounts: count(TOTAL_ACCOUNTS).unwrap_or(accounts.len() as u32),
        active_accounts: count(ACTIVE_ACCOUNTS).unwrap_or(0),
        closed_accounts: count(CLOSED_ACCOUNTS).unwrap_or(0),
        current_balance: amount(SUMMARY_BALANCE)
            .unwrap_or_else(|| accounts.iter().map(|a| a.current_balance).sum()),
        secured_amount: amount(SECURED_AMOUNT).unwrap_or(0.0),
        unsecured_amount: amount(UNSECURED_AMOUNT).unwrap_or(0.0),
        enquiries_last_7_days: count(ENQUIRIES_LAST_7_DAYS).unwrap_or(0),
    }
}

fn format_address_block(block: &XmlValue) -> String {
    ADDRESS_PARTS
        .iter()
        .map(|aliases| normalize_text(&coerce_string(field(block, aliases))))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn address_line(value: &XmlValue) -> String {
    let block = format_address_block(value);
    if block.is_empty() {
        normalize_text(&coerce_string(Some(value)))
    } else {
        block
    }
}

fn non_empty_lines<'a>(values: impl IntoIterator<Item = &'a XmlValue>) -> Vec<String> {
    values
        .into_iter()
        .map(address_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Holder address blocks first; otherwise a generic field that may be a comma-separated
/// string, a list, or a wrapper around repeated `Address` items.
fn extract_addresses(node: &XmlValue) -> Vec<String> {
    let holder = non_empty_lines(as_sequence(field(node, HOLDER_ADDRESS_DETAILS)));
    if !holder.is_empty() {
        return holder;
    }

    let Some(value) = field(node, ADDRESSES) else {
        return Vec::new();
    };
    match value {
        XmlValue::Text(text) => text
            .split(',')
            .map(normalize_text)
            .filter(|line| !line.is_empty())
            .collect(),
        XmlValue::List(items) => non_empty_lines(items),
        XmlValue::Element(element) => match resolve_in(element, ADDRESS_ITEM) {
            Some(inner) => non_empty_lines(as_sequence(Some(inner))),
            None => non_empty_lines([value]),
        },
    }
}

pub fn extract_account(node: &XmlValue) -> Account {
    Account {
        type_: map_account_type(
            &coerce_string(field(node, PORTFOLIO_TYPE)),
            &coerce_string(field(node, ACCOUNT_TYPE)),
        ),
        provider: normalize_text(&coerce_string(field(node, PROVIDER))),
        addresses: extract_addresses(node),
        account_number: coerce_string(field(node, ACCOUNT_NUMBER)),
        amount_overdue: non_negative(coerce_number(field(node, AMOUNT_OVERDUE))),
        current_balance: non_negative(coerce_number(field(node, CURRENT_BALANCE))),
        status: map_account_status(&coerce_string(field(node, ACCOUNT_STATUS))),
    }
}

/// Builds a report from a parsed document. Never fails: anything that cannot be found takes
/// its default.
pub fn extract_report(
    document: &XmlValue,
    file_name: &str,
    options: &ExtractOptions,
) -> NormalizedReport {
    let root = locate_root(document);

    let accounts: Vec<Account> = collect_account_nodes(root, options.account_merge)
        .into_iter()
        .map(|hit| extract_account(hit.node))
        .filter(Account::has_identifying_signal)
        .collect();

    NormalizedReport {
        file_name: file_name.trim().to_string(),
        basic_details: extract_basic_details(root),
        summary: extract_summary(root, &accounts),
        accounts,
    }
}
