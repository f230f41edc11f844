//! Locates the containers that hold each part of a report across the layouts bureaus emit.

use crate::experian::aliases::*;
use crate::experian::coerce::as_sequence;
use crate::experian::resolve::{resolve, resolve_in, resolve_path};
use crate::xml_tree::{XmlElement, XmlValue};
use serde::{Deserialize, Serialize};

/// How hits from the candidate account paths are combined.
///
/// `Concatenate` gathers every candidate and does not deduplicate, so a document that repeats
/// the same accounts under two layouts yields them twice. `FirstMatch` keeps only the first
/// candidate path that produced anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountMergeStrategy {
    #[default]
    Concatenate,
    FirstMatch,
}

/// One repeated account node and the candidate path it was found under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountHit<'a> {
    pub source: &'a str,
    pub node: &'a XmlValue,
}

#[derive(Debug, Default)]
pub struct BasicSources<'a> {
    pub applicant: Vec<&'a XmlValue>,
    pub holder: Vec<&'a XmlValue>,
    pub generic: Vec<&'a XmlValue>,
}

impl<'a> BasicSources<'a> {
    /// Applicant, then account holder, then generic header nodes.
    pub fn identity_order(&self) -> Vec<&'a XmlValue> {
        self.applicant
            .iter()
            .chain(&self.holder)
            .chain(&self.generic)
            .copied()
            .collect()
    }

    /// Name lookups prefer the generic header over account holder records.
    pub fn name_order(&self) -> Vec<&'a XmlValue> {
        self.applicant
            .iter()
            .chain(&self.generic)
            .chain(&self.holder)
            .copied()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct SummarySources<'a> {
    pub primary: Vec<&'a XmlValue>,
    pub secondary: Vec<&'a XmlValue>,
}

impl<'a> SummarySources<'a> {
    pub fn ordered(&self) -> Vec<&'a XmlValue> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .copied()
            .collect()
    }
}

const CAIS_DETAIL_PATHS: &[&[&[&str]]] = &[&[CAIS_ACCOUNT, ACCOUNT_DETAILS], &[ACCOUNT_DETAILS]];

const ACCOUNT_SIGNAL_FIELDS: &[&[&str]] = &[
    ACCOUNT_NUMBER,
    PROVIDER,
    CURRENT_BALANCE,
    AMOUNT_OVERDUE,
    ACCOUNT_STATUS,
    ACCOUNT_TYPE,
    PORTFOLIO_TYPE,
];

pub fn locate_root(document: &XmlValue) -> &XmlValue {
    resolve(Some(document), ROOT_WRAPPERS).unwrap_or(document)
}

pub fn locate_basic(root: &XmlValue) -> BasicSources<'_> {
    let mut sources = BasicSources::default();

    if let Some(applicant) = resolve_path(
        Some(root),
        &[
            CURRENT_APPLICATION,
            CURRENT_APPLICATION_DETAILS,
            CURRENT_APPLICANT_DETAILS,
        ],
    ) {
        sources.applicant.push(applicant);
    }

    for path in CAIS_DETAIL_PATHS {
        let details = resolve_path(Some(root), path);
        for aliases in [HOLDER_DETAILS, HOLDER_PHONE_DETAILS] {
            if let Some(node) = resolve(details, aliases) {
                sources.holder.push(node);
            }
        }
    }

    if let Some(generic) = resolve(Some(root), GENERIC_BASIC) {
        sources.generic.push(generic);
    }

    sources
}

pub fn locate_score(root: &XmlValue) -> Option<&XmlValue> {
    resolve(Some(root), SCORE_NODE)
}

pub fn locate_summary(root: &XmlValue) -> SummarySources<'_> {
    let mut sources = SummarySources::default();
    let cais_summary = resolve_path(Some(root), &[CAIS_ACCOUNT, CAIS_SUMMARY]);

    let primary = [
        resolve(cais_summary, CREDIT_ACCOUNT_SUMMARY),
        resolve(cais_summary, OUTSTANDING_BALANCE_SUMMARY),
        cais_summary,
        resolve(Some(root), TOTAL_CAPS_SUMMARY),
        resolve_path(Some(root), &[CAPS, CAPS_SUMMARY]),
    ];
    sources.primary.extend(primary.into_iter().flatten());

    if let Some(generic) = resolve(Some(root), GENERIC_SUMMARY) {
        sources.secondary.push(generic);
    }

    sources
}

fn has_account_signal(element: &XmlElement) -> bool {
    ACCOUNT_SIGNAL_FIELDS
        .iter()
        .any(|aliases| resolve_in(element, aliases).is_some())
}

/// A wrapper whose nested values are further account nodes rather than account fields.
/// Scalar values on a wrapper (attributes such as `count`) do not disqualify it.
fn is_container(element: &XmlElement) -> bool {
    !has_account_signal(element)
        && element
            .values()
            .any(|v| matches!(v, XmlValue::Element(_) | XmlValue::List(_)))
}

fn push_flattened<'a>(hits: &mut Vec<AccountHit<'a>>, source: &'a str, value: &'a XmlValue) {
    for item in as_sequence(Some(value)) {
        let XmlValue::Element(element) = item else {
            continue;
        };
        if !is_container(element) {
            hits.push(AccountHit { source, node: item });
            continue;
        }
        for child in element.values() {
            for node in as_sequence(Some(child)) {
                if matches!(node, XmlValue::Element(_)) {
                    hits.push(AccountHit { source, node });
                }
            }
        }
    }
}

fn account_candidates(root: &XmlValue) -> Vec<(&'static str, &XmlValue)> {
    let mut candidates = Vec::new();

    if let Some(details) = resolve_path(Some(root), &[CAIS_ACCOUNT, ACCOUNT_DETAILS]) {
        candidates.push(("CAIS_Account/CAIS_Account_DETAILS", details));
    }
    if let Some(details) = resolve(Some(root), ACCOUNT_DETAILS) {
        candidates.push(("CAIS_Account_DETAILS", details));
    }
    if let Some(container) = resolve(Some(root), GENERIC_ACCOUNT_CONTAINER) {
        match resolve(Some(container), GENERIC_ACCOUNT_ITEM) {
            Some(items) => candidates.push(("AccountContainer/Account", items)),
            None => candidates.push(("AccountContainer", container)),
        }
    }

    candidates
}

/// Collects every repeated account node under `root`.
pub fn collect_account_nodes(root: &XmlValue, strategy: AccountMergeStrategy) -> Vec<AccountHit<'_>> {
    let mut hits = Vec::new();

    for (source, value) in account_candidates(root) {
        push_flattened(&mut hits, source, value);
        if strategy == AccountMergeStrategy::FirstMatch && !hits.is_empty() {
            return hits;
        }
    }

    if hits.is_empty() {
        if let Some(element) = root.as_element() {
            for (key, value) in &element.fields {
                if key.to_lowercase().contains(ACCOUNT_KEY_NEEDLE) {
                    push_flattened(&mut hits, key, value);
                }
            }
        }
    }

    hits
}
