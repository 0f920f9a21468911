//! Filing-level and owner-level fields shared by every row of a filing.

use super::fields;
use crate::classify::RoleTable;
use crate::resolve::{self, resolve_first};
use serde_json::Value;

/// Footnote phrases that flag a pre-arranged trading plan.
const PLAN_10B5_1_MARKER: &str = "10b5-1";
/// Footnote phrases that flag a price averaged over several fills.
const WEIGHTED_AVERAGE_MARKER: &str = "weighted average";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilingContext {
    pub id: Option<String>,
    pub accession_no: Option<String>,
    pub schema_version: Option<String>,
    pub document_type: Option<String>,
    pub filed_at: Option<String>,
    pub period_of_report: Option<String>,
    pub issuer_cik: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_symbol: Option<String>,
    pub plan_10b5_1: bool,
    pub weighted_average_price: bool,
}

impl FilingContext {
    pub fn from_document(filing: &Value) -> Self {
        let footnotes = footnote_texts(filing);
        Self {
            id: resolve::text(filing, fields::FILING_ID),
            accession_no: resolve::text(filing, fields::ACCESSION_NO),
            schema_version: resolve::text(filing, fields::SCHEMA_VERSION),
            document_type: resolve::text(filing, fields::DOCUMENT_TYPE),
            filed_at: resolve::text(filing, fields::FILED_AT),
            period_of_report: resolve::text(filing, fields::PERIOD_OF_REPORT),
            issuer_cik: resolve::text(filing, fields::ISSUER_CIK),
            issuer_name: resolve::text(filing, fields::ISSUER_NAME),
            issuer_symbol: resolve::text(filing, fields::ISSUER_SYMBOL),
            plan_10b5_1: mentions(&footnotes, PLAN_10B5_1_MARKER),
            weighted_average_price: mentions(&footnotes, WEIGHTED_AVERAGE_MARKER),
        }
    }
}

fn footnote_texts(filing: &Value) -> Vec<String> {
    match resolve_first(filing, fields::FOOTNOTES) {
        Some(Value::Array(notes)) => notes
            .iter()
            .filter_map(|note| resolve::text(note, fields::FOOTNOTE_TEXT))
            .map(|text| text.to_lowercase())
            .collect(),
        _ => Vec::new(),
    }
}

fn mentions(lowered_texts: &[String], marker: &str) -> bool {
    lowered_texts.iter().any(|text| text.contains(marker))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerContext {
    pub cik: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub is_director: Option<bool>,
    pub is_officer: Option<bool>,
    pub is_ten_percent_owner: Option<bool>,
    pub role_score: f64,
}

impl OwnerContext {
    pub fn from_document(owner: &Value, roles: &RoleTable) -> Self {
        let relationship = resolve_first(owner, fields::RELATIONSHIP).unwrap_or(&Value::Null);
        Self {
            cik: resolve::text(owner, fields::OWNER_CIK),
            name: resolve::text(owner, fields::OWNER_NAME),
            title: resolve::text(relationship, fields::OFFICER_TITLE),
            is_director: resolve::flag(relationship, fields::IS_DIRECTOR),
            is_officer: resolve::flag(relationship, fields::IS_OFFICER),
            is_ten_percent_owner: resolve::flag(relationship, fields::IS_TEN_PERCENT_OWNER),
            role_score: roles.score(relationship),
        }
    }
}

/// Normalize the owner field(s) of a filing to a sequence of owner mappings.
///
/// Accepts a list or a bare object under either owner key; a key holding
/// anything else is skipped in favour of the next one. Non-mapping entries
/// are dropped. No usable owner key means no owners.
pub fn owners(filing: &Value) -> Vec<&Value> {
    fields::OWNERS
        .iter()
        .find_map(|path| match resolve::resolve(filing, path) {
            Some(Value::Array(items)) => {
                Some(items.iter().filter(|item| item.is_object()).collect())
            }
            Some(owner @ Value::Object(_)) => Some(vec![owner]),
            _ => None,
        })
        .unwrap_or_default()
}
