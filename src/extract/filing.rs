//! Expansion of one filing into rows: owners × tables × entry kinds × entries.

use super::context::{owners, FilingContext, OwnerContext};
use super::leg::{extract_leg, LegFields};
use crate::classify::RoleTable;
use crate::core::types::{EntryKind, FlattenStats, Row, TableKind};
use crate::resolve::resolve;
use serde_json::Value;
use tracing::debug;

/// Rows produced by one filing, in owner/table/entry/document order.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub rows: Vec<Row>,
    pub stats: FlattenStats,
}

/// Expand a single filing document. Never fails: anything unrecognized
/// contributes no rows.
pub fn expand_filing(filing: &Value, roles: &RoleTable) -> Expansion {
    if !filing.is_object() {
        debug!(kind = value_kind(filing), "skipping non-mapping filing");
        return Expansion {
            rows: Vec::new(),
            stats: FlattenStats {
                filings_seen: 1,
                filings_skipped: 1,
                ..Default::default()
            },
        };
    }

    let context = FilingContext::from_document(filing);
    let owners = owners(filing);
    if owners.is_empty() {
        debug!(accession_no = ?context.accession_no, "filing has no reporting owner");
    }

    let mut rows = Vec::new();
    for owner in &owners {
        let owner = OwnerContext::from_document(owner, roles);
        for table in TableKind::ALL {
            for entry in EntryKind::ALL {
                rows.extend(entries(filing, table, entry).map(|leg| {
                    assemble_row(&context, &owner, extract_leg(&context, table, entry, leg))
                }));
            }
        }
    }

    let stats = FlattenStats {
        filings_seen: 1,
        filings_skipped: 0,
        owners_seen: owners.len(),
        rows_emitted: rows.len(),
    };
    Expansion { rows, stats }
}

/// Entries of one kind within one table; missing or malformed lists are empty.
fn entries<'a>(
    filing: &'a Value,
    table: TableKind,
    entry: EntryKind,
) -> impl Iterator<Item = &'a Value> + 'a {
    let path = format!("{}.{}", table.document_key(), entry.document_key());
    let items: &[Value] = match resolve(filing, &path) {
        Some(Value::Array(items)) => items,
        _ => &[],
    };
    items.iter().filter(|item| item.is_object())
}

/// Union filing, owner, and leg fields into one row. Derived metrics are
/// filled in by the metrics stage.
pub fn assemble_row(filing: &FilingContext, owner: &OwnerContext, leg: LegFields) -> Row {
    Row {
        id: filing.id.clone(),
        accession_no: filing.accession_no.clone(),
        schema_version: filing.schema_version.clone(),
        document_type: filing.document_type.clone(),
        filed_at: filing.filed_at.clone(),
        period_of_report: filing.period_of_report.clone(),
        issuer_cik: filing.issuer_cik.clone(),
        issuer_name: filing.issuer_name.clone(),
        issuer_symbol: filing.issuer_symbol.clone(),
        plan_10b5_1: filing.plan_10b5_1,
        weighted_average_price: filing.weighted_average_price,

        owner_cik: owner.cik.clone(),
        owner_name: owner.name.clone(),
        owner_title: owner.title.clone(),
        is_director: owner.is_director,
        is_officer: owner.is_officer,
        is_ten_percent_owner: owner.is_ten_percent_owner,
        role_score: owner.role_score,

        table: leg.table,
        entry: leg.entry,
        security_title: leg.security_title,
        transaction_date: leg.transaction_date,
        code: leg.code,
        acquired_disposed: leg.acquired_disposed,
        shares: leg.shares,
        price_per_share: leg.price_per_share,
        post_shares: leg.post_shares,
        direct_or_indirect: leg.direct_or_indirect,
        underlying_title: leg.underlying_title,
        underlying_shares: leg.underlying_shares,

        direction: leg.direction,
        value_usd: 0.0,
        stake_change: 0.0,
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
