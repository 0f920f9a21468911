//! Extraction of one transaction or holding entry into canonical leg fields.

use super::context::FilingContext;
use super::fields;
use crate::classify::classify_direction;
use crate::core::types::{DirectionTag, EntryKind, TableKind};
use crate::resolve;
use serde_json::Value;

/// Leg-specific portion of a row.
#[derive(Debug, Clone)]
pub struct LegFields {
    pub table: TableKind,
    pub entry: EntryKind,
    pub security_title: Option<String>,
    pub transaction_date: Option<String>,
    pub code: Option<String>,
    pub acquired_disposed: Option<String>,
    pub shares: f64,
    pub price_per_share: f64,
    pub post_shares: f64,
    pub direct_or_indirect: Option<String>,
    pub underlying_title: Option<String>,
    pub underlying_shares: Option<f64>,
    pub direction: DirectionTag,
}

/// Resolve the canonical fields of `leg` through the candidate path lists.
pub fn extract_leg(
    filing: &FilingContext,
    table: TableKind,
    entry: EntryKind,
    leg: &Value,
) -> LegFields {
    let (underlying_title, underlying_shares) = match table {
        TableKind::Direct => (None, None),
        TableKind::Derivative => (
            resolve::text(leg, fields::UNDERLYING_TITLE),
            Some(resolve::number(leg, fields::UNDERLYING_SHARES)),
        ),
    };

    let security_title = resolve::text(leg, fields::SECURITY_TITLE);
    let direct_or_indirect = resolve::text(leg, fields::DIRECT_OR_INDIRECT);

    match entry {
        EntryKind::Transaction => {
            let code = resolve::text(leg, fields::TRANSACTION_CODE);
            let acquired_disposed = resolve::text(leg, fields::ACQUIRED_DISPOSED);
            let direction = classify_direction(code.as_deref(), acquired_disposed.as_deref(), false);
            LegFields {
                table,
                entry,
                security_title,
                transaction_date: resolve::text(leg, fields::TRANSACTION_DATE),
                code,
                acquired_disposed,
                shares: resolve::number(leg, fields::SHARES),
                price_per_share: resolve::number(leg, fields::PRICE_PER_SHARE),
                post_shares: resolve::number(leg, fields::POST_SHARES),
                direct_or_indirect,
                underlying_title,
                underlying_shares,
                direction,
            }
        }
        EntryKind::Holding => {
            // A holding is a snapshot: the reported quantity is both the
            // leg amount and the position that remains.
            let shares = resolve::number(leg, fields::HOLDING_SHARES);
            LegFields {
                table,
                entry,
                security_title,
                transaction_date: resolve::text(leg, fields::TRANSACTION_DATE)
                    .or_else(|| filing.period_of_report.clone()),
                code: None,
                acquired_disposed: None,
                shares,
                price_per_share: f64::NAN,
                post_shares: shares,
                direct_or_indirect,
                underlying_title,
                underlying_shares,
                direction: classify_direction(None, None, true),
            }
        }
    }
}
