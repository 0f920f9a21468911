//! Deterministic ordering of the final row collection.
//!
//! Rows sort by filing timestamp (newest first), then issuer symbol, owner
//! name, and transaction date (ascending). Missing values sort last for every
//! key. Timestamps are normalized to UTC instants before comparison: RFC 3339
//! values keep their offset, a bare `YYYY-MM-DDTHH:MM:SS` or a date-only value
//! is read as UTC. Values that match none of these forms sort after every
//! parsed timestamp, newest text first, and ahead of missing ones.
//! The sort is stable; rows equal on all keys keep their expansion order.

use super::stage::Stage;
use crate::core::types::Row;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Reverse;

/// Missing-last wrapper for ascending text keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Ascending {
    missing: bool,
    text: String,
}

impl Ascending {
    fn of(value: Option<&str>) -> Self {
        Self {
            missing: value.is_none(),
            text: value.unwrap_or_default().to_string(),
        }
    }
}

/// Filing time, newest first. Variant order is the comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum FiledKey {
    Instant(Reverse<DateTime<Utc>>),
    Text(Reverse<String>),
    Missing,
}

impl FiledKey {
    fn of(value: Option<&str>) -> Self {
        match value {
            None => FiledKey::Missing,
            Some(raw) => match parse_timestamp(raw) {
                Some(instant) => FiledKey::Instant(Reverse(instant)),
                None => FiledKey::Text(Reverse(raw.to_string())),
            },
        }
    }
}

/// Field order is the comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    filed_at: FiledKey,
    issuer_symbol: Ascending,
    owner_name: Ascending,
    transaction_date: Ascending,
}

impl SortKey {
    fn of(row: &Row) -> Self {
        Self {
            filed_at: FiledKey::of(row.filed_at.as_deref()),
            issuer_symbol: Ascending::of(row.issuer_symbol.as_deref()),
            owner_name: Ascending::of(row.owner_name.as_deref()),
            transaction_date: Ascending::of(row.transaction_date.as_deref()),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort rows in place into output order.
pub fn order_rows(rows: &mut [Row]) {
    rows.sort_by_cached_key(SortKey::of);
}

pub struct OrderingStage;

impl Stage for OrderingStage {
    type Input = Vec<Row>;
    type Output = Vec<Row>;

    fn execute(&self, mut rows: Vec<Row>) -> Vec<Row> {
        order_rows(&mut rows);
        rows
    }

    fn name(&self) -> &str {
        "Order rows"
    }
}
