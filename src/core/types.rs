//! Canonical output types produced by the flattening pipeline

use serde::{Serialize, Serializer};
use std::fmt;

/// Which of a filing's two parallel tables a leg came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Non-derivative securities (common stock and the like).
    Direct,
    /// Derivative securities (options, RSUs, warrants).
    Derivative,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Direct, TableKind::Derivative];

    /// Key of the table inside a filing document.
    pub fn document_key(&self) -> &'static str {
        match self {
            TableKind::Direct => "nonDerivativeTable",
            TableKind::Derivative => "derivativeTable",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Direct => "direct",
            TableKind::Derivative => "derivative",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a leg reports activity or a standing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Transaction,
    Holding,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Transaction, EntryKind::Holding];

    /// Key of the entry list inside a table.
    pub fn document_key(&self) -> &'static str {
        match self {
            EntryKind::Transaction => "transactions",
            EntryKind::Holding => "holdings",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Transaction => "transaction",
            EntryKind::Holding => "holding",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse semantic direction inferred from transaction coding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectionTag {
    BuyLike,
    SellLike,
    TaxWithhold,
    OptionOrRsu,
    Holding,
    Other,
    /// An unmapped code, kept upper-cased as reported.
    Code(String),
}

impl DirectionTag {
    pub fn as_str(&self) -> &str {
        match self {
            DirectionTag::BuyLike => "BUY_LIKE",
            DirectionTag::SellLike => "SELL_LIKE",
            DirectionTag::TaxWithhold => "TAX_WITHHOLD",
            DirectionTag::OptionOrRsu => "OPTION_OR_RSU",
            DirectionTag::Holding => "HOLDING",
            DirectionTag::Other => "OTHER",
            DirectionTag::Code(code) => code,
        }
    }
}

impl fmt::Display for DirectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DirectionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One flattened transaction or holding leg.
///
/// Numeric leg fields use `f64::NAN` for "not reported or not a number";
/// they serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    // Filing context
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

    // Owner context
    pub owner_cik: Option<String>,
    pub owner_name: Option<String>,
    pub owner_title: Option<String>,
    pub is_director: Option<bool>,
    pub is_officer: Option<bool>,
    pub is_ten_percent_owner: Option<bool>,
    pub role_score: f64,

    // Leg
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

    // Derived
    pub direction: DirectionTag,
    pub value_usd: f64,
    pub stake_change: f64,
}

/// Counters describing how much of the input was usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlattenStats {
    pub filings_seen: usize,
    pub filings_skipped: usize,
    pub owners_seen: usize,
    pub rows_emitted: usize,
}

impl FlattenStats {
    /// Combine counters from independently expanded filings.
    pub fn merge(self, other: FlattenStats) -> FlattenStats {
        FlattenStats {
            filings_seen: self.filings_seen + other.filings_seen,
            filings_skipped: self.filings_skipped + other.filings_skipped,
            owners_seen: self.owners_seen + other.owners_seen,
            rows_emitted: self.rows_emitted + other.rows_emitted,
        }
    }
}

/// Ordered rows plus the diagnostics operators need to tell a quiet
/// batch from a payload whose shape the extractor did not recognize.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Flattened {
    pub rows: Vec<Row>,
    pub empty_input_detected: bool,
    pub stats: FlattenStats,
}

impl Flattened {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filings were present yet nothing came out of them.
    pub fn shape_mismatch_suspected(&self) -> bool {
        self.empty_input_detected && self.stats.filings_seen > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tag_serializes_as_label() {
        let json = serde_json::to_string(&DirectionTag::OptionOrRsu).unwrap();
        assert_eq!(json, "\"OPTION_OR_RSU\"");
        let raw = serde_json::to_string(&DirectionTag::Code("G".into())).unwrap();
        assert_eq!(raw, "\"G\"");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TableKind::Derivative.to_string(), "derivative");
        assert_eq!(EntryKind::Holding.document_key(), "holdings");
        assert_eq!(
            serde_json::to_string(&TableKind::Direct).unwrap(),
            "\"direct\""
        );
    }

    #[test]
    fn test_shape_mismatch_requires_seen_filings() {
        let empty = Flattened {
            empty_input_detected: true,
            ..Default::default()
        };
        assert!(!empty.shape_mismatch_suspected());

        let mismatched = Flattened {
            empty_input_detected: true,
            stats: FlattenStats {
                filings_seen: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(mismatched.shape_mismatch_suspected());
    }

    #[test]
    fn test_stats_merge() {
        let a = FlattenStats {
            filings_seen: 1,
            filings_skipped: 0,
            owners_seen: 2,
            rows_emitted: 4,
        };
        let b = FlattenStats {
            filings_seen: 1,
            filings_skipped: 1,
            owners_seen: 0,
            rows_emitted: 0,
        };
        assert_eq!(
            a.merge(b),
            FlattenStats {
                filings_seen: 2,
                filings_skipped: 1,
                owners_seen: 2,
                rows_emitted: 4,
            }
        );
    }
}
