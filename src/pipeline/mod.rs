//! Batch flattening: filings → rows → metrics → ordering.
//!
//! The whole pipeline is a pure, synchronous transform over a fully
//! materialized batch. Filings expand independently, which lets the
//! expansion fan out across rayon workers; rows are collected back in input
//! order before the metrics and ordering passes run, so output does not
//! depend on whether expansion ran in parallel.
//!
//! # Example
//!
//! ```rust
//! use insidermap::pipeline::flatten;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "transactions": [{
//!         "filedAt": "2024-03-01T16:30:00-05:00",
//!         "issuer": {"tradingSymbol": "ACME"},
//!         "reportingOwner": {"name": "Doe Jane"},
//!         "nonDerivativeTable": {"transactions": [
//!             {"coding": {"code": "S"}, "amounts": {"shares": 100, "pricePerShare": 10}}
//!         ]}
//!     }]
//! });
//!
//! let out = flatten(&payload);
//! assert_eq!(out.rows.len(), 1);
//! assert_eq!(out.rows[0].value_usd, 1000.0);
//! assert!(!out.empty_input_detected);
//! ```

pub mod metrics;
pub mod ordering;
pub mod stage;

pub use metrics::{stake_change, value_usd, MetricsStage};
pub use ordering::{order_rows, OrderingStage};
pub use stage::{run_stage, Stage};

use crate::classify::RoleTable;
use crate::config::{FlattenConfig, ParallelConfig};
use crate::core::types::Flattened;
use crate::extract::fields::ENVELOPE_FILINGS;
use crate::extract::filing::value_kind;
use crate::extract::{expand_filing, Expansion};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, debug_span, warn};

/// Flatten with default configuration.
pub fn flatten(input: &Value) -> Flattened {
    flatten_with_config(input, &FlattenConfig::default())
}

/// Flatten an input payload: a single filing, a list of filings, or the
/// `{"transactions": [...]}` envelope. Anything else is an empty batch.
pub fn flatten_with_config(input: &Value, config: &FlattenConfig) -> Flattened {
    let _span = debug_span!("flatten").entered();

    let filings = filings(input);
    debug!(filings = filings.len(), "normalized input batch");

    let roles = config.roles.to_table();
    let expansion = expand_batch(&filings, &roles, &config.parallelism);
    let rows = run_stage(&OrderingStage, run_stage(&MetricsStage, expansion.rows));

    let empty_input_detected = rows.is_empty();
    if empty_input_detected {
        if expansion.stats.filings_seen > 0 {
            warn!(
                filings = expansion.stats.filings_seen,
                skipped = expansion.stats.filings_skipped,
                owners = expansion.stats.owners_seen,
                "no rows produced; check input shape and keys"
            );
        } else {
            debug!("input batch contained no filings");
        }
    }

    Flattened {
        rows,
        empty_input_detected,
        stats: expansion.stats,
    }
}

/// Normalize the top-level payload to a sequence of filing documents.
pub fn filings(input: &Value) -> Vec<&Value> {
    match input {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get(ENVELOPE_FILINGS) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(other) => {
                debug!(kind = value_kind(other), "envelope filings field is not a list");
                Vec::new()
            }
            None => vec![input],
        },
        other => {
            debug!(kind = value_kind(other), "input is neither a filing nor a list");
            Vec::new()
        }
    }
}

/// Expand every filing, preserving input order.
pub fn expand_batch(
    filings: &[&Value],
    roles: &RoleTable,
    parallelism: &ParallelConfig,
) -> Expansion {
    let _span = debug_span!("stage", name = "Expand filings").entered();

    let expansions = if parallelism.should_parallelize(filings.len()) {
        expand_parallel(filings, roles, parallelism)
    } else {
        filings
            .iter()
            .map(|filing| expand_filing(filing, roles))
            .collect()
    };

    expansions.into_iter().fold(Expansion::default(), |mut acc, next| {
        acc.rows.extend(next.rows);
        acc.stats = acc.stats.merge(next.stats);
        acc
    })
}

fn expand_parallel(
    filings: &[&Value],
    roles: &RoleTable,
    parallelism: &ParallelConfig,
) -> Vec<Expansion> {
    let run = || -> Vec<Expansion> {
        filings
            .par_iter()
            .map(|filing| expand_filing(filing, roles))
            .collect()
    };

    let Some(threads) = parallelism.max_concurrency else {
        return run();
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run),
        Err(e) => {
            warn!(threads, error = %e, "failed to build worker pool; using global pool");
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FlattenStats;
    use serde_json::json;

    fn filing(symbol: &str, owner: &str) -> Value {
        json!({
            "filedAt": "2024-01-02T10:00:00Z",
            "issuer": {"tradingSymbol": symbol},
            "reportingOwner": {"name": owner},
            "nonDerivativeTable": {"transactions": [
                {"coding": {"code": "P"}, "amounts": {"shares": 10, "pricePerShare": 2}}
            ]}
        })
    }

    #[test]
    fn test_filings_normalization() {
        let single = filing("A", "x");
        assert_eq!(filings(&single).len(), 1);
        assert_eq!(filings(&json!([single.clone(), single.clone()])).len(), 2);
        let envelope = json!({"total": {"value": 1, "relation": "eq"}, "transactions": [single]});
        assert_eq!(filings(&envelope).len(), 1);
        assert!(filings(&json!({"transactions": "oops"})).is_empty());
        assert!(filings(&json!(42)).is_empty());
        assert!(filings(&Value::Null).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let batch: Vec<Value> = (0..40)
            .map(|i| filing(&format!("S{:02}", i % 7), &format!("owner{}", i)))
            .collect();
        let input = Value::Array(batch);

        let sequential = flatten_with_config(&input, &FlattenConfig::sequential());
        let parallel = flatten_with_config(
            &input,
            &FlattenConfig {
                parallelism: ParallelConfig {
                    enabled: true,
                    max_concurrency: Some(3),
                    min_batch: 2,
                },
                ..Default::default()
            },
        );

        let key = |f: &Flattened| -> Vec<(Option<String>, Option<String>)> {
            f.rows
                .iter()
                .map(|r| (r.issuer_symbol.clone(), r.owner_name.clone()))
                .collect()
        };
        assert_eq!(key(&sequential), key(&parallel));
        assert_eq!(sequential.stats, parallel.stats);
        assert_eq!(parallel.len(), 40);
    }

    #[test]
    fn test_metrics_applied() {
        let out = flatten(&filing("A", "x"));
        assert_eq!(out.rows[0].value_usd, 20.0);
        assert_eq!(out.rows[0].stake_change, 1.0);
    }

    #[test]
    fn test_empty_sequence_sets_diagnostic() {
        let out = flatten(&json!([]));
        assert!(out.is_empty());
        assert!(out.empty_input_detected);
        assert!(!out.shape_mismatch_suspected());
        assert_eq!(out.stats, FlattenStats::default());
    }

    #[test]
    fn test_empty_filing_flags_shape_mismatch() {
        let out = flatten(&json!({}));
        assert!(out.is_empty());
        assert!(out.shape_mismatch_suspected());
        assert_eq!(out.stats.filings_seen, 1);
    }
}
