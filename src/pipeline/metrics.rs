//! Derived per-row metrics.

use super::stage::Stage;
use crate::core::types::Row;

/// NaN counts as zero for arithmetic on reported amounts.
fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Notional value of a leg: shares × price, with missing operands as zero.
pub fn value_usd(shares: f64, price_per_share: f64) -> f64 {
    or_zero(shares) * or_zero(price_per_share)
}

/// Fraction of the post-transaction position the leg represents.
///
/// `shares / (shares + post_shares)` when the denominator is positive,
/// otherwise `0.0`. The result is always within `[0, 1]`: negative or
/// infinite amounts reported by a producer are clamped or collapse to `0.0`.
pub fn stake_change(shares: f64, post_shares: f64) -> f64 {
    let shares = or_zero(shares);
    let total = shares + or_zero(post_shares);
    if total <= 0.0 || total.is_nan() {
        return 0.0;
    }
    let ratio = shares / total;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Fill `value_usd` and `stake_change` on every row.
pub struct MetricsStage;

impl Stage for MetricsStage {
    type Input = Vec<Row>;
    type Output = Vec<Row>;

    fn execute(&self, rows: Vec<Row>) -> Vec<Row> {
        rows.into_iter()
            .map(|row| Row {
                value_usd: value_usd(row.shares, row.price_per_share),
                stake_change: stake_change(row.shares, row.post_shares),
                ..row
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Compute metrics"
    }
}
