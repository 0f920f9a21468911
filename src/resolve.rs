//! Fault-tolerant nested lookups into loosely shaped JSON documents.
//!
//! Producer payloads drift between API versions: the same logical field may
//! live at `coding.code` in one filing and `transactionCoding.transactionCode`
//! in the next. Everything here answers "is there a value at this path?" and
//! never fails. Missing keys, out-of-range indices, non-numeric index steps,
//! descending into a scalar, and explicit `null` leaves all collapse to `None`.
//!
//! # Example
//!
//! ```rust
//! use insidermap::resolve::{resolve, resolve_first};
//! use serde_json::json;
//!
//! let leg = json!({"amounts": {"shares": 100}, "coding": {"code": "S"}});
//!
//! assert_eq!(resolve(&leg, "amounts.shares"), Some(&json!(100)));
//! assert_eq!(resolve(&leg, "amounts.price"), None);
//! assert_eq!(
//!     resolve_first(&leg, &["transactionCode.code", "coding.code"]),
//!     Some(&json!("S"))
//! );
//! ```

use serde_json::Value;

/// Separator between path steps.
pub const PATH_DELIMITER: char = '.';

/// Walk `path` through `document`, one step per delimiter-separated segment.
///
/// Mapping steps are key lookups. Sequence steps must parse as a
/// non-negative index within bounds.
pub fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_DELIMITER)
        .try_fold(document, step)
        .filter(|value| !value.is_null())
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Evaluate candidate paths left to right and return the first present value.
pub fn resolve_first<'a, S: AsRef<str>>(document: &'a Value, paths: &[S]) -> Option<&'a Value> {
    paths
        .iter()
        .find_map(|path| resolve(document, path.as_ref()))
}

/// Render a scalar as text. Identifiers such as CIKs arrive as either
/// strings or numbers depending on the producer version.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f}"),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a present value to a number; anything unparseable is NaN.
pub fn scalar_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        _ => f64::NAN,
    }
}

/// Coerce a present value to a boolean flag.
pub fn scalar_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// First present candidate rendered as non-empty text.
pub fn text<S: AsRef<str>>(document: &Value, paths: &[S]) -> Option<String> {
    resolve_first(document, paths)
        .and_then(scalar_text)
        .filter(|s| !s.is_empty())
}

/// First present candidate as a number, NaN when absent or malformed.
pub fn number<S: AsRef<str>>(document: &Value, paths: &[S]) -> f64 {
    resolve_first(document, paths).map_or(f64::NAN, scalar_number)
}

/// First present candidate as a boolean flag.
pub fn flag<S: AsRef<str>>(document: &Value, paths: &[S]) -> Option<bool> {
    resolve_first(document, paths).and_then(scalar_flag)
}
