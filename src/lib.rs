//! Normalization of insider-transaction filings into flat transaction-leg rows.
//!
//! Filing payloads arrive as loosely shaped JSON whose field locations drift
//! between producer versions. [`flatten`] expands each filing into one
//! [`Row`] per owner × table × entry, classifies each leg's direction,
//! scores the owner's role, computes notional value and stake change, and
//! returns the rows in a deterministic order.
//!
//! ```rust
//! use insidermap::{flatten, DirectionTag};
//! use serde_json::json;
//!
//! let filing = json!({
//!     "reportingOwner": {"name": "Doe Jane", "relationship": {"officerTitle": "CEO"}},
//!     "nonDerivativeTable": {"transactions": [
//!         {"coding": {"code": "P"}, "amounts": {"shares": 100, "pricePerShare": 5}}
//!     ]}
//! });
//!
//! let out = flatten(&filing);
//! assert_eq!(out.rows[0].direction, DirectionTag::BuyLike);
//! assert_eq!(out.rows[0].role_score, 1.0);
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod resolve;

// Re-export commonly used types
pub use crate::core::{DirectionTag, EntryKind, FlattenStats, Flattened, Row, TableKind};

pub use crate::classify::{classify_direction, score_role, RoleTable};

pub use crate::config::FlattenConfig;

pub use crate::errors::{Error, Result};

pub use crate::pipeline::{flatten, flatten_with_config, stake_change, value_usd};

pub use crate::resolve::{resolve, resolve_first};
