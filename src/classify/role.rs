//! Heuristic weighting of a reporting owner's organizational influence.
//!
//! The score is a ranking aid for analytics, not a legal classification of
//! the insider's status. It is derived from the free-text officer title when
//! one of the known title fragments appears in it, and from the relationship
//! booleans otherwise.
//!
//! Rules are matched as lower-case substrings, first match wins. Fragments
//! nest ("vice president" contains "president"), so the table is ordered
//! most specific first and any configured replacement must keep that order.

use crate::resolve;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `(title fragment, score)` rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRule {
    pub pattern: String,
    pub score: f64,
}

impl RoleRule {
    pub fn new(pattern: impl Into<String>, score: f64) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            score,
        }
    }

    fn matches(&self, lowered_title: &str) -> bool {
        !self.pattern.is_empty() && lowered_title.contains(self.pattern.as_str())
    }
}

fn default_officer() -> f64 {
    0.50
}

fn default_ten_percent_owner() -> f64 {
    0.70
}

fn default_director() -> f64 {
    0.60
}

fn default_unknown() -> f64 {
    0.30
}

/// Scores used when no title fragment matches, checked in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleFallback {
    #[serde(default = "default_officer")]
    pub officer: f64,
    #[serde(default = "default_ten_percent_owner")]
    pub ten_percent_owner: f64,
    #[serde(default = "default_director")]
    pub director: f64,
    #[serde(default = "default_unknown")]
    pub default: f64,
}

impl Default for RoleFallback {
    fn default() -> Self {
        Self {
            officer: default_officer(),
            ten_percent_owner: default_ten_percent_owner(),
            director: default_director(),
            default: default_unknown(),
        }
    }
}

/// Built-in title fragments. The vice-president fragments precede
/// "president", which they contain; the rest keep their historical order.
const DEFAULT_RULES: &[(&str, f64)] = &[
    ("chief executive officer", 1.00),
    ("ceo", 1.00),
    ("senior vice president", 0.70),
    ("svp", 0.70),
    ("vice president", 0.60),
    ("vp", 0.60),
    ("president", 0.90),
    ("chair", 0.90),
    ("chief financial officer", 0.85),
    ("cfo", 0.85),
    ("chief operating officer", 0.80),
    ("coo", 0.80),
    ("general counsel", 0.75),
    ("principal accounting officer", 0.75),
    ("director", 0.60),
    ("ten percent owner", 0.70),
];

static DEFAULT_TABLE: Lazy<RoleTable> = Lazy::new(RoleTable::builtin);

/// Ordered rule table plus flag fallbacks. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleTable {
    rules: Vec<RoleRule>,
    fallback: RoleFallback,
}

impl Default for RoleTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl RoleTable {
    fn builtin() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(pattern, score)| RoleRule::new(*pattern, *score))
                .collect(),
            fallback: RoleFallback::default(),
        }
    }

    /// The process-wide default table.
    pub fn shared() -> &'static RoleTable {
        &DEFAULT_TABLE
    }

    pub fn new(rules: Vec<RoleRule>, fallback: RoleFallback) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| RoleRule::new(rule.pattern, rule.score))
            .collect();
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &RoleFallback {
        &self.fallback
    }

    /// Score a `relationship` mapping (`officerTitle`, `isOfficer`,
    /// `isTenPercentOwner`, `isDirector`). Non-mapping input scores as unknown.
    pub fn score(&self, relationship: &Value) -> f64 {
        let title = resolve::text(relationship, &["officerTitle"])
            .map(|t| t.to_lowercase())
            .unwrap_or_default();

        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(&title)) {
            return rule.score;
        }

        let is_set = |key: &str| resolve::flag(relationship, &[key]).unwrap_or(false);
        if is_set("isOfficer") {
            self.fallback.officer
        } else if is_set("isTenPercentOwner") {
            self.fallback.ten_percent_owner
        } else if is_set("isDirector") {
            self.fallback.director
        } else {
            self.fallback.default
        }
    }
}

/// Score with the built-in table.
pub fn score_role(relationship: &Value) -> f64 {
    RoleTable::shared().score(relationship)
}
