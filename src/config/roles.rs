//! Role scoring configuration.

use crate::classify::{RoleFallback, RoleRule, RoleTable};
use serde::{Deserialize, Serialize};

/// Overrides for the role-weighting heuristic.
///
/// ```toml
/// [roles]
/// rules = [
///     { pattern = "chief executive officer", score = 1.0 },
///     { pattern = "treasurer", score = 0.65 },
/// ]
///
/// [roles.fallback]
/// officer = 0.5
/// default = 0.2
/// ```
///
/// `rules` replaces the built-in table entirely and must be ordered most
/// specific first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoleScoringConfig {
    #[serde(default)]
    pub rules: Option<Vec<RoleRule>>,

    #[serde(default)]
    pub fallback: RoleFallback,
}

impl RoleScoringConfig {
    // Pure function: Check if a score is in valid range
    pub fn is_valid_score(score: f64) -> bool {
        (0.0..=1.0).contains(&score)
    }

    // Pure function: Validate a single score with name
    pub fn validate_score(score: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_score(score) {
            Ok(())
        } else {
            Err(format!("{} score must be between 0.0 and 1.0", name))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let fallback = &self.fallback;
        Self::validate_score(fallback.officer, "Officer")?;
        Self::validate_score(fallback.ten_percent_owner, "Ten percent owner")?;
        Self::validate_score(fallback.director, "Director")?;
        Self::validate_score(fallback.default, "Default")?;

        for rule in self.rules.iter().flatten() {
            if rule.pattern.trim().is_empty() {
                return Err("Role rule pattern must not be empty".to_string());
            }
            Self::validate_score(rule.score, &format!("Role '{}'", rule.pattern))?;
        }
        Ok(())
    }

    /// Build the immutable table used for a run.
    pub fn to_table(&self) -> RoleTable {
        match &self.rules {
            Some(rules) => RoleTable::new(rules.clone(), self.fallback.clone()),
            None if self.fallback == RoleFallback::default() => RoleTable::default(),
            None => RoleTable::new(
                RoleTable::shared().rules().to_vec(),
                self.fallback.clone(),
            ),
        }
    }
}
