use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use super::roles::RoleScoringConfig;

/// Root configuration structure for insidermap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FlattenConfig {
    /// Per-filing fan-out settings
    #[serde(default)]
    pub parallelism: ParallelConfig,

    /// Role-weighting table and flag fallbacks
    #[serde(default)]
    pub roles: RoleScoringConfig,
}

impl FlattenConfig {
    /// Defaults with parallel expansion turned off.
    pub fn sequential() -> Self {
        Self {
            parallelism: ParallelConfig::sequential(),
            ..Default::default()
        }
    }
}
