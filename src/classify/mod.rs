//! Pure classifiers mapping terse filing codes and free-text titles to
//! coarse semantic labels.

pub mod direction;
pub mod role;

pub use direction::classify_direction;
pub use role::{score_role, RoleFallback, RoleRule, RoleTable};
