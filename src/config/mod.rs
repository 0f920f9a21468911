mod core;
mod loader;
mod parallel;
mod roles;

pub use core::FlattenConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use roles::RoleScoringConfig;
