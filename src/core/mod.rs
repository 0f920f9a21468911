pub mod types;

pub use types::{DirectionTag, EntryKind, FlattenStats, Flattened, Row, TableKind};
