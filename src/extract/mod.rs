//! Turning filing documents into canonical rows.

pub mod context;
pub mod fields;
pub mod filing;
pub mod leg;

pub use context::{owners, FilingContext, OwnerContext};
pub use filing::{assemble_row, expand_filing, Expansion};
pub use leg::{extract_leg, LegFields};
