//! Goal predicates and the ordered goal list.

pub mod list;
pub mod types;

pub use list::*;
pub use types::*;
