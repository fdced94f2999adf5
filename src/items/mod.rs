//! Item catalog: catchable item kinds, enchantments, and caught items.

pub mod types;

pub use types::*;
