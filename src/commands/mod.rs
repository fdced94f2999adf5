//! Command façade: gate-checked goal list operations.

pub mod logic;

pub use logic::*;
