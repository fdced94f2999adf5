//! Fishcracker - fishing goal tracking
//!
//! Core of the fishing cracker feature: players register goals (an item kind,
//! optionally with required enchantment levels), the detection loop checks
//! every caught item against the ordered goal list, and the command façade
//! mutates the list behind the fishing-manipulation gate.

pub mod commands;
pub mod goals;
pub mod items;

pub use goals::{GoalError, GoalList, GoalPredicate, SharedGoalList};
