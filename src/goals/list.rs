//! The ordered goal list and its shared cross-thread handle.

use super::types::{GoalError, GoalPredicate};
use crate::items::CaughtItem;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Ordered, mutable list of fishing goals. Insertion order is priority and
/// display order. Positional operations are 1-based, matching how goals are
/// shown to the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalList {
    goals: Vec<GoalPredicate>,
}

impl GoalList {
    pub fn new() -> Self {
        Self { goals: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Appends a goal and returns the new count. Duplicates are allowed.
    pub fn add(&mut self, goal: GoalPredicate) -> usize {
        self.goals.push(goal);
        self.goals.len()
    }

    /// Removes and returns the goal at the given 1-based position.
    ///
    /// Fails with `IndexOutOfRange` for indices outside `[1, len]`; the list
    /// is left untouched on failure. Removal preserves the relative order of
    /// the remaining goals.
    pub fn remove_at(&mut self, index: usize) -> Result<GoalPredicate, GoalError> {
        if index == 0 || index > self.goals.len() {
            return Err(GoalError::IndexOutOfRange {
                index,
                size: self.goals.len(),
            });
        }
        Ok(self.goals.remove(index - 1))
    }

    /// The goal at the given 1-based position, if any.
    pub fn get(&self, index: usize) -> Option<&GoalPredicate> {
        index.checked_sub(1).and_then(|i| self.goals.get(i))
    }

    /// Goals in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &GoalPredicate> {
        self.goals.iter()
    }

    /// The first goal a caught item satisfies, with its 1-based position.
    ///
    /// This is the query the detection loop runs on every catch.
    pub fn first_match(&self, item: &CaughtItem) -> Option<(usize, &GoalPredicate)> {
        self.goals
            .iter()
            .enumerate()
            .find(|(_, goal)| goal.matches(item))
            .map(|(i, goal)| (i + 1, goal))
    }

    /// Whether any goal matches the caught item.
    pub fn matches_any(&self, item: &CaughtItem) -> bool {
        self.first_match(item).is_some()
    }
}

/// Cloneable handle to a goal list shared between the command handler and the
/// detection loop. All access goes through the lock, so a reader can never
/// observe the list mid-removal.
#[derive(Debug, Clone, Default)]
pub struct SharedGoalList {
    inner: Arc<Mutex<GoalList>>,
}

impl SharedGoalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with read access to the list.
    pub fn with<R>(&self, f: impl FnOnce(&GoalList) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    /// Runs `f` with exclusive mutable access to the list.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut GoalList) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// An owned copy of the goals in priority order, for repeated iteration
    /// without holding the lock.
    pub fn snapshot(&self) -> Vec<GoalPredicate> {
        self.with(|goals| goals.iter().cloned().collect())
    }
}
