use crate::items::{level_numeral, CaughtItem, Enchantment, ItemKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item kinds eligible for enchantment goals.
pub const ENCHANTABLE_KINDS: [ItemKind; 3] = [ItemKind::Book, ItemKind::FishingRod, ItemKind::Bow];

/// Errors from goal construction and goal list mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// Enchanted goals are only allowed for kinds in [`ENCHANTABLE_KINDS`].
    #[error("cannot set an enchanted goal for {}: item is not enchantable", .0.name())]
    InvalidGoalKind(ItemKind),

    /// An enchanted goal must require at least one enchantment.
    #[error("an enchanted goal requires at least one enchantment")]
    EmptyEnchantments,

    /// Positional removal outside `[1, size]`.
    #[error("goal index {index} is out of range (expected 1 to {size})")]
    IndexOutOfRange { index: usize, size: usize },
}

/// One required enchantment on an enchanted goal. Levels are minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentReq {
    pub enchantment: Enchantment,
    pub min_level: u8,
}

impl EnchantmentReq {
    pub fn new(enchantment: Enchantment, min_level: u8) -> Self {
        Self {
            enchantment,
            min_level,
        }
    }
}

/// A user-defined acquisition goal the detection loop checks each catch against.
///
/// Immutable once constructed. The enchanted variant is restricted to
/// [`ENCHANTABLE_KINDS`] and always carries at least one requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoalPredicate {
    /// Matches on item kind alone.
    Plain { kind: ItemKind },
    /// Matches on item kind plus minimum enchantment levels.
    Enchanted {
        /// Display string for this goal, as the player entered it.
        label: String,
        kind: ItemKind,
        required: Vec<EnchantmentReq>,
    },
}

impl GoalPredicate {
    /// A goal matching any catch of the given kind.
    pub fn plain(kind: ItemKind) -> Self {
        GoalPredicate::Plain { kind }
    }

    /// An enchanted goal with a caller-supplied display label.
    pub fn enchanted_with_label(
        label: impl Into<String>,
        kind: ItemKind,
        required: Vec<EnchantmentReq>,
    ) -> Result<Self, GoalError> {
        if !ENCHANTABLE_KINDS.contains(&kind) {
            return Err(GoalError::InvalidGoalKind(kind));
        }
        if required.is_empty() {
            return Err(GoalError::EmptyEnchantments);
        }
        Ok(GoalPredicate::Enchanted {
            label: label.into(),
            kind,
            required,
        })
    }

    /// An enchanted goal whose label is derived from its requirements,
    /// e.g. "Book with Mending I, Unbreaking III".
    pub fn enchanted(kind: ItemKind, required: Vec<EnchantmentReq>) -> Result<Self, GoalError> {
        let label = describe_requirements(kind, &required);
        Self::enchanted_with_label(label, kind, required)
    }

    /// The item kind this goal is for.
    pub fn kind(&self) -> ItemKind {
        match self {
            GoalPredicate::Plain { kind } => *kind,
            GoalPredicate::Enchanted { kind, .. } => *kind,
        }
    }

    /// Whether a caught item satisfies this goal. Pure, never fails.
    ///
    /// The enchanted variant requires the kind to match and every required
    /// enchantment to be present at or above its minimum level.
    pub fn matches(&self, item: &CaughtItem) -> bool {
        match self {
            GoalPredicate::Plain { kind } => item.kind == *kind,
            GoalPredicate::Enchanted { kind, required, .. } => {
                item.kind == *kind
                    && required.iter().all(|req| {
                        item.level_of(req.enchantment)
                            .is_some_and(|level| level >= req.min_level)
                    })
            }
        }
    }

    /// Display string for feedback and goal listings.
    pub fn pretty_string(&self) -> String {
        match self {
            GoalPredicate::Plain { kind } => kind.name().to_string(),
            GoalPredicate::Enchanted { label, .. } => label.clone(),
        }
    }
}

fn describe_requirements(kind: ItemKind, required: &[EnchantmentReq]) -> String {
    let reqs: Vec<String> = required
        .iter()
        .map(|req| format!("{} {}", req.enchantment.name(), level_numeral(req.min_level)))
        .collect();
    format!("{} with {}", kind.name(), reqs.join(", "))
}
