//! The fishing goal command façade.
//!
//! Each operation checks the fishing-manipulation gate first, then performs
//! its goal list mutation, and reports the outcome as plain messages for the
//! display layer. When the gate is off, operations return a count of 0 and
//! leave the list untouched.

use crate::goals::{EnchantmentReq, GoalError, GoalList, GoalPredicate};
use crate::items::ItemKind;

/// Message returned by every operation when the feature gate is off.
pub const DISABLED_MESSAGE: &str = "Fishing manipulation is not enabled.";

/// Read-only view of the fishing-manipulation flag.
///
/// The flag itself lives in the host's configuration; the façade only ever
/// queries it. Blanket-implemented for closures so hosts can inject a plain
/// config lookup.
pub trait FeatureGate {
    fn fishing_manipulation_enabled(&self) -> bool;
}

impl<F: Fn() -> bool> FeatureGate for F {
    fn fishing_manipulation_enabled(&self) -> bool {
        self()
    }
}

/// Outcome of one command: the resulting goal count and the messages to show
/// the player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    /// Goal list size after the operation; 0 when the gate short-circuited.
    pub count: usize,
    pub messages: Vec<String>,
}

fn gated() -> CommandResult {
    CommandResult {
        count: 0,
        messages: vec![DISABLED_MESSAGE.to_string()],
    }
}

/// Lists the current goals in priority order.
pub fn list_goals(goals: &GoalList, gate: &impl FeatureGate) -> CommandResult {
    if !gate.fishing_manipulation_enabled() {
        return gated();
    }

    let mut messages = Vec::new();
    if goals.is_empty() {
        messages.push("No fishing goals set.".to_string());
    } else {
        messages.push(format!("Fishing goals ({}):", goals.len()));
        for (i, goal) in goals.iter().enumerate() {
            messages.push(format!("{}: {}", i + 1, goal.pretty_string()));
        }
    }

    CommandResult {
        count: goals.len(),
        messages,
    }
}

/// Appends a goal to the list.
pub fn add_goal(
    goals: &mut GoalList,
    gate: &impl FeatureGate,
    goal: GoalPredicate,
) -> CommandResult {
    if !gate.fishing_manipulation_enabled() {
        return gated();
    }

    let pretty = goal.pretty_string();
    let count = goals.add(goal);

    CommandResult {
        count,
        messages: vec![format!("Added fishing goal: {}.", pretty)],
    }
}

/// Builds an enchanted goal from the player's input and appends it.
///
/// `label` is the string the player typed; it becomes the goal's display
/// string. Fails with `InvalidGoalKind` when `kind` is not enchantable and
/// with `EmptyEnchantments` when `required` is empty.
pub fn add_enchanted_goal(
    goals: &mut GoalList,
    gate: &impl FeatureGate,
    label: &str,
    kind: ItemKind,
    required: Vec<EnchantmentReq>,
) -> Result<CommandResult, GoalError> {
    if !gate.fishing_manipulation_enabled() {
        return Ok(gated());
    }

    let goal = GoalPredicate::enchanted_with_label(label, kind, required)?;
    let count = goals.add(goal);

    Ok(CommandResult {
        count,
        messages: vec![format!("Added fishing goal: {}.", label)],
    })
}

/// Removes the goal at the given 1-based position.
pub fn remove_goal(
    goals: &mut GoalList,
    gate: &impl FeatureGate,
    index: usize,
) -> Result<CommandResult, GoalError> {
    if !gate.fishing_manipulation_enabled() {
        return Ok(gated());
    }

    let removed = goals.remove_at(index)?;

    Ok(CommandResult {
        count: goals.len(),
        messages: vec![format!("Removed fishing goal: {}.", removed.pretty_string())],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Enchantment;

    fn enabled() -> impl FeatureGate {
        || true
    }

    fn disabled() -> impl FeatureGate {
        || false
    }

    #[test]
    fn test_add_goal_appends_and_reports() {
        let mut goals = GoalList::new();
        let result = add_goal(&mut goals, &enabled(), GoalPredicate::plain(ItemKind::NameTag));
        assert_eq!(result.count, 1);
        assert_eq!(result.messages, vec!["Added fishing goal: Name Tag."]);
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_add_goal_gated_off_is_a_no_op() {
        let mut goals = GoalList::new();
        let result = add_goal(&mut goals, &disabled(), GoalPredicate::plain(ItemKind::NameTag));
        assert_eq!(result.count, 0);
        assert_eq!(result.messages, vec![DISABLED_MESSAGE]);
        assert!(goals.is_empty(), "gated add must not mutate");
    }

    #[test]
    fn test_gate_accepts_closures() {
        let mut goals = GoalList::new();
        let enabled = || true;
        let result = add_goal(&mut goals, &enabled, GoalPredicate::plain(ItemKind::Bow));
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_add_enchanted_goal_uses_player_label() {
        let mut goals = GoalList::new();
        let result = add_enchanted_goal(
            &mut goals,
            &enabled(),
            "book mending",
            ItemKind::Book,
            vec![EnchantmentReq::new(Enchantment::Mending, 1)],
        )
        .unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.messages, vec!["Added fishing goal: book mending."]);
        assert_eq!(goals.get(1).unwrap().pretty_string(), "book mending");
    }

    #[test]
    fn test_add_enchanted_goal_invalid_kind() {
        let mut goals = GoalList::new();
        let result = add_enchanted_goal(
            &mut goals,
            &enabled(),
            "stick mending",
            ItemKind::Stick,
            vec![EnchantmentReq::new(Enchantment::Mending, 1)],
        );
        assert_eq!(result, Err(GoalError::InvalidGoalKind(ItemKind::Stick)));
        assert!(goals.is_empty());
    }

    #[test]
    fn test_add_enchanted_goal_gate_beats_validation() {
        let mut goals = GoalList::new();
        // Gate off: even an invalid kind short-circuits without an error.
        let result = add_enchanted_goal(
            &mut goals,
            &disabled(),
            "stick mending",
            ItemKind::Stick,
            vec![EnchantmentReq::new(Enchantment::Mending, 1)],
        )
        .unwrap();
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_remove_goal_reports_removed_entry() {
        let mut goals = GoalList::new();
        goals.add(GoalPredicate::plain(ItemKind::Cod));
        goals.add(GoalPredicate::plain(ItemKind::Bow));

        let result = remove_goal(&mut goals, &enabled(), 1).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.messages, vec!["Removed fishing goal: Cod."]);
        assert_eq!(goals.get(1), Some(&GoalPredicate::plain(ItemKind::Bow)));
    }

    #[test]
    fn test_remove_goal_out_of_range() {
        let mut goals = GoalList::new();
        goals.add(GoalPredicate::plain(ItemKind::Cod));
        let result = remove_goal(&mut goals, &enabled(), 5);
        assert_eq!(result, Err(GoalError::IndexOutOfRange { index: 5, size: 1 }));
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_remove_goal_gated_off_skips_bounds_check() {
        let mut goals = GoalList::new();
        let result = remove_goal(&mut goals, &disabled(), 99).unwrap();
        assert_eq!(result.count, 0);
        assert_eq!(result.messages, vec![DISABLED_MESSAGE]);
    }

    #[test]
    fn test_list_goals_empty() {
        let goals = GoalList::new();
        let result = list_goals(&goals, &enabled());
        assert_eq!(result.count, 0);
        assert_eq!(result.messages, vec!["No fishing goals set."]);
    }

    #[test]
    fn test_list_goals_numbers_entries_from_one() {
        let mut goals = GoalList::new();
        goals.add(GoalPredicate::plain(ItemKind::Saddle));
        goals.add(GoalPredicate::plain(ItemKind::LilyPad));

        let result = list_goals(&goals, &enabled());
        assert_eq!(result.count, 2);
        assert_eq!(
            result.messages,
            vec!["Fishing goals (2):", "1: Saddle", "2: Lily Pad"]
        );
    }

    #[test]
    fn test_list_goals_gated_off() {
        let mut goals = GoalList::new();
        goals.add(GoalPredicate::plain(ItemKind::Saddle));
        let result = list_goals(&goals, &disabled());
        assert_eq!(result.count, 0);
        assert_eq!(result.messages, vec![DISABLED_MESSAGE]);
    }
}
