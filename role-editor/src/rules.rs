//! Action implication rules
//!
//! Declarative table of which actions imply which. Every per-click toggle
//! goes through [`apply_toggle`]; bulk selections bypass it because they
//! already carry a closed set.
//!
//! - `view` is a prerequisite of every other action
//! - `delete` implies `edit` (and therefore `view`)

use shared::models::{Action, ActionSet};

/// One row of the implication table
#[derive(Debug, Clone, Copy)]
pub struct ActionRule {
    pub action: Action,
    /// Actions that must be granted whenever `action` is granted
    pub implies: &'static [Action],
}

pub const ACTION_RULES: &[ActionRule] = &[
    ActionRule { action: Action::View, implies: &[] },
    ActionRule { action: Action::Create, implies: &[Action::View] },
    ActionRule { action: Action::Edit, implies: &[Action::View] },
    ActionRule { action: Action::Delete, implies: &[Action::Edit, Action::View] },
    ActionRule { action: Action::Export, implies: &[Action::View] },
    ActionRule { action: Action::Manage, implies: &[Action::View] },
];

/// Direct implications of an action
pub fn implies(action: Action) -> &'static [Action] {
    ACTION_RULES
        .iter()
        .find(|rule| rule.action == action)
        .map(|rule| rule.implies)
        .unwrap_or(&[])
}

/// Actions that directly imply `action`
pub fn implied_by(action: Action) -> Vec<Action> {
    ACTION_RULES
        .iter()
        .filter(|rule| rule.implies.contains(&action))
        .map(|rule| rule.action)
        .collect()
}

/// `action` plus everything it transitively implies
pub fn grant_closure(action: Action) -> ActionSet {
    closure(action, |a| implies(a).to_vec())
}

/// `action` plus everything that transitively implies it
pub fn revoke_closure(action: Action) -> ActionSet {
    closure(action, implied_by)
}

fn closure(start: Action, next: impl Fn(Action) -> Vec<Action>) -> ActionSet {
    let mut seen = ActionSet::new();
    let mut stack = vec![start];
    while let Some(action) = stack.pop() {
        if seen.insert(action) {
            stack.extend(next(action));
        }
    }
    seen
}

/// Apply one click on `action` to `current`
///
/// Granting adds the grant closure, revoking removes the revoke closure.
/// The result never leaves `allowed`.
pub fn apply_toggle(current: &ActionSet, action: Action, allowed: &ActionSet) -> ActionSet {
    let mut next: ActionSet = current.intersection(allowed).copied().collect();
    if current.contains(&action) {
        for revoked in revoke_closure(action) {
            next.remove(&revoked);
        }
    } else {
        next.extend(grant_closure(action).intersection(allowed).copied());
    }
    next
}

/// Whether `set` satisfies every implication that `allowed` permits
pub fn is_closed(set: &ActionSet, allowed: &ActionSet) -> bool {
    set.is_subset(allowed)
        && set.iter().all(|action| {
            implies(*action)
                .iter()
                .filter(|implied| allowed.contains(implied))
                .all(|implied| set.contains(implied))
        })
}

/// Close an arbitrary set: drop what `allowed` excludes, then add every implied action
pub fn repair(set: &ActionSet, allowed: &ActionSet) -> ActionSet {
    set.iter()
        .filter(|action| allowed.contains(*action))
        .flat_map(|action| grant_closure(*action))
        .filter(|action| allowed.contains(action))
        .collect()
}
