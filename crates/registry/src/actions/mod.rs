//! Action definitions and the registries that hold them.

mod builtins;
mod common;
mod component;
mod def;
pub mod tree;

pub use actdesk_primitives::COMPONENT_ACTION_TYPE;
pub use builtins::builtin_common_actions;
pub use common::{CommonActionView, CommonActions};
pub use component::ComponentActions;
pub use def::ActionDef;
pub use tree::{ActionGroup, ActionNode, ActionTree, find_action_node, find_sub_action_node};

/// Whether a component's action capabilities cover `action_type`.
///
/// `None` stands for a capability list that is absent or not a list, and never
/// matches. A `component` entry matches every query.
pub fn supports_action_type(action_type: &str, actions: Option<&[ActionDef]>) -> bool {
	let Some(actions) = actions else {
		return false;
	};
	actions
		.iter()
		.any(|def| def.action_type == action_type || def.action_type == COMPONENT_ACTION_TYPE)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("anything", Some(vec![ActionDef::new("component")]), true)]
	#[case("x", Some(vec![]), false)]
	#[case("x", None, false)]
	#[case("reload", Some(vec![ActionDef::new("submit"), ActionDef::new("reload")]), true)]
	#[case("reload", Some(vec![ActionDef::new("submit")]), false)]
	fn capability_membership(#[case] action_type: &str, #[case] actions: Option<Vec<ActionDef>>, #[case] expected: bool) {
		assert_eq!(supports_action_type(action_type, actions.as_deref()), expected);
	}
}
