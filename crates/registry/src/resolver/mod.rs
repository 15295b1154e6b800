//! Layered action property resolution.
//!
//! The [`ActionResolver`] finds a property of a configured action by walking
//! the registries from most specific to least specific. The first layer that
//! carries the property wins; values are never merged across layers.
//!
//! # Resolution Order
//!
//! 1. Feature actions of the target component's renderer type (only when a target component is set)
//! 2. The action tree
//! 3. The sub-action's parent in the action tree: its label for `actionLabel`,
//!    otherwise the sub-action itself
//! 4. Common actions, overrides laid over the built-ins
//!
//! Labels are never taken from the common registry: a sub-action borrows its
//! parent's label or has none.

use actdesk_primitives::{ActionConfig, ActionProp, COMPONENT_ACTION_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::{ActionDef, ActionTree, CommonActions, ComponentActions, builtin_common_actions};
use crate::desc::{DescDetail, DescInfo};

#[cfg(test)]
mod tests;

/// A resolved property value, borrowed from the registry that supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropValue<'a> {
	/// `actionLabel` or `description`.
	Text(&'a str),
	/// `schema`.
	Schema(&'a Value),
	/// `descDetail`.
	Desc(&'a DescDetail),
	/// `innerArgs`.
	Args(&'a [String]),
}

impl<'a> PropValue<'a> {
	pub fn as_text(self) -> Option<&'a str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	pub fn as_schema(self) -> Option<&'a Value> {
		match self {
			Self::Schema(schema) => Some(schema),
			_ => None,
		}
	}

	pub fn as_desc(self) -> Option<&'a DescDetail> {
		match self {
			Self::Desc(desc) => Some(desc),
			_ => None,
		}
	}

	pub fn as_args(self) -> Option<&'a [String]> {
		match self {
			Self::Args(args) => Some(args),
			_ => None,
		}
	}
}

/// How the target component's feature actions take part in resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentLookup {
	/// A property found on the component's feature action is returned.
	#[default]
	Prefer,
	/// The component's feature action is looked up but its value is dropped and
	/// resolution continues with the action tree, as older editor builds did.
	Discard,
}

/// Resolves action properties through the registry layers.
///
/// The resolver borrows every registry and is cheap to build per call site.
///
/// # Example
///
/// ```ignore
/// let tree = ActionTree::new(vec![ActionDef::new("toast").with_label("Toast").into()]);
/// let resolver = ActionResolver::new(&tree);
///
/// assert_eq!(resolver.label(&ActionConfig::new("toast")), Some("Toast"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActionResolver<'a> {
	tree: &'a ActionTree,
	components: Option<&'a ComponentActions>,
	common_overrides: Option<&'a CommonActions>,
	builtins: &'a CommonActions,
	component_lookup: ComponentLookup,
}

impl<'a> ActionResolver<'a> {
	/// Creates a resolver over `tree` and the built-in common actions.
	pub fn new(tree: &'a ActionTree) -> Self {
		Self {
			tree,
			components: None,
			common_overrides: None,
			builtins: builtin_common_actions(),
			component_lookup: ComponentLookup::default(),
		}
	}

	/// Adds the per-component-type feature actions.
	pub fn with_components(mut self, components: &'a ComponentActions) -> Self {
		self.components = Some(components);
		self
	}

	/// Adds common action overrides; an override replaces the built-in entry of the same type.
	pub fn with_common_overrides(mut self, overrides: &'a CommonActions) -> Self {
		self.common_overrides = Some(overrides);
		self
	}

	/// Replaces the built-in common actions.
	pub fn with_builtins(mut self, builtins: &'a CommonActions) -> Self {
		self.builtins = builtins;
		self
	}

	pub fn with_component_lookup(mut self, lookup: ComponentLookup) -> Self {
		self.component_lookup = lookup;
		self
	}

	pub fn tree(&self) -> &'a ActionTree {
		self.tree
	}

	/// Resolves `prop` for `action`, or `None` when no layer configures it.
	pub fn resolve(&self, action: &ActionConfig, prop: ActionProp) -> Option<PropValue<'a>> {
		let action_type = action.action_type.as_str();

		if let Some(value) = self.from_component(action, prop) {
			match self.component_lookup {
				ComponentLookup::Prefer => {
					tracing::trace!(domain = "actions", action_type, %prop, layer = "component", "resolved");
					return Some(value);
				}
				ComponentLookup::Discard => {
					tracing::debug!(domain = "actions", action_type, %prop, "component feature action value discarded");
				}
			}
		}

		if let Some(value) = self.tree.find_action(action_type).and_then(|def| def.prop(prop)) {
			tracing::trace!(domain = "actions", action_type, %prop, layer = "tree", "resolved");
			return Some(value);
		}

		let parent = self.tree.find_sub_action_parent(action_type);
		if prop == ActionProp::ActionLabel {
			let value = parent?.prop(prop)?;
			tracing::trace!(domain = "actions", action_type, %prop, layer = "sub_action_parent", "resolved");
			return Some(value);
		}

		if let Some(value) = parent.and_then(|parent| parent.sub_action(action_type)).and_then(|sub| sub.prop(prop)) {
			tracing::trace!(domain = "actions", action_type, %prop, layer = "sub_action", "resolved");
			return Some(value);
		}

		let value = self.builtins.view(self.common_overrides).get(action_type)?.prop(prop)?;
		tracing::trace!(domain = "actions", action_type, %prop, layer = "common", "resolved");
		Some(value)
	}

	fn from_component(&self, action: &ActionConfig, prop: ActionProp) -> Option<PropValue<'a>> {
		action.component_id.as_ref()?;
		let renderer = action.renderer_name.as_deref()?;
		self.components?.find(renderer, &action.action_type)?.prop(prop)
	}

	pub fn label(&self, action: &ActionConfig) -> Option<&'a str> {
		self.resolve(action, ActionProp::ActionLabel)?.as_text()
	}

	pub fn description(&self, action: &ActionConfig) -> Option<&'a str> {
		self.resolve(action, ActionProp::Description)?.as_text()
	}

	pub fn schema(&self, action: &ActionConfig) -> Option<&'a Value> {
		self.resolve(action, ActionProp::Schema)?.as_schema()
	}

	pub fn desc_detail(&self, action: &ActionConfig) -> Option<&'a DescDetail> {
		self.resolve(action, ActionProp::DescDetail)?.as_desc()
	}

	pub fn inner_args(&self, action: &ActionConfig) -> Option<&'a [String]> {
		self.resolve(action, ActionProp::InnerArgs)?.as_args()
	}

	/// Whether the argument `name` of `action` renders inline.
	pub fn is_inner_arg(&self, action: &ActionConfig, name: &str) -> bool {
		self.inner_args(action).is_some_and(|args| args.iter().any(|arg| arg == name))
	}

	/// Renders the one-line summary of `action`.
	pub fn describe(&self, action: &ActionConfig) -> Option<String> {
		self.desc_detail(action)?.render(&DescInfo::from_config(action))
	}

	/// The sub-action parent of `action` in the tree, if its type is a sub-action.
	pub fn sub_action_parent(&self, action: &ActionConfig) -> Option<&'a ActionDef> {
		self.tree.find_sub_action_parent(&action.action_type)
	}

	/// The action type `action` is grouped under in the panel.
	pub fn kind_of<'b>(&self, action: &'b ActionConfig) -> &'b str
	where
		'a: 'b,
	{
		classify(action, self.sub_action_parent(action))
	}
}

/// Resolves `prop` for `action` against the given registries with the default
/// [`ComponentLookup`].
pub fn resolve<'a>(
	action: &ActionConfig, prop: ActionProp, tree: &'a ActionTree, components: &'a ComponentActions, common_overrides: Option<&'a CommonActions>,
) -> Option<PropValue<'a>> {
	let mut resolver = ActionResolver::new(tree).with_components(components);
	if let Some(overrides) = common_overrides {
		resolver = resolver.with_common_overrides(overrides);
	}
	resolver.resolve(action, prop)
}

/// The effective action type of `action`.
///
/// Component feature actions report as `component`; sub-actions report under
/// their parent's type; anything else keeps its own type.
pub fn classify<'a>(action: &'a ActionConfig, sub_action_parent: Option<&'a ActionDef>) -> &'a str {
	if action.is_cmpt_action {
		COMPONENT_ACTION_TYPE
	} else if let Some(parent) = sub_action_parent {
		&parent.action_type
	} else {
		&action.action_type
	}
}
