use rustc_hash::FxHashSet;

use super::{Catalog, RegistryError};
use crate::actions::{ActionDef, ActionNode, ActionTree, CommonActions, ComponentActions};
use crate::events::{ComponentEvents, EventDef};
use crate::resolver::ComponentLookup;

/// Accumulates registrations and validates them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
	tree: ActionTree,
	components: ComponentActions,
	common_overrides: CommonActions,
	events: ComponentEvents,
	component_lookup: ComponentLookup,
}

impl CatalogBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends nodes to the action tree.
	pub fn action_nodes(mut self, nodes: impl IntoIterator<Item = ActionNode>) -> Self {
		self.tree.extend(nodes);
		self
	}

	/// Appends a top-level action to the action tree.
	pub fn action(self, def: ActionDef) -> Self {
		self.action_nodes([ActionNode::Action(def)])
	}

	/// Replaces every component action list.
	pub fn components(mut self, components: ComponentActions) -> Self {
		self.components = components;
		self
	}

	/// Sets the feature actions of one renderer type.
	pub fn component_actions(mut self, renderer: impl Into<String>, actions: Vec<ActionDef>) -> Self {
		self.components.insert(renderer, actions);
		self
	}

	/// Adds common action overrides; later entries replace earlier ones of the same type.
	pub fn common_overrides(mut self, overrides: CommonActions) -> Self {
		self.common_overrides = self.common_overrides.overlay(&overrides);
		self
	}

	pub fn common_override(mut self, def: ActionDef) -> Self {
		self.common_overrides.insert(def);
		self
	}

	/// Replaces every renderer's event list.
	pub fn component_events(mut self, events: ComponentEvents) -> Self {
		self.events = events;
		self
	}

	/// Sets the events of one renderer type.
	pub fn renderer_events(mut self, renderer: impl Into<String>, events: impl IntoIterator<Item = EventDef>) -> Self {
		self.events.insert(renderer, events.into_iter().collect());
		self
	}

	pub fn component_lookup(mut self, lookup: ComponentLookup) -> Self {
		self.component_lookup = lookup;
		self
	}

	/// Validates sibling uniqueness and per-renderer event names, then freezes the registries.
	pub fn build(self) -> Result<Catalog, RegistryError> {
		check_nodes("action tree", self.tree.nodes())?;

		for (renderer, actions) in self.components.iter() {
			check_siblings(&format!("component actions of '{renderer}'"), actions)?;
		}

		for def in self.common_overrides.iter() {
			if def.action_type.is_empty() {
				return Err(RegistryError::EmptyActionType("common actions".into()));
			}
			check_siblings(&format!("sub-actions of '{}'", def.action_type), &def.actions)?;
		}

		for (renderer, events) in self.events.iter() {
			let mut seen = FxHashSet::default();
			for event in events {
				if !seen.insert(event.event_name.as_str()) {
					return Err(RegistryError::DuplicateEvent {
						renderer: renderer.to_string(),
						event_name: event.event_name.clone(),
					});
				}
			}
		}

		Ok(Catalog {
			tree: self.tree,
			components: self.components,
			common_overrides: self.common_overrides,
			events: self.events,
			component_lookup: self.component_lookup,
		})
	}
}

fn check_nodes(scope: &str, nodes: &[ActionNode]) -> Result<(), RegistryError> {
	let mut seen = FxHashSet::default();
	for node in nodes {
		match node {
			ActionNode::Group(group) => {
				let label = group.action_label.as_deref().unwrap_or_default();
				check_nodes(&format!("action group '{label}'"), &group.children)?;
			}
			ActionNode::Action(def) => {
				check_def(scope, def, &mut seen)?;
			}
		}
	}
	Ok(())
}

fn check_siblings(scope: &str, defs: &[ActionDef]) -> Result<(), RegistryError> {
	let mut seen = FxHashSet::default();
	defs.iter().try_for_each(|def| check_def(scope, def, &mut seen))
}

fn check_def<'a>(scope: &str, def: &'a ActionDef, seen: &mut FxHashSet<&'a str>) -> Result<(), RegistryError> {
	if def.action_type.is_empty() {
		return Err(RegistryError::EmptyActionType(scope.to_string()));
	}
	if !seen.insert(def.action_type.as_str()) {
		return Err(RegistryError::DuplicateAction {
			scope: scope.to_string(),
			action_type: def.action_type.clone(),
		});
	}
	check_siblings(&format!("sub-actions of '{}'", def.action_type), &def.actions)
}
