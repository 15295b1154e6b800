//! Per-component-type feature actions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ActionDef;

/// Renderer type name to the feature actions that component kind exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentActions {
	by_renderer: FxHashMap<String, Vec<ActionDef>>,
}

impl ComponentActions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the feature actions of `renderer`, returning the previous list.
	pub fn insert(&mut self, renderer: impl Into<String>, actions: Vec<ActionDef>) -> Option<Vec<ActionDef>> {
		self.by_renderer.insert(renderer.into(), actions)
	}

	pub fn with(mut self, renderer: impl Into<String>, actions: Vec<ActionDef>) -> Self {
		self.insert(renderer, actions);
		self
	}

	/// Feature actions of `renderer`.
	pub fn actions_for(&self, renderer: &str) -> Option<&[ActionDef]> {
		self.by_renderer.get(renderer).map(Vec::as_slice)
	}

	/// Feature action of `renderer` with the given action type.
	pub fn find(&self, renderer: &str, action_type: &str) -> Option<&ActionDef> {
		self.actions_for(renderer)?.iter().find(|def| def.action_type == action_type)
	}

	pub fn renderers(&self) -> impl Iterator<Item = &str> {
		self.by_renderer.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[ActionDef])> {
		self.by_renderer.iter().map(|(renderer, actions)| (renderer.as_str(), actions.as_slice()))
	}

	pub fn is_empty(&self) -> bool {
		self.by_renderer.is_empty()
	}
}
