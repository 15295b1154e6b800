//! Common action registry.
//!
//! Maps an action type to the default definition used when neither the
//! component registry nor the action tree supplies a property. Callers layer
//! overrides on top; an override entry replaces the built-in entry for the
//! same action type as a whole, properties are never mixed between the two.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ActionDef;

/// Action type to default definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FxHashMap<String, ActionDef>", into = "FxHashMap<String, ActionDef>")]
pub struct CommonActions {
	entries: FxHashMap<String, ActionDef>,
}

impl CommonActions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `def` under its own action type, returning the entry it replaced.
	pub fn insert(&mut self, def: ActionDef) -> Option<ActionDef> {
		self.entries.insert(def.action_type.clone(), def)
	}

	pub fn get(&self, action_type: &str) -> Option<&ActionDef> {
		self.entries.get(action_type)
	}

	pub fn contains(&self, action_type: &str) -> bool {
		self.entries.contains_key(action_type)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ActionDef> {
		self.entries.values()
	}

	/// Returns a new registry with `overrides` laid over `self`.
	///
	/// For every action type present in `overrides` the override entry is kept
	/// and the entry of `self` is dropped.
	pub fn overlay(&self, overrides: &CommonActions) -> CommonActions {
		let mut merged = self.clone();
		for def in overrides.iter() {
			merged.insert(def.clone());
		}
		merged
	}

	/// Borrowed view with the same precedence as [`overlay`](Self::overlay).
	pub fn view<'a>(&'a self, overrides: Option<&'a CommonActions>) -> CommonActionView<'a> {
		CommonActionView { base: self, overrides }
	}
}

impl FromIterator<ActionDef> for CommonActions {
	fn from_iter<T: IntoIterator<Item = ActionDef>>(iter: T) -> Self {
		let mut actions = Self::new();
		for def in iter {
			actions.insert(def);
		}
		actions
	}
}

impl From<FxHashMap<String, ActionDef>> for CommonActions {
	fn from(map: FxHashMap<String, ActionDef>) -> Self {
		map.into_iter()
			.map(|(action_type, mut def)| {
				def.action_type = action_type;
				def
			})
			.collect()
	}
}

impl From<CommonActions> for FxHashMap<String, ActionDef> {
	fn from(actions: CommonActions) -> Self {
		actions.entries
	}
}

/// Layered lookup over a base registry and optional overrides.
#[derive(Debug, Clone, Copy)]
pub struct CommonActionView<'a> {
	base: &'a CommonActions,
	overrides: Option<&'a CommonActions>,
}

impl<'a> CommonActionView<'a> {
	pub fn get(&self, action_type: &str) -> Option<&'a ActionDef> {
		if let Some(overrides) = self.overrides
			&& let Some(def) = overrides.get(action_type)
		{
			return Some(def);
		}
		self.base.get(action_type)
	}
}
