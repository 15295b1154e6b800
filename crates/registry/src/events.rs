//! Component event definitions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An event a component can emit, e.g. `click` or `change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDef {
	/// Event key; unique within a component's event list.
	pub event_name: String,
	/// Display label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event_label: Option<String>,
	/// Help text.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl EventDef {
	pub fn new(event_name: impl Into<String>) -> Self {
		Self {
			event_name: event_name.into(),
			..Self::default()
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.event_label = Some(label.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Renderer type name to the events that component kind emits.
///
/// Each renderer owns its list; two renderers may both emit `click`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentEvents {
	by_renderer: FxHashMap<String, Vec<EventDef>>,
}

impl ComponentEvents {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the events of `renderer`, returning the previous list.
	pub fn insert(&mut self, renderer: impl Into<String>, events: Vec<EventDef>) -> Option<Vec<EventDef>> {
		self.by_renderer.insert(renderer.into(), events)
	}

	pub fn with(mut self, renderer: impl Into<String>, events: Vec<EventDef>) -> Self {
		self.insert(renderer, events);
		self
	}

	/// Events of `renderer`.
	pub fn events_for(&self, renderer: &str) -> Option<&[EventDef]> {
		self.by_renderer.get(renderer).map(Vec::as_slice)
	}

	/// Renderer types in name order.
	pub fn renderers(&self) -> Vec<&str> {
		let mut renderers: Vec<&str> = self.by_renderer.keys().map(String::as_str).collect();
		renderers.sort_unstable();
		renderers
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[EventDef])> {
		self.by_renderer.iter().map(|(renderer, events)| (renderer.as_str(), events.as_slice()))
	}

	/// Number of events across every renderer.
	pub fn len(&self) -> usize {
		self.by_renderer.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.by_renderer.values().all(Vec::is_empty)
	}
}

fn find_event<'a>(events: &'a [EventDef], name: &str) -> Option<&'a EventDef> {
	events.iter().find(|event| event.event_name == name)
}

/// Label of the event named `name`.
pub fn event_label<'a>(events: &'a [EventDef], name: &str) -> Option<&'a str> {
	find_event(events, name)?.event_label.as_deref()
}

/// Description of the event named `name`.
pub fn event_description<'a>(events: &'a [EventDef], name: &str) -> Option<&'a str> {
	find_event(events, name)?.description.as_deref()
}
