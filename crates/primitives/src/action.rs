use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Argument bag of a configured action.
pub type ActionArgs = Map<String, Value>;

/// An action the user attached to a component event.
///
/// Field names on the wire follow the editor's panel data: the target
/// component context filled in by the component picker is carried in the
/// double-underscore fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
	/// Referenced action type.
	pub action_type: String,
	/// Target component, when the action acts on another component.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub component_id: Option<String>,
	/// Marks a component feature action (configured under the `component` umbrella).
	#[serde(rename = "__isCmptAction", default, skip_serializing_if = "std::ops::Not::not")]
	pub is_cmpt_action: bool,
	/// Renderer type of the target component (e.g. `form`, `chart`).
	#[serde(rename = "__rendererName", default, skip_serializing_if = "Option::is_none")]
	pub renderer_name: Option<String>,
	/// Display label of the target component.
	#[serde(rename = "__rendererLabel", default, skip_serializing_if = "Option::is_none")]
	pub renderer_label: Option<String>,
	/// Editor tree node of the target component.
	#[serde(rename = "__nodeId", default, skip_serializing_if = "Option::is_none")]
	pub node_id: Option<String>,
	/// Action arguments.
	#[serde(default, skip_serializing_if = "Map::is_empty")]
	pub args: ActionArgs,
}

impl ActionConfig {
	/// Creates a configured action of the given type with no target and no args.
	pub fn new(action_type: impl Into<String>) -> Self {
		Self {
			action_type: action_type.into(),
			..Self::default()
		}
	}

	/// Points the action at another component of the given renderer type.
	pub fn targeting(mut self, component_id: impl Into<String>, renderer_name: impl Into<String>) -> Self {
		self.component_id = Some(component_id.into());
		self.renderer_name = Some(renderer_name.into());
		self
	}

	/// Sets the display label of the target component.
	pub fn with_renderer_label(mut self, label: impl Into<String>) -> Self {
		self.renderer_label = Some(label.into());
		self
	}

	/// Flags the action as a component feature action.
	pub fn component_feature(mut self) -> Self {
		self.is_cmpt_action = true;
		self
	}

	/// Adds an argument, replacing any previous value under `name`.
	pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.args.insert(name.into(), value.into());
		self
	}

	/// Returns the argument stored under `name`.
	pub fn arg(&self, name: &str) -> Option<&Value> {
		self.args.get(name)
	}

	/// Whether the action has a target component selected.
	pub fn has_target(&self) -> bool {
		self.component_id.is_some()
	}
}
