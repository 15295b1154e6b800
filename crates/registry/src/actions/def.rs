//! Action definition types.

use actdesk_primitives::ActionProp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::desc::DescDetail;
use crate::resolver::PropValue;

/// Definition of an action offered by the event panel.
///
/// The same shape is used for top-level actions, sub-actions nested in a
/// parent's [`actions`](Self::actions) list, per-component-type feature
/// actions, and common action defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDef {
	/// Action type; unique among direct siblings.
	///
	/// Common action entries may omit it in config files, the registry key fills it in.
	#[serde(default)]
	pub action_type: String,
	/// Display label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action_label: Option<String>,
	/// Short help text shown under the action selector.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Renderer for the configured-action summary.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub desc_detail: Option<DescDetail>,
	/// Configuration form fragment.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema: Option<Value>,
	/// Sub-actions available once this action is selected.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub actions: Vec<ActionDef>,
	/// Argument names rendered inline rather than boxed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub inner_args: Option<Vec<String>>,
}

impl ActionDef {
	pub fn new(action_type: impl Into<String>) -> Self {
		Self {
			action_type: action_type.into(),
			..Self::default()
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.action_label = Some(label.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_desc_detail(mut self, desc: DescDetail) -> Self {
		self.desc_detail = Some(desc);
		self
	}

	pub fn with_schema(mut self, schema: Value) -> Self {
		self.schema = Some(schema);
		self
	}

	pub fn with_sub_actions(mut self, actions: impl IntoIterator<Item = ActionDef>) -> Self {
		self.actions.extend(actions);
		self
	}

	pub fn with_inner_args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.inner_args = Some(args.into_iter().map(Into::into).collect());
		self
	}

	/// Returns the direct sub-action with the given type.
	pub fn sub_action(&self, action_type: &str) -> Option<&ActionDef> {
		self.actions.iter().find(|sub| sub.action_type == action_type)
	}

	/// Whether a direct sub-action has the given type.
	pub fn has_sub_action(&self, action_type: &str) -> bool {
		self.sub_action(action_type).is_some()
	}

	/// Returns the value of `prop` carried by this definition, if any.
	pub fn prop(&self, prop: ActionProp) -> Option<PropValue<'_>> {
		match prop {
			ActionProp::ActionLabel => self.action_label.as_deref().map(PropValue::Text),
			ActionProp::Description => self.description.as_deref().map(PropValue::Text),
			ActionProp::DescDetail => self.desc_detail.as_ref().map(PropValue::Desc),
			ActionProp::Schema => self.schema.as_ref().map(PropValue::Schema),
			ActionProp::InnerArgs => self.inner_args.as_deref().map(PropValue::Args),
		}
	}
}
