use strum::{Display, EnumString, IntoStaticStr};

/// A property of an action definition that can be resolved for a configured action.
///
/// String forms match the editor's definition field names, so `"actionLabel"`
/// parses to [`ActionProp::ActionLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ActionProp {
	/// Display label of the action.
	#[strum(serialize = "actionLabel")]
	ActionLabel,
	/// Short help text shown under the action selector.
	#[strum(serialize = "description")]
	Description,
	/// Renderer producing the human-readable summary of a configured action.
	#[strum(serialize = "descDetail")]
	DescDetail,
	/// Configuration form fragment.
	#[strum(serialize = "schema")]
	Schema,
	/// Argument names rendered inline rather than boxed.
	#[strum(serialize = "innerArgs")]
	InnerArgs,
}

impl ActionProp {
	/// Every property, in definition field order.
	pub const ALL: [ActionProp; 5] = [
		ActionProp::ActionLabel,
		ActionProp::Description,
		ActionProp::DescDetail,
		ActionProp::Schema,
		ActionProp::InnerArgs,
	];

	/// Field name of the property.
	pub fn name(self) -> &'static str {
		self.into()
	}
}
