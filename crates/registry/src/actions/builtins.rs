//! Built-in common action defaults.

use std::sync::LazyLock;

use serde_json::{Value, json};

use super::{ActionDef, CommonActions};
use crate::desc::{DescDetail, DescInfo};

/// Renderer types that hold a data scope and take key/value assignments.
const DATA_CONTAINERS: [&str; 8] = ["form", "dialog", "drawer", "wizard", "service", "page", "app", "chart"];

static BUILTINS: LazyLock<CommonActions> = LazyLock::new(|| {
	[
		ActionDef::new("setValue")
			.with_inner_args(["value", "valueInput"])
			.with_desc_detail(DescDetail::Handler(describe_set_value))
			.with_schema(set_value_schema()),
		ActionDef::new("reload").with_desc_detail(DescDetail::template("Reload component {label}")),
		ActionDef::new("clear").with_desc_detail(DescDetail::template("Clear {label}")),
		ActionDef::new("reset").with_desc_detail(DescDetail::template("Reset {label}")),
		ActionDef::new("submit").with_desc_detail(
			DescDetail::by_renderer([("form", "Submit {label}"), ("wizard", "Submit all data of {label}")]).with_fallback("{label}"),
		),
		ActionDef::new("validate").with_desc_detail(DescDetail::template("Validate {label}")),
		ActionDef::new("prev").with_desc_detail(
			DescDetail::by_renderer([
				("carousel", "Scroll {label} to the previous item"),
				("wizard", "Return {label} to the previous step"),
			])
			.with_fallback("{label}"),
		),
		ActionDef::new("next").with_desc_detail(
			DescDetail::by_renderer([
				("carousel", "Scroll {label} to the next item"),
				("wizard", "Submit the current step of {label}"),
			])
			.with_fallback("{label}"),
		),
		ActionDef::new("collapse").with_desc_detail(DescDetail::template("Collapse {label}")),
		ActionDef::new("selectAll").with_desc_detail(DescDetail::template("Select all options of {label}")),
		ActionDef::new("focus").with_desc_detail(DescDetail::template("Focus {label}")),
		ActionDef::new("refresh").with_desc_detail(DescDetail::template("Refresh the page")),
		ActionDef::new("alert").with_desc_detail(DescDetail::template("Open an alert dialog")),
		ActionDef::new("confirm").with_desc_detail(DescDetail::template("Open a confirm dialog")),
	]
	.into_iter()
	.collect()
});

/// The built-in common action registry.
pub fn builtin_common_actions() -> &'static CommonActions {
	&BUILTINS
}

/// `setValue` summary: a non-empty structured `value` wins over the `valueInput` expression.
fn describe_set_value(info: &DescInfo<'_>) -> String {
	let value = match info.arg("value") {
		Some(Value::Null) | Some(Value::Bool(false)) | None => info.arg_text("valueInput"),
		Some(Value::String(s)) if s.is_empty() => info.arg_text("valueInput"),
		Some(Value::Number(n)) if n.as_f64() == Some(0.0) => info.arg_text("valueInput"),
		Some(value) => value.to_string(),
	};
	format!("Set the value of {} to {}", info.label.unwrap_or_default(), value)
}

fn set_value_schema() -> Value {
	let is_data_container = format!("{}.includes(__rendererName)", json!(DATA_CONTAINERS));
	let key_value_items = json!([
		{ "name": "key", "type": "input-text", "placeholder": "Variable name", "required": true },
		{
			"name": "val",
			"type": "input-formula",
			"placeholder": "Variable value",
			"variables": "${variables}",
			"evalMode": false,
			"variableMode": "tabs",
			"inputMode": "input-group"
		}
	]);

	json!({
		"type": "combo",
		"name": "args",
		"multiple": false,
		"strictMode": false,
		"items": [{
			"type": "wrapper",
			"className": "p-none",
			"body": [
				{
					"type": "combo",
					"name": "value",
					"label": "Assignments",
					"multiple": true,
					"removable": true,
					"required": true,
					"addable": true,
					"strictMode": false,
					"canAccessSuperData": true,
					"mode": "horizontal",
					"items": key_value_items.clone(),
					"visibleOn": format!("data.__rendererName && {is_data_container}")
				},
				{
					"type": "combo",
					"name": "value",
					"label": "Assignments",
					"multiple": true,
					"removable": true,
					"required": true,
					"addable": true,
					"strictMode": false,
					"canAccessSuperData": true,
					"mode": "horizontal",
					"items": [{
						"type": "combo",
						"name": "item",
						"label": false,
						"renderLabel": false,
						"multiple": true,
						"removable": true,
						"required": true,
						"addable": true,
						"strictMode": false,
						"canAccessSuperData": true,
						"className": "m-l",
						"mode": "horizontal",
						"items": key_value_items
					}],
					"visibleOn": "data.__rendererName && __rendererName === 'combo'"
				},
				{
					"name": "valueInput",
					"type": "input-formula",
					"variables": "${variables}",
					"evalMode": false,
					"variableMode": "tabs",
					"inputMode": "input-group",
					"label": "Assignment",
					"size": "lg",
					"mode": "horizontal",
					"visibleOn": format!("data.__rendererName && !{is_data_container} && __rendererName !== 'combo'"),
					"required": true
				}
			]
		}]
	})
}
