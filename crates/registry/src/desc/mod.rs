//! Description renderers for configured actions.
//!
//! A [`DescDetail`] turns a configured action into the one-line summary shown
//! in the event panel, e.g. "Reload component User table". Templates use
//! `{label}` for the target component label, `{renderer}` for its renderer
//! type and `{args.<name>}` for an action argument.

use actdesk_primitives::{ActionArgs, ActionConfig};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// Native description renderer.
pub type DescHandler = fn(&DescInfo<'_>) -> String;

/// What a description renderer sees of a configured action.
#[derive(Debug, Clone, Copy)]
pub struct DescInfo<'a> {
	/// Display label of the target component.
	pub label: Option<&'a str>,
	/// Renderer type of the target component.
	pub renderer: Option<&'a str>,
	/// Action arguments.
	pub args: &'a ActionArgs,
}

impl<'a> DescInfo<'a> {
	pub fn from_config(action: &'a ActionConfig) -> Self {
		Self {
			label: action.renderer_label.as_deref(),
			renderer: action.renderer_name.as_deref(),
			args: &action.args,
		}
	}

	pub fn arg(&self, name: &str) -> Option<&'a Value> {
		self.args.get(name)
	}

	/// Argument as display text: strings verbatim, other values as compact
	/// JSON, absent or null as an empty string.
	pub fn arg_text(&self, name: &str) -> String {
		match self.arg(name) {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(s)) => s.clone(),
			Some(value) => value.to_string(),
		}
	}
}

/// Templates chosen by the target's renderer type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererTemplates {
	pub by_renderer: FxHashMap<String, String>,
	/// Used when the renderer type is unknown or has no template.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fallback: Option<String>,
}

/// A description renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescDetail {
	Template(String),
	ByRenderer(RendererTemplates),
	#[serde(skip)]
	Handler(DescHandler),
}

impl DescDetail {
	pub fn template(template: impl Into<String>) -> Self {
		Self::Template(template.into())
	}

	pub fn by_renderer<I, K, V>(templates: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self::ByRenderer(RendererTemplates {
			by_renderer: templates.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
			fallback: None,
		})
	}

	/// Sets the fallback template of a renderer table. No effect on other variants.
	pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
		if let Self::ByRenderer(table) = &mut self {
			table.fallback = Some(template.into());
		}
		self
	}

	/// Renders the summary, or `None` when a renderer table has no entry for
	/// the target and no fallback.
	pub fn render(&self, info: &DescInfo<'_>) -> Option<String> {
		match self {
			Self::Template(template) => Some(fill_template(template, info)),
			Self::ByRenderer(table) => {
				let template = info
					.renderer
					.and_then(|renderer| table.by_renderer.get(renderer))
					.or(table.fallback.as_ref())?;
				Some(fill_template(template, info))
			}
			Self::Handler(handler) => Some(handler(info)),
		}
	}
}

impl PartialEq for DescDetail {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Template(a), Self::Template(b)) => a == b,
			(Self::ByRenderer(a), Self::ByRenderer(b)) => a == b,
			(Self::Handler(a), Self::Handler(b)) => std::ptr::fn_addr_eq(*a, *b),
			_ => false,
		}
	}
}

/// Substitutes placeholders; unknown placeholders and unmatched braces are kept as written.
fn fill_template(template: &str, info: &DescInfo<'_>) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let Some(close) = after.find('}') else {
			out.push_str(&rest[open..]);
			return out;
		};

		let key = &after[..close];
		match placeholder(key, info) {
			Some(text) => out.push_str(&text),
			None => out.push_str(&rest[open..open + close + 2]),
		}
		rest = &after[close + 1..];
	}

	out.push_str(rest);
	out
}

fn placeholder(key: &str, info: &DescInfo<'_>) -> Option<String> {
	match key {
		"label" => Some(info.label.unwrap_or_default().to_string()),
		"renderer" => Some(info.renderer.unwrap_or_default().to_string()),
		_ => key.strip_prefix("args.").map(|name| info.arg_text(name)),
	}
}
