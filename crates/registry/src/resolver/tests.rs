use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use super::*;
use crate::actions::ActionNode;

fn tree() -> ActionTree {
	ActionTree::new(vec![
		ActionNode::group(
			"Page",
			[
				ActionDef::new("foo").with_schema(json!("TREE")).into(),
				ActionDef::new("refresh").with_label("Refresh page").into(),
			],
		),
		ActionDef::new("group")
			.with_label("Group Label")
			.with_description("Grouped actions")
			.with_sub_actions([
				ActionDef::new("child"),
				ActionDef::new("setValue").with_description("Assign component data"),
				ActionDef::new("styled").with_schema(json!("SUB")),
			])
			.into(),
	])
}

fn common() -> CommonActions {
	[
		ActionDef::new("foo").with_schema(json!("COMMON")),
		ActionDef::new("child").with_schema(json!("COMMON CHILD")).with_label("Common child"),
		ActionDef::new("styled").with_schema(json!("COMMON STYLED")),
		ActionDef::new("orphan").with_schema(json!("COMMON ORPHAN")).with_label("Orphan"),
	]
	.into_iter()
	.collect()
}

fn components() -> ComponentActions {
	ComponentActions::new().with(
		"form",
		vec![
			ActionDef::new("foo").with_schema(json!("COMPONENT")),
			ActionDef::new("submit").with_label("Submit form"),
		],
	)
}

#[test]
fn tree_wins_over_common() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);

	assert_eq!(resolver.schema(&ActionConfig::new("foo")), Some(&json!("TREE")));
}

#[test]
fn sub_action_borrows_parent_label() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);

	assert_eq!(resolver.label(&ActionConfig::new("child")), Some("Group Label"));
}

#[test]
fn label_never_comes_from_common() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);

	assert_eq!(resolver.label(&ActionConfig::new("orphan")), None);
	assert_eq!(resolver.schema(&ActionConfig::new("orphan")), Some(&json!("COMMON ORPHAN")));
}

#[test]
fn sub_action_value_wins_over_common() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);

	assert_eq!(resolver.schema(&ActionConfig::new("styled")), Some(&json!("SUB")));
	assert_eq!(resolver.description(&ActionConfig::new("setValue")), Some("Assign component data"));
}

#[test]
fn sub_action_without_property_falls_back_to_common() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);

	assert_eq!(resolver.schema(&ActionConfig::new("child")), Some(&json!("COMMON CHILD")));
}

#[test]
fn overrides_take_precedence_over_builtins() {
	let (tree, common) = (tree(), common());
	let overrides: CommonActions = [ActionDef::new("child").with_schema(json!("OVERRIDE"))].into_iter().collect();
	let resolver = ActionResolver::new(&tree).with_builtins(&common).with_common_overrides(&overrides);

	assert_eq!(resolver.schema(&ActionConfig::new("child")), Some(&json!("OVERRIDE")));
	assert_eq!(resolver.schema(&ActionConfig::new("orphan")), Some(&json!("COMMON ORPHAN")));
}

#[test]
fn override_entry_replaces_builtin_entry_wholesale() {
	let tree = ActionTree::default();
	let overrides: CommonActions = [ActionDef::new("setValue").with_description("Custom assign")].into_iter().collect();
	let resolver = ActionResolver::new(&tree).with_common_overrides(&overrides);
	let action = ActionConfig::new("setValue");

	assert_eq!(resolver.description(&action), Some("Custom assign"));
	assert_eq!(resolver.schema(&action), None);
	assert_eq!(resolver.inner_args(&action), None);
}

#[test]
fn unknown_action_resolves_to_nothing() {
	let (tree, common) = (tree(), common());
	let resolver = ActionResolver::new(&tree).with_builtins(&common);
	let action = ActionConfig::new("broadcast");

	for prop in ActionProp::ALL {
		assert_eq!(resolver.resolve(&action, prop), None, "{prop}");
	}
}

#[test]
fn builtins_are_the_default_common_layer() {
	let tree = ActionTree::default();
	let resolver = ActionResolver::new(&tree);
	let action = ActionConfig::new("setValue").with_arg("valueInput", "1");

	assert!(resolver.is_inner_arg(&action, "valueInput"));
	assert!(!resolver.is_inner_arg(&action, "other"));
	assert!(resolver.schema(&action).is_some());
	assert_eq!(resolver.describe(&action).unwrap(), "Set the value of  to 1");
}

#[test]
fn component_feature_action_preferred_by_default() {
	let (tree, common, components) = (tree(), common(), components());
	let resolver = ActionResolver::new(&tree).with_builtins(&common).with_components(&components);
	let action = ActionConfig::new("foo").targeting("u:form", "form");

	assert_eq!(resolver.schema(&action), Some(&json!("COMPONENT")));
	assert_eq!(resolver.label(&ActionConfig::new("submit").targeting("u:form", "form")), Some("Submit form"));
}

#[test]
fn discarded_component_value_falls_through_to_tree() {
	let (tree, common, components) = (tree(), common(), components());
	let resolver = ActionResolver::new(&tree)
		.with_builtins(&common)
		.with_components(&components)
		.with_component_lookup(ComponentLookup::Discard);

	assert_eq!(resolver.schema(&ActionConfig::new("foo").targeting("u:form", "form")), Some(&json!("TREE")));
	assert_eq!(resolver.label(&ActionConfig::new("submit").targeting("u:form", "form")), None);
}

#[rstest]
#[case::no_target(ActionConfig::new("foo"))]
#[case::other_renderer(ActionConfig::new("foo").targeting("u:chart", "chart"))]
#[case::no_renderer(ActionConfig { component_id: Some("u:form".into()), ..ActionConfig::new("foo") })]
fn component_layer_needs_target_and_renderer(#[case] action: ActionConfig) {
	let (tree, common, components) = (tree(), common(), components());
	let resolver = ActionResolver::new(&tree).with_builtins(&common).with_components(&components);

	assert_eq!(resolver.schema(&action), Some(&json!("TREE")));
}

#[test]
fn free_function_matches_resolver() {
	let (tree, components) = (tree(), components());
	let overrides: CommonActions = [ActionDef::new("child").with_schema(json!("OVERRIDE"))].into_iter().collect();
	let action = ActionConfig::new("child");

	assert_eq!(
		resolve(&action, ActionProp::Schema, &tree, &components, Some(&overrides)),
		Some(PropValue::Schema(&json!("OVERRIDE")))
	);
	assert_eq!(
		resolve(&action, ActionProp::ActionLabel, &tree, &components, None),
		Some(PropValue::Text("Group Label"))
	);
}

#[rstest]
#[case::sub_action(ActionConfig::new("child"), "group")]
#[case::component_feature(ActionConfig::new("x").component_feature(), "component")]
#[case::component_feature_sub_action(ActionConfig::new("child").component_feature(), "component")]
#[case::plain(ActionConfig::new("refresh"), "refresh")]
fn kind_of_classifies(#[case] action: ActionConfig, #[case] expected: &str) {
	let tree = tree();
	assert_eq!(ActionResolver::new(&tree).kind_of(&action), expected);
}

#[test]
fn classify_uses_given_parent() {
	let parent = ActionDef::new("group");
	assert_eq!(classify(&ActionConfig::new("child"), Some(&parent)), "group");
	assert_eq!(classify(&ActionConfig::new("x").component_feature(), None), "component");
	assert_eq!(classify(&ActionConfig::new("x"), None), "x");
}

/// Collects the `layer` field of every resolution event.
#[derive(Clone, Default)]
struct ResolvedLayers(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for ResolvedLayers {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = LayerField(None);
		event.record(&mut visitor);
		if let Some(layer) = visitor.0 {
			self.0.lock().push(layer);
		}
	}
}

struct LayerField(Option<String>);

impl Visit for LayerField {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "layer" {
			self.0 = Some(value.to_string());
		}
	}

	fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

fn resolved_layers(action: &ActionConfig, prop: ActionProp) -> Vec<String> {
	let tree = tree();
	let layers = ResolvedLayers::default();
	let subscriber = tracing_subscriber::registry().with(layers.clone());

	tracing::subscriber::with_default(subscriber, || {
		ActionResolver::new(&tree).resolve(action, prop);
	});

	layers.0.lock().clone()
}

#[rstest]
#[case::tree(ActionConfig::new("refresh"), ActionProp::ActionLabel, "tree")]
#[case::parent_label(ActionConfig::new("child"), ActionProp::ActionLabel, "sub_action_parent")]
#[case::common(ActionConfig::new("reload"), ActionProp::DescDetail, "common")]
fn every_resolving_layer_is_traced(#[case] action: ActionConfig, #[case] prop: ActionProp, #[case] layer: &str) {
	assert_eq!(resolved_layers(&action, prop), [layer]);
}

#[test]
fn unresolved_label_emits_no_trace() {
	assert!(resolved_layers(&ActionConfig::new("missing"), ActionProp::ActionLabel).is_empty());
}
