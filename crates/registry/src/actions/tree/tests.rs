use super::*;

fn sample_tree() -> ActionTree {
	ActionTree::new(vec![
		ActionNode::group(
			"Page",
			[
				ActionDef::new("openPage").with_label("Open page").into(),
				ActionDef::new("refresh").with_label("Refresh page").into(),
			],
		),
		ActionNode::group(
			"Components",
			[ActionDef::new("component")
				.with_label("Component action")
				.with_sub_actions([
					ActionDef::new("setValue"),
					ActionDef::new("reload").with_label("Reload"),
				])
				.into()],
		),
		ActionDef::new("custom").with_label("Custom JS").into(),
	])
}

#[test]
fn walk_is_preorder_with_sub_actions_in_place() {
	let tree = sample_tree();
	let order: Vec<&str> = tree.walk().map(|def| def.action_type.as_str()).collect();
	assert_eq!(order, ["openPage", "refresh", "component", "setValue", "reload", "custom"]);
}

#[test]
fn walk_of_empty_tree_yields_nothing() {
	assert_eq!(ActionTree::default().walk().count(), 0);
}

#[test]
fn finds_unique_action_at_any_depth() {
	let tree = sample_tree();
	for action_type in ["openPage", "refresh", "component", "setValue", "reload", "custom"] {
		let found = find_action_node(&tree, action_type).unwrap();
		assert_eq!(found.action_type, action_type);
	}
	assert_eq!(find_action_node(&tree, "reload").unwrap().action_label.as_deref(), Some("Reload"));
}

#[test]
fn missing_action_is_none() {
	assert!(find_action_node(&sample_tree(), "broadcast").is_none());
	assert!(find_sub_action_node(&sample_tree(), "broadcast").is_none());
}

#[test]
fn duplicate_action_type_resolves_to_root_level_node() {
	let tree = ActionTree::new(vec![
		ActionDef::new("x").with_label("root x").into(),
		ActionDef::new("wrapper").with_sub_actions([ActionDef::new("x").with_label("nested x")]).into(),
	]);

	let found = find_action_node(&tree, "x").unwrap();
	assert_eq!(found.action_label.as_deref(), Some("root x"));
}

#[test]
fn duplicate_action_type_follows_preorder() {
	// A nested duplicate under an earlier sibling is reached before a later root node.
	let tree = ActionTree::new(vec![
		ActionDef::new("wrapper").with_sub_actions([ActionDef::new("x").with_label("nested x")]).into(),
		ActionDef::new("x").with_label("root x").into(),
	]);

	let found = find_action_node(&tree, "x").unwrap();
	assert_eq!(found.action_label.as_deref(), Some("nested x"));
}

#[test]
fn sub_action_search_returns_parent() {
	let tree = sample_tree();
	let parent = find_sub_action_node(&tree, "setValue").unwrap();
	assert_eq!(parent.action_type, "component");
	assert_eq!(parent.action_label.as_deref(), Some("Component action"));
	assert!(parent.sub_action("setValue").is_some());
}

#[test]
fn sub_action_search_ignores_top_level_matches() {
	assert!(find_sub_action_node(&sample_tree(), "custom").is_none());
}

#[test]
fn deserializes_groups_and_actions() {
	let tree: ActionTree = serde_json::from_value(serde_json::json!([
		{ "actionLabel": "Page", "children": [{ "actionType": "refresh" }] },
		{ "actionType": "component", "actions": [{ "actionType": "reload" }] }
	]))
	.unwrap();

	assert!(matches!(&tree.nodes()[0], ActionNode::Group(group) if group.children.len() == 1));
	assert_eq!(find_sub_action_node(&tree, "reload").unwrap().action_type, "component");
}
