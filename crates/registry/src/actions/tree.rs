//! The action tree offered by the action picker, and its search primitives.
//!
//! Both searches walk the same pre-order traversal: group children and
//! sub-action lists are visited in place, siblings in declaration order. When
//! an action type appears more than once, the first one encountered wins.

use std::slice;

use serde::{Deserialize, Serialize};

use super::ActionDef;

#[cfg(test)]
mod tests;

/// A heading in the action picker grouping related actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroup {
	/// Heading label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action_label: Option<String>,
	/// Grouped nodes.
	pub children: Vec<ActionNode>,
}

/// A node of the action tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionNode {
	Group(ActionGroup),
	Action(ActionDef),
}

impl ActionNode {
	pub fn group(label: impl Into<String>, children: impl IntoIterator<Item = ActionNode>) -> Self {
		Self::Group(ActionGroup {
			action_label: Some(label.into()),
			children: children.into_iter().collect(),
		})
	}
}

impl From<ActionDef> for ActionNode {
	fn from(def: ActionDef) -> Self {
		Self::Action(def)
	}
}

/// Ordered action tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTree {
	nodes: Vec<ActionNode>,
}

impl ActionTree {
	pub fn new(nodes: Vec<ActionNode>) -> Self {
		Self { nodes }
	}

	pub fn nodes(&self) -> &[ActionNode] {
		&self.nodes
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub(crate) fn extend(&mut self, nodes: impl IntoIterator<Item = ActionNode>) {
		self.nodes.extend(nodes);
	}

	/// Pre-order walk over every action definition, sub-actions included.
	pub fn walk(&self) -> Walk<'_> {
		Walk {
			stack: vec![Frame::Nodes(self.nodes.iter())],
		}
	}

	/// First definition with the given action type.
	pub fn find_action(&self, action_type: &str) -> Option<&ActionDef> {
		self.walk().find(|def| def.action_type == action_type)
	}

	/// First definition with a direct sub-action of the given type.
	pub fn find_sub_action_parent(&self, action_type: &str) -> Option<&ActionDef> {
		self.walk().find(|def| def.has_sub_action(action_type))
	}
}

impl From<Vec<ActionNode>> for ActionTree {
	fn from(nodes: Vec<ActionNode>) -> Self {
		Self::new(nodes)
	}
}

impl FromIterator<ActionNode> for ActionTree {
	fn from_iter<T: IntoIterator<Item = ActionNode>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

/// Returns the first node in `tree` whose action type equals `action_type`.
pub fn find_action_node<'a>(tree: &'a ActionTree, action_type: &str) -> Option<&'a ActionDef> {
	tree.find_action(action_type)
}

/// Returns the first node in `tree` owning a direct sub-action of type `action_type`.
///
/// The parent is returned, not the sub-action itself.
pub fn find_sub_action_node<'a>(tree: &'a ActionTree, action_type: &str) -> Option<&'a ActionDef> {
	tree.find_sub_action_parent(action_type)
}

enum Frame<'a> {
	Nodes(slice::Iter<'a, ActionNode>),
	SubActions(slice::Iter<'a, ActionDef>),
}

enum Step<'a> {
	Node(&'a ActionNode),
	Def(&'a ActionDef),
}

/// Pre-order iterator returned by [`ActionTree::walk`].
pub struct Walk<'a> {
	stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for Walk<'a> {
	type Item = &'a ActionDef;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let step = match self.stack.last_mut()? {
				Frame::Nodes(iter) => iter.next().map(Step::Node),
				Frame::SubActions(iter) => iter.next().map(Step::Def),
			};

			let def = match step {
				None => {
					self.stack.pop();
					continue;
				}
				Some(Step::Node(ActionNode::Group(group))) => {
					self.stack.push(Frame::Nodes(group.children.iter()));
					continue;
				}
				Some(Step::Node(ActionNode::Action(def))) | Some(Step::Def(def)) => def,
			};

			if !def.actions.is_empty() {
				self.stack.push(Frame::SubActions(def.actions.iter()));
			}
			return Some(def);
		}
	}
}
