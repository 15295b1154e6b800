//! Registry configuration files.
//!
//! A [`RegistryConfig`] describes the action tree, component feature actions,
//! common action overrides and events the host editor supplies. Files are TOML
//! or JSON, picked by extension; both use the editor's field names.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::actions::{ActionNode, CommonActions, ComponentActions};
use crate::db::{Catalog, RegistryError};
use crate::events::ComponentEvents;
use crate::resolver::ComponentLookup;

pub mod load;

pub use load::{ConfigLoadReport, load_from_dir, load_registry_config, parse_registry_config};


/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The file could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// File that failed.
		path: PathBuf,
		/// Underlying I/O error.
		source: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error parsing JSON syntax or shape.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The file extension names no supported format.
	#[error("unsupported config format: {0} (expected .toml or .json)")]
	UnsupportedFormat(String),

	/// The parsed registries are inconsistent.
	#[error(transparent)]
	Registry(#[from] RegistryError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parsed registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
	/// Nodes of the action tree, in picker order.
	pub action_tree: Vec<ActionNode>,
	/// Feature actions per renderer type.
	pub component_actions: ComponentActions,
	/// Overrides laid over the built-in common actions.
	pub common_actions: CommonActions,
	/// Events per renderer type.
	pub events: ComponentEvents,
	/// Handling of component feature action values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub component_lookup: Option<ComponentLookup>,
}

impl RegistryConfig {
	/// Merge another config into this one.
	///
	/// Values from `other` override values in `self`: tree nodes are appended,
	/// component action lists are replaced per renderer type, common overrides
	/// per action type and event lists per renderer type.
	pub fn merge(&mut self, other: RegistryConfig) {
		self.action_tree.extend(other.action_tree);

		for (renderer, actions) in other.component_actions.iter() {
			self.component_actions.insert(renderer, actions.to_vec());
		}

		for def in other.common_actions.iter() {
			self.common_actions.insert(def.clone());
		}

		for (renderer, events) in other.events.iter() {
			self.events.insert(renderer, events.to_vec());
		}

		if other.component_lookup.is_some() {
			self.component_lookup = other.component_lookup;
		}
	}

	/// Validates the registries and freezes them into a [`Catalog`].
	pub fn into_catalog(self) -> std::result::Result<Catalog, RegistryError> {
		let mut builder = Catalog::builder()
			.action_nodes(self.action_tree)
			.common_overrides(self.common_actions)
			.component_events(self.events)
			.component_lookup(self.component_lookup.unwrap_or_default());
		for (renderer, actions) in self.component_actions.iter() {
			builder = builder.component_actions(renderer, actions.to_vec());
		}
		builder.build()
	}
}
