//! Registry catalog construction and global accessor surfaces.
//!
//! The host editor builds a [`Catalog`] at startup and [`install`]s it before
//! the event panel resolves anything. Renderer plugins registered later are
//! published as a new snapshot; readers holding the previous snapshot keep a
//! consistent view.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::actions::{ActionDef, ActionNode, ActionTree, CommonActions, ComponentActions};
use crate::events::{self, ComponentEvents, EventDef};
use crate::resolver::{ActionResolver, ComponentLookup};

pub mod builder;

pub use builder::CatalogBuilder;


/// Registry error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two siblings share an action type.
	#[error("duplicate action type '{action_type}' in {scope}")]
	DuplicateAction {
		/// Where the duplicates live, e.g. `action tree` or `component actions of 'form'`.
		scope: String,
		/// The repeated action type.
		action_type: String,
	},

	/// An action definition has an empty action type.
	#[error("action with empty action type in {0}")]
	EmptyActionType(String),

	/// Two events of one renderer share a name.
	#[error("duplicate event '{event_name}' in events of '{renderer}'")]
	DuplicateEvent {
		/// Renderer type owning the event list.
		renderer: String,
		/// The repeated event name.
		event_name: String,
	},

	/// [`install`] was called more than once.
	#[error("registry catalog already installed")]
	AlreadyInstalled,

	/// The catalog was accessed before [`install`].
	#[error("registry catalog not installed")]
	NotInstalled,
}

/// Feature actions and events contributed by a renderer plugin.
#[derive(Debug, Clone, Default)]
pub struct RendererPlugin {
	/// Renderer type the plugin provides, e.g. `chart`.
	pub renderer: String,
	/// Feature actions of the renderer.
	pub actions: Vec<ActionDef>,
	/// Events the renderer emits.
	pub events: Vec<EventDef>,
}

impl RendererPlugin {
	pub fn new(renderer: impl Into<String>) -> Self {
		Self {
			renderer: renderer.into(),
			..Self::default()
		}
	}

	pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionDef>) -> Self {
		self.actions.extend(actions);
		self
	}

	pub fn with_events(mut self, events: impl IntoIterator<Item = EventDef>) -> Self {
		self.events.extend(events);
		self
	}
}

/// Immutable bundle of every registry the resolver reads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	pub(crate) tree: ActionTree,
	pub(crate) components: ComponentActions,
	pub(crate) common_overrides: CommonActions,
	pub(crate) events: ComponentEvents,
	pub(crate) component_lookup: ComponentLookup,
}

impl Catalog {
	pub fn builder() -> CatalogBuilder {
		CatalogBuilder::new()
	}

	/// A resolver over this catalog's registries.
	pub fn resolver(&self) -> ActionResolver<'_> {
		ActionResolver::new(&self.tree)
			.with_components(&self.components)
			.with_common_overrides(&self.common_overrides)
			.with_component_lookup(self.component_lookup)
	}

	pub fn tree(&self) -> &ActionTree {
		&self.tree
	}

	pub fn components(&self) -> &ComponentActions {
		&self.components
	}

	pub fn common_overrides(&self) -> &CommonActions {
		&self.common_overrides
	}

	pub fn events(&self) -> &ComponentEvents {
		&self.events
	}

	/// Events emitted by `renderer`.
	pub fn events_for(&self, renderer: &str) -> Option<&[EventDef]> {
		self.events.events_for(renderer)
	}

	pub fn component_lookup(&self) -> ComponentLookup {
		self.component_lookup
	}

	/// Label of the event `name` emitted by `renderer`.
	pub fn event_label(&self, renderer: &str, name: &str) -> Option<&str> {
		events::event_label(self.events_for(renderer)?, name)
	}

	/// Description of the event `name` emitted by `renderer`.
	pub fn event_description(&self, renderer: &str, name: &str) -> Option<&str> {
		events::event_description(self.events_for(renderer)?, name)
	}

	/// A builder seeded with this catalog's registries.
	pub fn to_builder(&self) -> CatalogBuilder {
		CatalogBuilder::new()
			.action_nodes(self.tree.nodes().iter().cloned().collect::<Vec<ActionNode>>())
			.components(self.components.clone())
			.common_overrides(self.common_overrides.clone())
			.component_events(self.events.clone())
			.component_lookup(self.component_lookup)
	}

	/// A new catalog extended by `plugin`.
	///
	/// The plugin's action and event lists replace any lists already
	/// registered for its renderer type.
	pub fn with_plugin(&self, plugin: RendererPlugin) -> Result<Catalog, RegistryError> {
		self.to_builder()
			.component_actions(plugin.renderer.clone(), plugin.actions)
			.renderer_events(plugin.renderer, plugin.events)
			.build()
	}
}

static CATALOG: OnceLock<ArcSwap<Catalog>> = OnceLock::new();
static PLUGIN_WRITER: Mutex<()> = parking_lot::const_mutex(());

/// Installs the process-wide catalog. Must run before [`catalog`] is used.
pub fn install(catalog: Catalog) -> Result<(), RegistryError> {
	CATALOG
		.set(ArcSwap::from_pointee(catalog))
		.map_err(|_| RegistryError::AlreadyInstalled)?;
	tracing::debug!(domain = "catalog", "registry catalog installed");
	Ok(())
}

/// Current snapshot of the process-wide catalog.
pub fn catalog() -> Result<Arc<Catalog>, RegistryError> {
	CATALOG.get().map(|slot| slot.load_full()).ok_or(RegistryError::NotInstalled)
}

/// Publishes a snapshot of the installed catalog extended by `plugin`.
///
/// On error the installed catalog is left unchanged.
pub fn register_plugin(plugin: RendererPlugin) -> Result<(), RegistryError> {
	let slot = CATALOG.get().ok_or(RegistryError::NotInstalled)?;
	let _writer = PLUGIN_WRITER.lock();

	let renderer = plugin.renderer.clone();
	let next = slot.load().with_plugin(plugin)?;
	slot.store(Arc::new(next));

	tracing::debug!(domain = "catalog", renderer = %renderer, "renderer plugin registered");
	Ok(())
}
