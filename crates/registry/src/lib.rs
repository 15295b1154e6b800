//! Action registries for the event panel.
//!
//! Action definitions come from three overlapping sources: the global action
//! tree shown in the action picker, per-component-type feature actions
//! contributed by renderer plugins, and the common action registry that
//! carries defaults for actions shared by many component kinds. The
//! [`ActionResolver`] searches them in a fixed precedence order to find the
//! label, description, form schema or description renderer of a configured
//! action.
//!
//! # Modules
//!
//! - [`actions`] - Action definitions, the action tree index, component and common registries
//! - [`resolver`] - Property resolution and action classification
//! - [`desc`] - Description renderers for configured actions
//! - [`events`] - Event definitions and lookups
//! - [`config`] - Registry configuration files
//! - [`db`] - The process-wide catalog

pub mod actions;
pub mod config;
pub mod db;
pub mod desc;
pub mod events;
pub mod resolver;

pub use actdesk_primitives::{ActionArgs, ActionConfig, ActionProp, COMPONENT_ACTION_TYPE};
pub use actions::{
	ActionDef, ActionGroup, ActionNode, ActionTree, CommonActionView, CommonActions, ComponentActions, builtin_common_actions,
	find_action_node, find_sub_action_node, supports_action_type,
};
pub use config::{ConfigError, RegistryConfig};
pub use db::{Catalog, CatalogBuilder, RegistryError, RendererPlugin, catalog, install, register_plugin};
pub use desc::{DescDetail, DescHandler, DescInfo};
pub use events::{ComponentEvents, EventDef, event_description, event_label};
pub use resolver::{ActionResolver, ComponentLookup, PropValue, classify, resolve};
