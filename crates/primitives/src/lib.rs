//! Core types for configured event actions: the saved action reference and
//! the property selector the registry resolves against.

/// Configured action data as saved by the event panel.
pub mod action;
/// Action property selectors.
pub mod prop;

pub use action::{ActionArgs, ActionConfig};
pub use prop::ActionProp;

/// Umbrella action type for every action that targets another component.
///
/// A capability list containing this type satisfies any action-type query,
/// and configured actions flagged as component feature actions classify
/// under it.
pub const COMPONENT_ACTION_TYPE: &str = "component";
