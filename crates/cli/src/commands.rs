//! Subcommand implementations. Each returns the text printed on stdout.

use actdesk_registry::config::{load_from_dir, load_registry_config};
use actdesk_registry::{ActionConfig, Catalog, ComponentLookup, DescInfo, EventDef, PropValue, RegistryConfig};
use anyhow::{Context, bail};
use tracing::{debug, warn};

use crate::cli::{Command, RegistrySource};

/// Loads the registries named by `source`, or an empty catalog when none is given.
pub fn load_catalog(source: &RegistrySource) -> anyhow::Result<Catalog> {
	let mut config = match (&source.config, &source.config_dir) {
		(Some(path), _) => load_registry_config(path).with_context(|| format!("failed to load {}", path.display()))?,
		(None, Some(dir)) => {
			let report = load_from_dir(dir);
			for (path, error) in &report.errors {
				warn!(path = %path.display(), error = %error, "skipped registry layer");
			}
			if report.loaded.is_empty() && !report.errors.is_empty() {
				bail!("no registry layer in {} could be loaded", dir.display());
			}
			report.config.unwrap_or_default()
		}
		(None, None) => RegistryConfig::default(),
	};

	if source.discard_component_lookup {
		config.component_lookup = Some(ComponentLookup::Discard);
	}

	let catalog = config.into_catalog().context("invalid registry config")?;
	debug!(
		nodes = catalog.tree().nodes().len(),
		events = catalog.events().len(),
		"registry catalog ready"
	);
	Ok(catalog)
}

/// Parses a configured action from its JSON form.
pub fn parse_action(json: &str) -> anyhow::Result<ActionConfig> {
	serde_json::from_str(json).context("action must be a JSON object with an actionType")
}

/// Runs `command` against `catalog`.
///
/// `Ok(None)` means the requested value is not configured anywhere.
pub fn run(command: &Command, catalog: &Catalog) -> anyhow::Result<Option<String>> {
	let resolver = catalog.resolver();

	match command {
		Command::Resolve { action, prop } => {
			let action = parse_action(action)?;
			resolver
				.resolve(&action, *prop)
				.map(|value| format_value(value, &action))
				.transpose()
				.map(Option::flatten)
		}
		Command::Describe { action } => Ok(resolver.describe(&parse_action(action)?)),
		Command::Classify { action } => Ok(Some(resolver.kind_of(&parse_action(action)?).to_string())),
		Command::Events {
			renderer: Some(renderer),
			name: Some(name),
		} => {
			let label = catalog.event_label(renderer, name);
			let description = catalog.event_description(renderer, name);
			if label.is_none() && description.is_none() {
				return Ok(None);
			}
			let mut out = match label {
				Some(label) => format!("{name}\t{label}"),
				None => name.clone(),
			};
			if let Some(description) = description {
				out.push('\n');
				out.push_str(description);
			}
			Ok(Some(out))
		}
		Command::Events { renderer: Some(renderer), name: None } => {
			Ok(catalog.events_for(renderer).map(|events| event_lines("", events)).filter(|out| !out.is_empty()))
		}
		Command::Events { renderer: None, .. } => {
			let events = catalog.events();
			let lines: Vec<String> = events
				.renderers()
				.into_iter()
				.filter_map(|renderer| events.events_for(renderer).map(|list| event_lines(&format!("{renderer}\t"), list)))
				.filter(|out| !out.is_empty())
				.collect();
			Ok((!lines.is_empty()).then(|| lines.join("\n")))
		}
	}
}

/// One `name<TAB>label` line per event, each prefixed with `prefix`.
fn event_lines(prefix: &str, events: &[EventDef]) -> String {
	events
		.iter()
		.map(|event| match &event.event_label {
			Some(label) => format!("{prefix}{}\t{label}", event.event_name),
			None => format!("{prefix}{}", event.event_name),
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Formats a resolved value for the terminal.
///
/// Schemas print as pretty JSON, description renderers are rendered against
/// the action and inner argument names are comma separated.
pub fn format_value(value: PropValue<'_>, action: &ActionConfig) -> anyhow::Result<Option<String>> {
	Ok(match value {
		PropValue::Text(text) => Some(text.to_string()),
		PropValue::Schema(schema) => Some(serde_json::to_string_pretty(schema)?),
		PropValue::Desc(desc) => desc.render(&DescInfo::from_config(action)),
		PropValue::Args(args) => Some(args.join(", ")),
	})
}

/// Describes what was missing when [`run`] produced nothing.
pub fn missing_message(command: &Command) -> String {
	match command {
		Command::Resolve { action, prop } => {
			let action_type = parse_action(action).map(|action| action.action_type).unwrap_or_default();
			format!("no {} configured for '{action_type}'", prop.name())
		}
		Command::Describe { .. } => "no description renderer configured".to_string(),
		Command::Classify { .. } => String::new(),
		Command::Events {
			renderer: Some(renderer),
			name: Some(name),
		} => format!("event '{name}' of '{renderer}' has no label or description"),
		Command::Events { renderer: Some(renderer), name: None } => format!("no events registered for '{renderer}'"),
		Command::Events { renderer: None, .. } => "no events registered".to_string(),
	}
}
