use std::path::PathBuf;

use actdesk_registry::ActionProp;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "actdesk")]
#[command(about = "Inspect event action registries and resolve configured actions")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(flatten)]
	pub source: RegistrySource,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Where the registries come from.
#[derive(Args, Debug, Default)]
pub struct RegistrySource {
	/// Registry config file (.toml or .json)
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Directory holding registry.toml and/or registry.json layers
	#[arg(long, value_name = "DIR", global = true, conflicts_with = "config")]
	pub config_dir: Option<PathBuf>,

	/// Drop values found on component feature actions and keep searching
	#[arg(long, global = true)]
	pub discard_component_lookup: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Resolve one property of a configured action
	Resolve {
		/// Configured action as JSON
		#[arg(long, short = 'a')]
		action: String,
		/// Property to resolve (actionLabel, description, descDetail, schema, innerArgs)
		#[arg(long, short = 'p')]
		prop: ActionProp,
	},
	/// Render the summary of a configured action
	Describe {
		/// Configured action as JSON
		#[arg(long, short = 'a')]
		action: String,
	},
	/// Print the action type a configured action is grouped under
	Classify {
		/// Configured action as JSON
		#[arg(long, short = 'a')]
		action: String,
	},
	/// List events per renderer, or show one event of a renderer
	Events {
		/// Renderer type whose events are listed
		#[arg(long, short = 'r')]
		renderer: Option<String>,
		/// Event name
		#[arg(long, requires = "renderer")]
		name: Option<String>,
	},
}
