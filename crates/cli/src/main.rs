//! `actdesk` command line tool.
//!
//! Loads action registries from config files and answers the questions the
//! event panel asks: the label, description, schema or summary of a configured
//! action, the group it belongs to, and the registered events.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if cli.verbose {
			EnvFilter::new("actdesk_registry=trace,debug")
		} else {
			EnvFilter::new("info")
		}
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let catalog = commands::load_catalog(&cli.source)?;

	match commands::run(&cli.command, &catalog)? {
		Some(out) => println!("{out}"),
		None => {
			tracing::info!("{}", commands::missing_message(&cli.command));
			std::process::exit(1);
		}
	}

	Ok(())
}
