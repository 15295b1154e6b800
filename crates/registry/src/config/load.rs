//! Config file loading utilities.

use std::path::{Path, PathBuf};

use super::{ConfigError, RegistryConfig, Result};

/// Layer files, lowest precedence first.
const LAYERS: [&str; 2] = ["registry.toml", "registry.json"];

/// Aggregate result of loading registry configuration layers.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Merged config if any layer was loaded successfully.
	pub config: Option<RegistryConfig>,
	/// Layers that were read and merged.
	pub loaded: Vec<PathBuf>,
	/// File read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, String)>,
}

/// Parses registry config text in the given format.
///
/// `format` is a file extension: `toml` or `json`.
pub fn parse_registry_config(content: &str, format: &str) -> Result<RegistryConfig> {
	match format {
		"toml" => Ok(toml::from_str(content)?),
		"json" => Ok(serde_json::from_str(content)?),
		other => Err(ConfigError::UnsupportedFormat(other.to_string())),
	}
}

/// Reads and parses a single registry config file.
pub fn load_registry_config(path: &Path) -> Result<RegistryConfig> {
	let format = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
	if !matches!(format, "toml" | "json") {
		return Err(ConfigError::UnsupportedFormat(format.to_string()));
	}

	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	let config = parse_registry_config(&content, format)?;
	tracing::debug!(path = %path.display(), "loaded registry config");
	Ok(config)
}

/// Loads and merges `registry.toml` and `registry.json` from `config_dir`.
///
/// Merge precedence is fixed and deterministic: `registry.toml` < `registry.json`.
/// A layer that fails to load is reported and skipped.
pub fn load_from_dir(config_dir: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();
	let mut merged = RegistryConfig::default();

	for filename in LAYERS {
		let path = config_dir.join(filename);
		if !path.exists() {
			continue;
		}

		match load_registry_config(&path) {
			Ok(layer) => {
				merged.merge(layer);
				report.loaded.push(path);
			}
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "skipping registry config layer");
				report.errors.push((path, error.to_string()));
			}
		}
	}

	if !report.loaded.is_empty() {
		report.config = Some(merged);
	}

	report
}
