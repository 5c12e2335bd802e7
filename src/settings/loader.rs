use crate::error::{Result, SettingsError};
use crate::logging::Reporter;
use crate::settings::merge::apply_overrides;
use crate::settings::types::Settings;
use serde_json::{Map, Value};
use std::env::VarError;
use std::path::{Path, PathBuf};

/// Subdirectory of the base directory holding the settings file.
pub const SETTINGS_DIR: &str = "config";

/// Name of the settings file inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment variable carrying a JSON object of setting overrides.
pub const OVERRIDES_ENV_VAR: &str = "DATALAB_SETTINGS_OVERRIDES";

/// Location of the settings file for a given base directory.
pub fn settings_path(base_dir: &Path) -> PathBuf {
	base_dir.join(SETTINGS_DIR).join(SETTINGS_FILE_NAME)
}

/// Parse a settings document. An empty string is the empty document.
pub fn parse_settings_str(content: &str, path: &Path) -> Result<Settings> {
	if content.is_empty() {
		return Ok(Settings::default());
	}

	let value: Value =
		serde_json::from_str(content).map_err(|source| SettingsError::SettingsParseError {
			path: path.to_path_buf(),
			source,
		})?;

	match value {
		Value::Object(map) => Ok(Settings::new(map)),
		_ => Err(SettingsError::NotAnObject {
			path: path.to_path_buf(),
		}),
	}
}

/// Parse the contents of the overrides variable into a JSON object.
pub fn parse_overrides_str(text: &str, var: &str) -> Result<Map<String, Value>> {
	let value: Value =
		serde_json::from_str(text).map_err(|source| SettingsError::OverrideParseError {
			var: var.to_string(),
			source,
		})?;

	match value {
		Value::Object(map) => Ok(map),
		_ => Err(SettingsError::OverrideNotAnObject {
			var: var.to_string(),
		}),
	}
}

/// Parse a base document and merge the optional overrides into it.
///
/// Either step failing fails the whole parse; there is no partially merged result.
pub fn parse_settings(
	content: &str,
	overrides: Option<&str>,
	path: &Path,
	var: &str,
) -> Result<Settings> {
	let base = parse_settings_str(content, path)?;
	match overrides {
		Some(text) => Ok(apply_overrides(base, parse_overrides_str(text, var)?)),
		None => Ok(base),
	}
}

/// Resolves the settings document and the paths derived from it.
///
/// Nothing is cached: every call re-reads the file and the environment.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
	settings_path: PathBuf,
	overrides_var: String,
}

impl SettingsResolver {
	/// Resolver reading `<base_dir>/config/settings.json`.
	pub fn new(base_dir: &Path) -> Self {
		Self::with_settings_path(settings_path(base_dir))
	}

	/// Resolver reading an explicit settings file.
	pub fn with_settings_path(path: impl Into<PathBuf>) -> Self {
		Self {
			settings_path: path.into(),
			overrides_var: OVERRIDES_ENV_VAR.to_string(),
		}
	}

	/// Read overrides from a different environment variable.
	pub fn overrides_var(mut self, var: impl Into<String>) -> Self {
		self.overrides_var = var.into();
		self
	}

	pub fn settings_path(&self) -> &Path {
		&self.settings_path
	}

	/// Overrides text, if the variable is set and non-empty.
	///
	/// A set variable that is not valid UTF-8 is a parse failure, not "unset".
	fn read_overrides(&self) -> Result<Option<String>> {
		match std::env::var(&self.overrides_var) {
			Ok(value) if value.is_empty() => Ok(None),
			Ok(value) => Ok(Some(value)),
			Err(VarError::NotPresent) => Ok(None),
			Err(VarError::NotUnicode(_)) => Err(SettingsError::OverrideNotUnicode {
				var: self.overrides_var.clone(),
			}),
		}
	}

	/// Load and merge the settings, reporting failures as typed errors.
	pub fn try_load(&self) -> Result<Settings> {
		let path = &self.settings_path;
		let content = std::fs::read_to_string(path).map_err(|source| {
			if source.kind() == std::io::ErrorKind::NotFound {
				SettingsError::SettingsNotFound { path: path.clone() }
			} else {
				SettingsError::SettingsReadError {
					path: path.clone(),
					source,
				}
			}
		})?;

		let overrides = self.read_overrides()?;
		parse_settings(&content, overrides.as_deref(), path, &self.overrides_var)
	}

	/// Load and merge the settings.
	///
	/// Any failure is logged once through `reporter` and turned into `None`.
	pub fn load(&self, reporter: Reporter<'_>) -> Option<Settings> {
		match self.try_load() {
			Ok(settings) => Some(settings),
			Err(e) => {
				reporter.error(&describe(&e));
				None
			}
		}
	}

	/// The content directory: `datalabRoot` joined with `contentDir`.
	///
	/// The directory is not checked or created; see [`crate::paths::ensure_dir_exists`].
	pub fn content_dir(&self, reporter: Reporter<'_>) -> Result<PathBuf> {
		let settings = self.load(reporter).ok_or_else(|| SettingsError::NoSettings {
			path: self.settings_path.clone(),
		})?;
		settings.content_dir()
	}
}

/// Render an error with its source chain on one line.
pub fn describe(error: &dyn std::error::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
