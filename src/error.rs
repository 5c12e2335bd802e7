use std::path::PathBuf;

/// Library-level structured errors for the settings resolver.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Settings file not found: {path}")]
	SettingsNotFound { path: PathBuf },

	#[error("Failed to read settings file: {path}")]
	SettingsReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	SettingsParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Settings document is not a JSON object: {path}")]
	NotAnObject { path: PathBuf },

	#[error("Failed to parse settings overrides from ${var}")]
	OverrideParseError {
		var: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Settings overrides in ${var} are not a JSON object")]
	OverrideNotAnObject { var: String },

	#[error("Settings overrides in ${var} are not valid UTF-8")]
	OverrideNotUnicode { var: String },

	#[error("Missing settings field: {field}")]
	MissingField { field: String },

	#[error("Settings field is not a string: {field}")]
	FieldNotString { field: String },

	#[error("No settings available: {path}")]
	NoSettings { path: PathBuf },
}

impl SettingsError {
	/// Whether this error belongs to the parse-failure family (base document or overrides).
	pub fn is_parse_failure(&self) -> bool {
		matches!(
			self,
			SettingsError::SettingsParseError { .. }
				| SettingsError::NotAnObject { .. }
				| SettingsError::OverrideParseError { .. }
				| SettingsError::OverrideNotAnObject { .. }
				| SettingsError::OverrideNotUnicode { .. }
		)
	}
}

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;
