//! Settings loading and resolution.
//!
//! This module handles:
//! - JSON settings file parsing
//! - Environment variable overrides (shallow merge)
//! - Content directory resolution

pub mod loader;
pub mod merge;
pub mod types;

pub use loader::{
	OVERRIDES_ENV_VAR, SETTINGS_DIR, SETTINGS_FILE_NAME, SettingsResolver, describe,
	parse_overrides_str, parse_settings, parse_settings_str, settings_path,
};
pub use merge::apply_overrides;
pub use types::{CONTENT_DIR_KEY, DATALAB_ROOT_KEY, Settings};
