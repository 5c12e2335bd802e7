use crate::settings::types::Settings;
use serde_json::{Map, Value};

/// Shallow-merge `overrides` into `base`.
///
/// Each override key replaces the base value of the same name outright;
/// nested objects are never merged.
pub fn apply_overrides(mut base: Settings, overrides: Map<String, Value>) -> Settings {
	for (key, value) in overrides {
		base.insert(key, value);
	}
	base
}
