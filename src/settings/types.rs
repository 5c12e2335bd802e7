use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Key holding the root directory of the installation.
pub const DATALAB_ROOT_KEY: &str = "datalabRoot";

/// Key holding the content directory, relative to `datalabRoot` unless absolute.
pub const CONTENT_DIR_KEY: &str = "contentDir";

/// A flat settings document: top-level keys mapped to arbitrary JSON values.
///
/// Only `datalabRoot` and `contentDir` are interpreted; every other key is
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
	values: Map<String, Value>,
}

impl Settings {
	pub fn new(values: Map<String, Value>) -> Self {
		Self { values }
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Set a top-level key, replacing any previous value wholesale.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.values.insert(key.into(), value)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Read a top-level field that must be a string.
	pub fn str_field(&self, key: &str) -> Result<&str> {
		match self.values.get(key) {
			Some(Value::String(s)) => Ok(s),
			Some(_) => Err(SettingsError::FieldNotString {
				field: key.to_string(),
			}),
			None => Err(SettingsError::MissingField {
				field: key.to_string(),
			}),
		}
	}

	/// `datalabRoot` joined with `contentDir`.
	///
	/// No filesystem check is made. An absolute `contentDir` replaces the
	/// root, as `Path::join` does.
	pub fn content_dir(&self) -> Result<PathBuf> {
		let root = self.str_field(DATALAB_ROOT_KEY)?;
		let content = self.str_field(CONTENT_DIR_KEY)?;
		Ok(PathBuf::from(root).join(content))
	}
}
