//! datalab-settings - settings resolver for a content server.
//!
//! This library provides:
//! - Loading `config/settings.json` with overrides from `DATALAB_SETTINGS_OVERRIDES`
//! - Resolving the content directory (`datalabRoot` joined with `contentDir`)
//! - Creating directories together with their missing ancestors
//! - An injectable logger with a console fallback
//!
//! # Example
//!
//! ```no_run
//! use datalab_settings::logging::Reporter;
//! use datalab_settings::paths::ensure_dir_exists;
//! use datalab_settings::settings::SettingsResolver;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let resolver = SettingsResolver::new(&cwd);
//!
//! if let Ok(dir) = resolver.content_dir(Reporter::console()) {
//!     ensure_dir_exists(&dir, Reporter::console());
//!     println!("Content lives in {}", dir.display());
//! }
//! ```

pub mod error;
pub mod logging;
pub mod paths;
pub mod settings;

pub use error::{Result, SettingsError};
