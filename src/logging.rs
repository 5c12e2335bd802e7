//! Logging collaborator for the settings resolver.
//!
//! Callers pass an optional [`Logger`] explicitly. When none is given,
//! messages go straight to the process streams: debug lines to stdout,
//! errors to stderr. The message text is the same on both paths.

use tracing_subscriber::EnvFilter;

/// A sink for already-formatted diagnostic messages.
pub trait Logger {
	fn debug(&self, message: &str);
	fn error(&self, message: &str);
}

/// Forwards messages to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn debug(&self, message: &str) {
		tracing::debug!("{message}");
	}

	fn error(&self, message: &str) {
		tracing::error!("{message}");
	}
}

/// Routes messages to an injected logger, or to stdout/stderr when there is none.
#[derive(Clone, Copy, Default)]
pub struct Reporter<'a> {
	logger: Option<&'a dyn Logger>,
}

impl<'a> Reporter<'a> {
	pub fn new(logger: Option<&'a dyn Logger>) -> Self {
		Self { logger }
	}

	/// A reporter with no logger attached; everything goes to the console.
	pub fn console() -> Self {
		Self { logger: None }
	}

	pub fn debug(&self, message: &str) {
		match self.logger {
			Some(logger) => logger.debug(message),
			None => println!("{message}"),
		}
	}

	pub fn error(&self, message: &str) {
		match self.logger {
			Some(logger) => logger.error(message),
			None => eprintln!("{message}"),
		}
	}
}

impl std::fmt::Debug for Reporter<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Reporter")
			.field("logger", &self.logger.is_some())
			.finish()
	}
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = info, 1 = debug, 2+ = trace).
pub fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
	let default_level = match verbosity {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}
