use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use datalab_settings::logging::{Logger, Reporter, TracingLogger, init_tracing};
use datalab_settings::paths::ensure_dir_exists;
use datalab_settings::settings::{CONTENT_DIR_KEY, DATALAB_ROOT_KEY, SettingsResolver, describe};

#[derive(Parser)]
#[command(name = "datalab-settings")]
#[command(
	author,
	version,
	about = "Resolve content server settings from JSON and environment overrides"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Directory containing config/settings.json (defaults to the current directory)
	#[arg(long, value_name = "DIR", global = true)]
	base_dir: Option<PathBuf>,

	/// Explicit settings file, instead of <base-dir>/config/settings.json
	#[arg(long, value_name = "FILE", global = true, conflicts_with = "base_dir")]
	settings: Option<PathBuf>,

	/// Environment variable holding JSON overrides
	#[arg(long, value_name = "NAME", global = true)]
	overrides_env: Option<String>,

	/// Route diagnostics through the tracing logger (repeat for more detail)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the merged settings document as JSON
	Show,
	/// Print a single top-level setting
	Get {
		/// Setting name
		key: String,
	},
	/// Print the resolved content directory
	ContentDir {
		/// Create the directory and its ancestors if missing
		#[arg(long)]
		create: bool,
	},
	/// Create a directory and any missing ancestors
	EnsureDir {
		/// Directory to create
		path: PathBuf,
	},
	/// Check that the settings load and name a content directory
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let tracing_logger = TracingLogger;
	let logger: Option<&dyn Logger> = if cli.verbose > 0 {
		init_tracing(cli.verbose).context("Failed to initialise logging")?;
		Some(&tracing_logger as &dyn Logger)
	} else {
		None
	};
	let reporter = Reporter::new(logger);

	let resolver = build_resolver(&cli)?;

	match cli.command {
		Commands::Show => handle_show(&resolver, reporter),
		Commands::Get { key } => handle_get(&resolver, &key, reporter),
		Commands::ContentDir { create } => handle_content_dir(&resolver, create, reporter),
		Commands::EnsureDir { path } => Ok(handle_ensure_dir(&path, reporter)),
		Commands::Validate => handle_validate(&resolver),
	}
}

fn build_resolver(cli: &Cli) -> Result<SettingsResolver> {
	let resolver = if let Some(ref path) = cli.settings {
		SettingsResolver::with_settings_path(path)
	} else {
		let base_dir = match cli.base_dir {
			Some(ref dir) => dir.clone(),
			None => std::env::current_dir().context("Failed to get current directory")?,
		};
		SettingsResolver::new(&base_dir)
	};

	Ok(match cli.overrides_env {
		Some(ref var) => resolver.overrides_var(var),
		None => resolver,
	})
}

fn handle_show(resolver: &SettingsResolver, reporter: Reporter<'_>) -> Result<ExitCode> {
	let Some(settings) = resolver.load(reporter) else {
		return Ok(ExitCode::FAILURE);
	};

	let text = serde_json::to_string_pretty(&settings).context("Failed to render settings")?;
	println!("{}", text);
	Ok(ExitCode::SUCCESS)
}

fn handle_get(resolver: &SettingsResolver, key: &str, reporter: Reporter<'_>) -> Result<ExitCode> {
	let Some(settings) = resolver.load(reporter) else {
		return Ok(ExitCode::FAILURE);
	};

	match settings.get(key) {
		Some(serde_json::Value::String(s)) => println!("{}", s),
		Some(value) => println!("{}", value),
		None => {
			eprintln!("Setting not found: {}", key);
			return Ok(ExitCode::FAILURE);
		}
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_content_dir(
	resolver: &SettingsResolver,
	create: bool,
	reporter: Reporter<'_>,
) -> Result<ExitCode> {
	let dir = resolver
		.content_dir(reporter)
		.context("Failed to resolve content directory")?;

	if create && !ensure_dir_exists(&dir, reporter) {
		return Ok(ExitCode::FAILURE);
	}

	println!("{}", dir.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_ensure_dir(path: &Path, reporter: Reporter<'_>) -> ExitCode {
	if ensure_dir_exists(path, reporter) {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}

fn handle_validate(resolver: &SettingsResolver) -> Result<ExitCode> {
	let path = resolver.settings_path();

	match resolver.try_load() {
		Ok(settings) => match settings.content_dir() {
			Ok(dir) => {
				println!("Settings are valid: {}", path.display());
				println!("  {} keys", settings.len());
				println!("  content directory: {}", dir.display());
				Ok(ExitCode::SUCCESS)
			}
			Err(e) => {
				eprintln!("Settings error: {}", describe(&e));
				eprintln!(
					"  {} and {} must both be strings",
					DATALAB_ROOT_KEY, CONTENT_DIR_KEY
				);
				Ok(ExitCode::FAILURE)
			}
		},
		Err(e) if e.is_parse_failure() => {
			eprintln!("Settings are malformed: {}", describe(&e));
			Ok(ExitCode::FAILURE)
		}
		Err(e) => {
			eprintln!("Settings error: {}", describe(&e));
			Ok(ExitCode::FAILURE)
		}
	}
}
