//! Directory helpers.

use crate::logging::Reporter;
use std::path::{Path, PathBuf};

/// Parent of `path`, with the root and `.` being their own parents.
///
/// A bare relative name such as `content` has `.` as its parent.
fn parent_of(path: &Path) -> PathBuf {
	match path.parent() {
		None => path.to_path_buf(),
		Some(parent) if parent.as_os_str().is_empty() => {
			if path == Path::new(".") {
				path.to_path_buf()
			} else {
				PathBuf::from(".")
			}
		}
		Some(parent) => parent.to_path_buf(),
	}
}

/// Make sure `path` exists as a directory, creating missing ancestors first.
///
/// Returns `true` when the directory exists afterwards. Returns `false` if
/// `path` or one of its ancestors exists but is not a directory, or if a
/// directory could not be created; nothing below the failing component is
/// created. Safe to call repeatedly.
///
/// Diagnostics are logged for a non-directory in the way and, in addition,
/// for a `create_dir` call that fails for any other reason.
pub fn ensure_dir_exists(path: &Path, reporter: Reporter<'_>) -> bool {
	let parent = parent_of(path);
	if parent == path {
		return true;
	}

	match std::fs::metadata(path) {
		Ok(meta) if meta.is_dir() => return true,
		Ok(_) => {
			reporter.error(&format!(
				"Path {} exists but is not a directory",
				path.display()
			));
			return false;
		}
		Err(_) => {}
	}

	if !ensure_dir_exists(&parent, reporter) {
		return false;
	}

	reporter.debug(&format!("Creating directory {}", path.display()));
	match std::fs::create_dir(path) {
		Ok(()) => true,
		Err(_) if path.is_dir() => true,
		Err(e) => {
			reporter.error(&format!(
				"Failed to create directory {}: {}",
				path.display(),
				e
			));
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::logging::testing::MemoryLogger;
	use std::fs;

	#[test]
	fn test_parent_of_root_is_root() {
		#[cfg(unix)]
		assert_eq!(parent_of(Path::new("/")), PathBuf::from("/"));
		assert_eq!(parent_of(Path::new(".")), PathBuf::from("."));
		assert_eq!(parent_of(Path::new("content")), PathBuf::from("."));
		assert_eq!(parent_of(Path::new("a/b")), PathBuf::from("a"));
	}

	#[test]
	fn test_creates_nested_path_and_is_idempotent() {
		let temp_dir = tempfile::tempdir().unwrap();
		let target = temp_dir.path().join("a").join("b").join("c");
		let logger = MemoryLogger::default();

		assert!(ensure_dir_exists(&target, Reporter::new(Some(&logger))));
		assert!(target.is_dir());
		assert_eq!(logger.debug.borrow().len(), 3);

		assert!(ensure_dir_exists(&target, Reporter::new(Some(&logger))));
		assert!(target.is_dir());
		// Second call creates nothing
		assert_eq!(logger.debug.borrow().len(), 3);
		assert!(logger.errors.borrow().is_empty());
	}

	#[test]
	fn test_existing_directory_succeeds() {
		let temp_dir = tempfile::tempdir().unwrap();
		let logger = MemoryLogger::default();

		assert!(ensure_dir_exists(temp_dir.path(), Reporter::new(Some(&logger))));
		assert!(logger.debug.borrow().is_empty());
	}

	#[test]
	fn test_target_is_a_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("occupied");
		fs::write(&file, "x").unwrap();
		let logger = MemoryLogger::default();

		assert!(!ensure_dir_exists(&file, Reporter::new(Some(&logger))));
		assert!(file.is_file());
		let errors = logger.errors.borrow();
		assert_eq!(errors.len(), 1);
		assert!(errors[0].contains("exists but is not a directory"));
	}

	#[test]
	fn test_ancestor_is_a_file_creates_nothing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("occupied");
		fs::write(&file, "x").unwrap();
		let target = file.join("a").join("b");
		let logger = MemoryLogger::default();

		assert!(!ensure_dir_exists(&target, Reporter::new(Some(&logger))));

		let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
		assert_eq!(entries.len(), 1);
		assert!(file.is_file());
		assert!(logger.debug.borrow().is_empty());
		assert_eq!(logger.errors.borrow().len(), 1);
	}

	#[test]
	fn test_filesystem_root_is_success() {
		#[cfg(unix)]
		assert!(ensure_dir_exists(Path::new("/"), Reporter::console()));
		assert!(ensure_dir_exists(Path::new("."), Reporter::console()));
	}
}
