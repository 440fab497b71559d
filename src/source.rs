//! Task file location and loading
//!
//! The binary only ever reads a JSON export of task records; it never
//! writes one back.

use crate::error::{CliError, CliResult};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use taskpulse_core::{Task, tasks_from_json};
use tracing::debug;

/// Environment variable name for the task file path
pub const TASKPULSE_FILE_ENV: &str = "TASKPULSE_FILE";

/// Default task file path relative to the user's home directory
pub const DEFAULT_TASKS_SUBPATH: &str = ".taskpulse/tasks.json";

/// Get the default task file path.
///
/// Returns `~/.taskpulse/tasks.json`, or `.taskpulse/tasks.json` relative
/// to the current directory when no home directory is known.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_TASKS_SUBPATH)
}

/// Get the task file path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --file argument
/// 2. TASKPULSE_FILE environment variable (if non-empty)
/// 3. Default path (~/.taskpulse/tasks.json)
pub fn resolve_tasks_path(cli_file: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_file {
        return path;
    }

    if let Ok(env_path) = std::env::var(TASKPULSE_FILE_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    default_path()
}

/// Read and validate every task in the file, scoring each against `now`.
///
/// # Errors
///
/// Returns `CliError::ReadFile` if the file cannot be read, or the core
/// error for the first invalid record.
pub fn load_tasks(path: &Path, now: DateTime<Utc>) -> CliResult<Vec<Task>> {
    let json = std::fs::read_to_string(path).map_err(|e| CliError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tasks = tasks_from_json(&json, now)?;
    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serial_test::serial;
    use std::env;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "tp-source-test-{}-{}-{:?}-{}.json",
            name,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_load_tasks_reads_file() {
        let path = temp_file(
            "ok",
            r#"[{"id": "a", "title": "A", "deadline": "2025-06-02",
                 "createdAt": "2025-05-30", "priority": "high"}]"#,
        );
        let tasks = load_tasks(&path, now()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].sort_score > 0.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_tasks_missing_file() {
        let path = env::temp_dir().join("tp-source-test-definitely-missing.json");
        match load_tasks(&path, now()) {
            Err(CliError::ReadFile { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected ReadFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_tasks_propagates_invalid_timestamp() {
        let path = temp_file(
            "bad",
            r#"[{"id": "a", "title": "A", "deadline": "whenever",
                 "createdAt": "2025-05-30", "priority": "high"}]"#,
        );
        let result = load_tasks(&path, now());
        assert!(matches!(
            result,
            Err(CliError::Core(taskpulse_core::CoreError::InvalidTimestamp { .. }))
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_resolve_tasks_path_cli_takes_priority() {
        let cli_path = PathBuf::from("/custom/tasks.json");
        assert_eq!(resolve_tasks_path(Some(cli_path.clone())), cli_path);
    }

    #[test]
    #[serial]
    fn test_resolve_tasks_path_env_var_takes_priority_over_default() {
        let original = env::var(TASKPULSE_FILE_ENV).ok();
        // SAFETY: Test is serialized and we restore the original value
        unsafe { env::set_var(TASKPULSE_FILE_ENV, "/env/tasks.json") };

        assert_eq!(resolve_tasks_path(None), PathBuf::from("/env/tasks.json"));

        // SAFETY: Test is serialized and we're restoring to original state
        unsafe {
            match original {
                Some(val) => env::set_var(TASKPULSE_FILE_ENV, val),
                None => env::remove_var(TASKPULSE_FILE_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn test_resolve_tasks_path_empty_env_var_uses_default() {
        let original = env::var(TASKPULSE_FILE_ENV).ok();
        // SAFETY: Test is serialized and we restore the original value
        unsafe { env::set_var(TASKPULSE_FILE_ENV, "") };

        let path = resolve_tasks_path(None);
        assert!(
            path.ends_with(".taskpulse/tasks.json"),
            "Expected path ending with .taskpulse/tasks.json, got: {:?}",
            path
        );

        // SAFETY: Test is serialized and we're restoring to original state
        unsafe {
            match original {
                Some(val) => env::set_var(TASKPULSE_FILE_ENV, val),
                None => env::remove_var(TASKPULSE_FILE_ENV),
            }
        }
    }
}
