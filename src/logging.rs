//! File-based logging.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `~/.config/rgbpal/rgbpal.log`. Default level is WARN; `RUST_LOG` overrides.

use std::path::{Path, PathBuf};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::APP_NAME;

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.log")))
}

/// Install the file subscriber. On failure, warn on stderr and keep running
/// without logging.
pub fn init_file(path: Option<&Path>) {
    let path = path.map(Path::to_path_buf).or_else(default_log_path);
    let Some(path) = path else {
        eprintln!("Warning: could not determine a log file location");
        return;
    };
    if let Err(e) = init_file_inner(&path) {
        eprintln!("Warning: failed to set up file logging: {e}");
    }
}

/// WARN unless `directives` (or `RUST_LOG` when `None`) asks for something else
fn env_filter(directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match directives {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.from_env_lossy(),
    }
}

fn init_file_inner(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(env_filter(None))
        .with_ansi(false)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("rgbpal/rgbpal.log"));
        }
    }

    #[test]
    fn test_filter_defaults_to_warn() {
        assert_eq!(env_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_filter_directive_overrides_default() {
        assert_eq!(
            env_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            env_filter(Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_init_file_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.log");
        init_file(Some(path.as_path()));
        assert!(path.exists());
    }
}
