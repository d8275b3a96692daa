//! Configuration for the chessboard runtime.
//!
//! Every value has a compile-time default and can be overridden through an
//! environment variable. Command-line flags take precedence over both; see
//! `main.rs`.

use std::path::PathBuf;

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// File name prefix of the daily log file inside the log directory.
pub const LOG_FILE_PREFIX: &str = "chessboard";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_dir: PathBuf,
    pub strict_pawn_path: bool,
    pub start_position: Option<String>,
    pub flipped: bool,
}

impl Settings {
    /// Settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_dir: get_log_dir(),
            strict_pawn_path: get_strict_pawn_path(),
            start_position: get_start_position(),
            flipped: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            strict_pawn_path: false,
            start_position: None,
            flipped: false,
        }
    }
}

/// Get the directory the log file is written to.
///
/// Priority:
/// 1. `CHESSBOARD_LOG_DIR` env variable if set
/// 2. `./logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHESSBOARD_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Whether a pawn's double step must also find the square it passes over empty.
///
/// Reads `CHESSBOARD_STRICT_PAWN_PATH`; unparseable values count as unset.
pub fn get_strict_pawn_path() -> bool {
    std::env::var("CHESSBOARD_STRICT_PAWN_PATH")
        .ok()
        .and_then(|value| parse_flag(&value))
        .unwrap_or(false)
}

/// Piece placement to start from instead of the standard position.
pub fn get_start_position() -> Option<String> {
    std::env::var("CHESSBOARD_START_POSITION")
        .ok()
        .filter(|placement| !placement.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
