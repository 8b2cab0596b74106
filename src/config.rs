//! Process-wide logger configuration.
//!
//! Defaults are seeded once from the environment; every field can be changed
//! at runtime from any thread. Scalars are relaxed atomics, so concurrent
//! writers follow last-writer-wins with no torn reads.

use std::sync::{
    LazyLock,
    atomic::{AtomicBool, AtomicU8, AtomicU16, Ordering},
};

use derive_from_env::FromEnv;

use crate::level::Level;

#[derive(FromEnv)]
#[from_env(prefix = "TINTLOG")]
#[allow(non_snake_case)]
struct TintlogEnv {
    #[from_env(default = "debug")]
    CONSOLE_LEVEL: String,
    #[from_env(default = "info")]
    FILE_LEVEL: String,
    #[from_env(default = "12")]
    MAX_SOURCE_LEN: u8,
    #[from_env(default = "5")]
    MAX_DIR_FILES: u16,
}

struct Config {
    console_level: AtomicU8,
    file_level: AtomicU8,
    use_12h_time: AtomicBool,
    log_to_stderr: AtomicBool,
    max_source_len: AtomicU8,
    max_dir_files: AtomicU16,
}

static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    let env = TintlogEnv::from_env().unwrap();
    Config {
        console_level: AtomicU8::new(
            env.CONSOLE_LEVEL.parse().unwrap_or(Level::Debug) as u8
        ),
        file_level: AtomicU8::new(env.FILE_LEVEL.parse().unwrap_or(Level::Info) as u8),
        use_12h_time: AtomicBool::new(false),
        log_to_stderr: AtomicBool::new(true),
        max_source_len: AtomicU8::new(env.MAX_SOURCE_LEN),
        max_dir_files: AtomicU16::new(env.MAX_DIR_FILES.max(1)),
    }
});

/// Minimum severity emitted to the console. `Debug` by default.
pub fn console_level() -> Level {
    Level::from_u8(CONFIG.console_level.load(Ordering::Relaxed))
}

pub fn set_console_level(level: Level) {
    CONFIG.console_level.store(level as u8, Ordering::Relaxed);
}

/// Minimum severity mirrored to file targets. `Info` by default.
pub fn file_level() -> Level {
    Level::from_u8(CONFIG.file_level.load(Ordering::Relaxed))
}

pub fn set_file_level(level: Level) {
    CONFIG.file_level.store(level as u8, Ordering::Relaxed);
}

/// Whether timestamps use the 12-hour clock. Off (24-hour) by default.
pub fn uses_12h_time() -> bool {
    CONFIG.use_12h_time.load(Ordering::Relaxed)
}

pub fn set_12h_time(on: bool) {
    CONFIG.use_12h_time.store(on, Ordering::Relaxed);
}

/// Whether console output goes to stderr (`true`, the default) or stdout.
pub fn logs_to_stderr() -> bool {
    CONFIG.log_to_stderr.load(Ordering::Relaxed)
}

pub fn set_log_to_stderr(on: bool) {
    CONFIG.log_to_stderr.store(on, Ordering::Relaxed);
}

/// Maximum displayed length of a thread label or source tag. `12` by default;
/// longer values are truncated with a `>` marker.
pub fn max_source_length() -> u8 {
    CONFIG.max_source_len.load(Ordering::Relaxed)
}

pub fn set_max_source_length(len: u8) {
    CONFIG.max_source_len.store(len, Ordering::Relaxed);
}

pub(crate) fn max_dir_files() -> u16 {
    CONFIG.max_dir_files.load(Ordering::Relaxed)
}

pub(crate) fn set_max_dir_files(count: u16) {
    CONFIG.max_dir_files.store(count, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_level_round_trip() {
        let _guard = testutil::serial();
        let previous = console_level();
        set_console_level(Level::Warn);
        assert_eq!(console_level(), Level::Warn);
        set_console_level(previous);
    }

    #[test]
    fn test_defaults() {
        // Env-free defaults; the suite never sets TINTLOG_* variables.
        assert!(max_source_length() >= 1);
        assert!(max_dir_files() >= 1);
    }
}
