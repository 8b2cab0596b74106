//! # tintlog
//! Thread-aware leveled logging with colored console output and mirrored
//! file targets.
//!
//! Records carry a local-time timestamp, a human-readable thread label, the
//! level, and an optional bracketed source tag split off the message body.
//! The console gets the ANSI-colored line; every registered file target gets
//! the same line with escapes stripped. Console and file sinks gate on
//! independent level thresholds, and `Error` can never be suppressed.
//!
//! ## Usage
//! ```rust
//! tintlog::init().unwrap();
//! log::info!("[net] listening on 0.0.0.0:8080");
//! ```
//!
//! ## Multi-threaded logging
//! Threads register a display name once; records from unnamed threads fall
//! back to a synthetic `Thread <id>` label.
//! ```rust
//! let _ = tintlog::init();
//! tintlog::name_current_thread("main");
//!
//! let handles: Vec<_> = (0..5)
//!     .map(|i| {
//!         std::thread::spawn(move || {
//!             tintlog::name_current_thread(&format!("worker {i}"));
//!             log::warn!("hello from worker {i}!");
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! ```
//!
//! ## Logging to files
//! File targets receive ANSI-stripped copies of every record above the file
//! threshold. A capped directory auto-names its files and rotates the oldest
//! out:
//! ```rust,no_run
//! let _ = tintlog::init();
//! tintlog::add_log_target("/tmp/app.log");
//! tintlog::set_max_files_in_dir(5);
//! let current = tintlog::log_to_dir("/tmp/app-logs", "app").unwrap();
//! log::info!("mirrored to {}", current.display());
//! ```

mod config;
mod diag;
mod format;
mod level;
mod style;
mod targets;
mod threads;

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

pub use config::{
    console_level, file_level, logs_to_stderr, max_source_length, set_12h_time,
    set_console_level, set_file_level, set_log_to_stderr, set_max_source_length,
    uses_12h_time,
};
pub use level::{Level, ParseLevelError};
pub use style::{ColorTag, reset_level_styles, set_level_style};
pub use targets::{
    add_log_target, clear_log_targets, log_to_dir, max_files_in_dir, remove_log_target,
    set_max_files_in_dir,
};
pub use threads::{
    forget_thread, forget_thread_name, name_current_thread, reset_thread_names, thread_id,
    thread_name,
};

/// Router behind the `log` facade: gates each record against both sink
/// thresholds, formats at most once, then writes console and/or file copies.
struct TintLogger;

impl log::Log for TintLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        let to_console = level.passes(config::console_level());
        let to_file = level.passes(config::file_level());
        if !to_console && !to_file {
            // fully suppressed: the body is never formatted
            return;
        }

        let line = format::render(level, &record.args().to_string());
        if to_console {
            write_console(&line);
        }
        if to_file {
            let stripped = format::strip_ansi(&line);
            for path in targets::snapshot() {
                if let Err(err) = append_line(&path, &stripped) {
                    diag::warn(format_args!(
                        "[tintlog] failed to write log target '{}': {err}",
                        path.display()
                    ));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Installs tintlog as the global `log` logger. Level gating is tintlog's
/// own, so the `log` max level is left wide open.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(TintLogger)).map(|()| {
        log::set_max_level(log::LevelFilter::Trace);
    })
}

pub(crate) fn write_console(line: &str) {
    // console failures are unreportable; drop them
    if config::logs_to_stderr() {
        let _ = io::stderr().write_all(line.as_bytes());
    } else {
        let _ = io::stdout().write_all(line.as_bytes());
    }
}

/// One record per open: append, write, close. No handle is kept, so a target
/// rotated away on disk is recreated by the next record.
fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::{Mutex, MutexGuard};

    static SERIAL: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch the process-wide registries or config.
    pub(crate) fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
