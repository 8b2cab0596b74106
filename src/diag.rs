//! Console-only self-diagnostics.
//!
//! Registry warnings and failed target writes must not travel through the
//! file targets themselves: a failing target that triggered the diagnostic
//! would recurse. Routing these records to the console alone terminates the
//! diagnostic path.

use std::fmt;

use crate::{config, format, level::Level};

pub(crate) fn debug(args: fmt::Arguments<'_>) {
    emit(Level::Debug, args);
}

pub(crate) fn info(args: fmt::Arguments<'_>) {
    emit(Level::Info, args);
}

pub(crate) fn warn(args: fmt::Arguments<'_>) {
    emit(Level::Warn, args);
}

pub(crate) fn error(args: fmt::Arguments<'_>) {
    emit(Level::Error, args);
}

fn emit(level: Level, args: fmt::Arguments<'_>) {
    if !level.passes(config::console_level()) {
        return;
    }
    let line = format::render(level, &args.to_string());
    crate::write_console(&line);
}
