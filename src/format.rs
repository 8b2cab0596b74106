//! Record formatting.
//!
//! Builds the decorated console line for a record; the file variant is the
//! same line with every ANSI escape stripped. Formatting is total: any body,
//! including one that merely looks like a `[source] ...` line, formats
//! without error.

use std::{sync::LazyLock, thread};

use chrono::Local;
use colored::Colorize;
use regex::Regex;

use crate::{config, level::Level, style, threads};

static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\[(.*?)\] (.*)$").unwrap());

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").unwrap());

/// Renders one record as a colored, newline-terminated console line:
/// `<time> | [<thread>] <LEVEL> | [<source>]? <body>`.
pub(crate) fn render(level: Level, body: &str) -> String {
    let (head_tag, body_tag) = style::tags_for(level);
    let sep = " |".bright_black();

    let time = head_tag.paint_head(&time_string());
    let thread = format!("[{}]", thread_label());
    let thread = thread.as_str().black().bold();
    let label = head_tag.paint_head(level.label());

    let (source, rest) = split_source(body);
    let source_field = match source {
        Some(tag) => {
            let tag = format!("[{}]", limit_str(tag));
            format!(" {}{sep}", tag.as_str().cyan())
        }
        None => String::new(),
    };

    format!(
        "{time}{sep} {thread} {label}{sep}{source_field} {}\n",
        body_tag.paint_body(rest)
    )
}

/// Removes every `ESC [ ... m` sequence. Idempotent.
pub(crate) fn strip_ansi(line: &str) -> String {
    ANSI_RE.replace_all(line, "").into_owned()
}

fn time_string() -> String {
    let now = Local::now();
    if config::uses_12h_time() {
        now.format("%r").to_string()
    } else {
        now.format("%H:%M:%S").to_string()
    }
}

/// Registered display name of the calling thread, or a synthetic
/// `Thread <id>` fallback; either way capped to the configured length.
fn thread_label() -> String {
    let current = thread::current();
    let name = threads::thread_name(current.id())
        .unwrap_or_else(|| format!("Thread {}", threads::display_id(current.id())));
    limit_str(&name)
}

/// Splits a leading `[tag] ` prefix off the body. False positives on bodies
/// that merely look tagged are accepted as cosmetic.
fn split_source(body: &str) -> (Option<&str>, &str) {
    match SOURCE_RE.captures(body) {
        Some(caps) => {
            let tag = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(2).map_or("", |m| m.as_str());
            (Some(tag), rest)
        }
        None => (None, body),
    }
}

/// Caps `s` to the configured maximum length, marking truncation with `>`.
pub(crate) fn limit_str(s: &str) -> String {
    let max = config::max_source_length() as usize;
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max).collect();
        out.push('>');
        out
    } else {
        s.to_string()
    }
}
