//! Per-level color tags.
//!
//! Each level carries a head tag (timestamp and level label) and a body tag.
//! A tag is either the semantic level's default palette color or a literal
//! escape string supplied by the operator; it is resolved once per format
//! call.

use std::sync::{LazyLock, RwLock};

use colored::{Color, Colorize};

use crate::level::Level;

const RESET: &str = "\x1b[0m";

/// A color tag: a semantic level's default color, or a literal ANSI escape
/// string emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorTag {
    Level(Level),
    Literal(String),
}

impl ColorTag {
    /// Paints timestamp/level-label text.
    pub(crate) fn paint_head(&self, text: &str) -> String {
        match self {
            ColorTag::Level(level) => text.color(head_color(*level)).to_string(),
            ColorTag::Literal(esc) => format!("{esc}{text}{RESET}"),
        }
    }

    /// Paints message-body text. Debug and Info bodies are unstyled by
    /// default.
    pub(crate) fn paint_body(&self, text: &str) -> String {
        match self {
            ColorTag::Level(level) => match body_color(*level) {
                Some(color) => text.color(color).to_string(),
                None => text.to_string(),
            },
            ColorTag::Literal(esc) => format!("{esc}{text}{RESET}"),
        }
    }
}

fn head_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::Black,
        Level::Info => Color::Blue,
        Level::Warn => Color::Yellow,
        Level::Error => Color::BrightRed,
    }
}

fn body_color(level: Level) -> Option<Color> {
    match level {
        Level::Warn => Some(Color::BrightYellow),
        Level::Error => Some(Color::Red),
        Level::Debug | Level::Info => None,
    }
}

struct StyleTable {
    head: [ColorTag; 4],
    body: [ColorTag; 4],
}

const DEFAULT_TAGS: [ColorTag; 4] = [
    ColorTag::Level(Level::Debug),
    ColorTag::Level(Level::Info),
    ColorTag::Level(Level::Warn),
    ColorTag::Level(Level::Error),
];

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            head: DEFAULT_TAGS,
            body: DEFAULT_TAGS,
        }
    }
}

static STYLES: LazyLock<RwLock<StyleTable>> = LazyLock::new(Default::default);

/// Overrides the head and body tags for one level.
pub fn set_level_style(level: Level, head: ColorTag, body: ColorTag) {
    let mut styles = STYLES.write().unwrap();
    styles.head[level as usize] = head;
    styles.body[level as usize] = body;
}

/// Restores the default palette for every level.
pub fn reset_level_styles() {
    *STYLES.write().unwrap() = StyleTable::default();
}

/// Snapshot of the head and body tags for one level.
pub(crate) fn tags_for(level: Level) -> (ColorTag, ColorTag) {
    let styles = STYLES.read().unwrap();
    (
        styles.head[level as usize].clone(),
        styles.body[level as usize].clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_literal_tag_wraps_text() {
        colored::control::set_override(true);
        let tag = ColorTag::Literal("\x1b[35m".into());
        assert_eq!(tag.paint_head("INFO "), "\x1b[35mINFO \x1b[0m");
        assert_eq!(tag.paint_body("hello"), "\x1b[35mhello\x1b[0m");
    }

    #[test]
    fn test_default_body_is_plain_for_info() {
        colored::control::set_override(true);
        let tag = ColorTag::Level(Level::Info);
        assert_eq!(tag.paint_body("hello"), "hello");
        assert!(tag.paint_head("hello").contains("\x1b["));
    }

    #[test]
    fn test_override_and_reset() {
        let _guard = testutil::serial();
        set_level_style(
            Level::Warn,
            ColorTag::Literal("\x1b[35m".into()),
            ColorTag::Literal("\x1b[95m".into()),
        );
        let (head, body) = tags_for(Level::Warn);
        assert_eq!(head, ColorTag::Literal("\x1b[35m".into()));
        assert_eq!(body, ColorTag::Literal("\x1b[95m".into()));

        reset_level_styles();
        let (head, body) = tags_for(Level::Warn);
        assert_eq!(head, ColorTag::Level(Level::Warn));
        assert_eq!(body, ColorTag::Level(Level::Warn));
    }
}
