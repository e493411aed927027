//! Colouring of session messages
//!
//! Whether to colour is decided once, from the real stdout, when a command
//! starts. Sessions writing anywhere else get [`Palette::plain`].

use owo_colors::{OwoColorize, colors::css};

/// Styles applied to prompts, menus and "not found" messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colours only if stdout supports them.
    pub fn for_stdout() -> Self {
        Self {
            enabled: supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }

    /// Never colours.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Amber, for empty results and invalid choices.
    pub fn warning(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Blue, for menus.
    pub fn info(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dimmed, for confirmation prompts.
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_untouched() {
        let palette = Palette::plain();
        assert_eq!(palette.warning("none"), "none");
        assert_eq!(palette.info("menu"), "menu");
        assert_eq!(palette.dim("again?"), "again?");
    }

    #[test]
    fn enabled_palette_wraps_text_in_escapes() {
        let palette = Palette { enabled: true };
        let styled = palette.warning("none");
        assert!(styled.starts_with('\u{1b}'));
        assert!(styled.contains("none"));
    }
}
