//! Colors for the interactive view
//!
//! Reads a kitty.conf-style color file (`key #rrggbb` per line) when one is
//! configured, or the Omarchy theme at
//! ~/.config/omarchy/current/theme/kitty.conf when present.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,      // Focused borders, selection marker
    pub danger: Color,      // Errors in the status line
    pub text: Color,        // Item text
    pub text_dim: Color,    // Hints, index prefixes, empty items
    pub bg_selected: Color, // Selected item background
    pub inactive: Color,    // Unfocused borders
    pub header: Color,      // List title
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            bg_selected: Color::Rgb(69, 71, 90),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
        }
    }
}

impl Theme {
    /// Load the configured color file, then the Omarchy theme, then defaults
    pub fn load(theme_file: Option<&Path>) -> Self {
        let candidate = theme_file.map(Path::to_path_buf).or_else(omarchy_theme_path);

        if let Some(path) = candidate {
            match fs::read_to_string(&path) {
                Ok(content) => {
                    if let Some(theme) = Self::from_kitty_conf(&content) {
                        tracing::debug!("Loaded theme from {}", path.display());
                        return theme;
                    }
                }
                Err(e) if theme_file.is_some() => {
                    tracing::warn!("Could not read theme {}: {}", path.display(), e);
                }
                Err(_) => {}
            }
        }

        Self::default()
    }

    /// Build a theme from kitty.conf content; `None` if it has no colors
    pub fn from_kitty_conf(content: &str) -> Option<Self> {
        let colors = parse_kitty_conf(content);
        if colors.is_empty() {
            return None;
        }

        let base = Self::default();
        let pick = |keys: &[&str], fallback: Color| {
            keys.iter()
                .find_map(|k| colors.get(*k).copied())
                .unwrap_or(fallback)
        };

        let danger = pick(&["color1", "color9"], base.danger);
        Some(Self {
            accent: pick(&["color2", "color10"], base.accent),
            danger,
            text: pick(&["foreground"], base.text),
            text_dim: pick(&["color8"], base.text_dim),
            bg_selected: pick(&["selection_background", "color0"], base.bg_selected),
            inactive: pick(&["inactive_border_color", "color8"], base.inactive),
            header: danger,
        })
    }
}

fn omarchy_theme_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".config/omarchy/current/theme/kitty.conf");
    path.exists().then_some(path)
}

fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once(char::is_whitespace)?;
            Some((key.to_string(), parse_hex_color(value)?))
        })
        .collect()
}

/// `#rrggbb` or `#rgb`
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => Some(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFC107"), Some(Color::Rgb(255, 193, 7)));
        assert_eq!(parse_hex_color(" #fff "), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("FFC107"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_from_kitty_conf() {
        let conf = "# comment\nforeground #bebebe\ncolor1 #D35F5F\ncolor2   #FFC107\nfont_size 11\n";
        let theme = Theme::from_kitty_conf(conf).unwrap();
        assert_eq!(theme.text, Color::Rgb(190, 190, 190));
        assert_eq!(theme.accent, Color::Rgb(255, 193, 7));
        assert_eq!(theme.header, Color::Rgb(211, 95, 95));
        assert_eq!(theme.inactive, Theme::default().inactive);
    }

    #[test]
    fn test_conf_without_colors_is_none() {
        assert!(Theme::from_kitty_conf("font_size 11\n").is_none());
    }
}
