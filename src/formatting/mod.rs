use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Always
        } else {
            Self::Never
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if the terminal looks capable
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Apply NO_COLOR / CLICOLOR / CLICOLOR_FORCE from any variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Per no-color.org
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    /// Resolve the final mode: `--plain` wins, then the config file's
    /// `use_color`, then the environment.
    pub fn resolve(plain: bool, use_color: Option<bool>) -> Self {
        if plain {
            return Self::plain();
        }
        let mut config = Self::from_env();
        if let Some(enabled) = use_color {
            config.color = ColorMode::from(enabled);
        }
        config
    }

    pub fn is_plain(&self) -> bool {
        !self.color.should_use_color() && !self.emoji.should_use_emoji()
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bar(&self, text: &str, rank: usize) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Palette cycled through by chart bars, one color per nutrient.
const BAR_PALETTE: [Color; 6] = [
    Color::Green,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bar(&self, text: &str, rank: usize) -> String {
        self.paint(text, |t| t.color(BAR_PALETTE[rank % BAR_PALETTE.len()]))
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bar(&self, text: &str, _rank: usize) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn create_formatter(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.is_plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_color_disables_color() {
        let config = FormattingConfig::from_vars(vars(&[("NO_COLOR", "")]));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_clicolor_zero_disables_color() {
        let config = FormattingConfig::from_vars(vars(&[("CLICOLOR", "0")]));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_clicolor_force_wins_over_no_color() {
        let config =
            FormattingConfig::from_vars(vars(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]));
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_plain_overrides_config_color() {
        let config = FormattingConfig::resolve(true, Some(true));
        assert_eq!(config, FormattingConfig::plain());
        assert!(config.is_plain());
    }

    #[test]
    fn test_plain_formatter_is_identity() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.header("Title"), "Title");
        assert_eq!(formatter.emoji("✅", "[OK]"), "[OK]");
        assert_eq!(formatter.bar("███", 3), "███");
    }

    #[test]
    fn test_colored_formatter_without_color_is_plain_text() {
        let formatter =
            ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, EmojiMode::Always));
        assert_eq!(formatter.warning("careful"), "careful");
        assert_eq!(formatter.emoji("✅", "[OK]"), "✅");
    }
}
