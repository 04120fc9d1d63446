use std::io::IsTerminal;

use crate::theme::{hex_to_rgb, ResolvedTheme};

/// Paints console text with 24-bit ANSI colors taken from a resolved theme.
///
/// When styling is disabled every method returns the text unchanged, so
/// callers never branch on color support themselves.
#[derive(Debug, Clone)]
pub struct Painter {
    theme: ResolvedTheme,
    enabled: bool,
}

impl Painter {
    pub fn new(theme: ResolvedTheme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    /// Styling on when stdout is a terminal and `NO_COLOR` is unset.
    pub fn auto(theme: ResolvedTheme) -> Self {
        let enabled =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(theme, enabled)
    }

    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    /// Foreground-color `text` with an arbitrary `#rrggbb` value. Unparsable
    /// hex strings leave the text unstyled.
    pub fn hex(&self, hex: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match hex_to_rgb(hex) {
            Some([r, g, b]) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
            None => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            format!("\x1b[1m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn primary(&self, text: &str) -> String {
        self.hex(&self.theme.primary, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.hex(&self.theme.muted, text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.hex(&self.theme.accent, text)
    }

    pub fn destructive(&self, text: &str) -> String {
        self.hex(&self.theme.destructive, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.hex(&self.theme.success, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_by_name;

    fn painter(enabled: bool) -> Painter {
        Painter::new(theme_by_name("dark").resolve().unwrap(), enabled)
    }

    #[test]
    fn disabled_painter_passes_text_through() {
        let p = painter(false);
        assert_eq!(p.accent("tasks"), "tasks");
        assert_eq!(p.bold("tasks"), "tasks");
    }

    #[test]
    fn enabled_painter_emits_truecolor_sequences() {
        let p = painter(true);
        let styled = p.hex("#020618", "bg");
        assert_eq!(styled, "\x1b[38;2;2;6;24mbg\x1b[0m");
        assert!(p.bold("x").starts_with("\x1b[1m"));
    }

    #[test]
    fn bad_hex_leaves_text_unstyled() {
        let p = painter(true);
        assert_eq!(p.hex("#nothex", "plain"), "plain");
    }
}
