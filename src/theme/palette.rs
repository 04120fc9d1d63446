use super::color::{oklch_str_to_hex, OklchParseError};

/// A console color theme. Every role is a CSS-style `oklch(L C H)` string so
/// the palette definitions stay directly comparable with the web UI tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub destructive: &'static str,
    pub success: &'static str,
}

/// A theme with every role converted to a `#rrggbb` hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub name: &'static str,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub primary: String,
    pub accent: String,
    pub destructive: String,
    pub success: String,
}

impl Theme {
    pub fn resolve(&self) -> Result<ResolvedTheme, OklchParseError> {
        Ok(ResolvedTheme {
            name: self.name,
            background: oklch_str_to_hex(self.background)?,
            foreground: oklch_str_to_hex(self.foreground)?,
            muted: oklch_str_to_hex(self.muted)?,
            primary: oklch_str_to_hex(self.primary)?,
            accent: oklch_str_to_hex(self.accent)?,
            destructive: oklch_str_to_hex(self.destructive)?,
            success: oklch_str_to_hex(self.success)?,
        })
    }

    /// Role name / OKLCH value pairs in display order.
    pub fn roles(&self) -> [(&'static str, &'static str); 7] {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("muted", self.muted),
            ("primary", self.primary),
            ("accent", self.accent),
            ("destructive", self.destructive),
            ("success", self.success),
        ]
    }
}

impl ResolvedTheme {
    /// Role name / hex value pairs in display order.
    pub fn roles(&self) -> [(&'static str, &str); 7] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("muted", self.muted.as_str()),
            ("primary", self.primary.as_str()),
            ("accent", self.accent.as_str()),
            ("destructive", self.destructive.as_str()),
            ("success", self.success.as_str()),
        ]
    }
}

pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme {
            name: "light",
            background: "oklch(1 0 0)",
            foreground: "oklch(0.129 0.042 264.695)",
            muted: "oklch(0.554 0.046 257.417)",
            primary: "oklch(0.208 0.042 265.755)",
            accent: "oklch(0.546 0.245 262.881)",
            destructive: "oklch(0.577 0.245 27.325)",
            success: "oklch(0.627 0.194 149.214)",
        },
        Theme {
            name: "dark",
            background: "oklch(0.129 0.042 264.695)",
            foreground: "oklch(0.984 0.003 247.858)",
            muted: "oklch(0.704 0.04 256.788)",
            primary: "oklch(0.929 0.013 255.508)",
            accent: "oklch(0.707 0.165 254.624)",
            destructive: "oklch(0.704 0.191 22.216)",
            success: "oklch(0.792 0.209 151.711)",
        },
    ]
}

/// Look up a built-in theme, falling back to the first one when the name is
/// unknown.
pub fn theme_by_name(name: &str) -> Theme {
    let themes = builtin_themes();
    themes
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(themes[0])
}
