pub mod color;
pub mod palette;

pub use color::{hex_to_rgb, oklch_str_to_hex, oklch_to_hex, parse_oklch, OklchParseError};
pub use palette::{builtin_themes, theme_by_name, ResolvedTheme, Theme};
