use std::f64::consts::PI;

use thiserror::Error;

/// Error raised when a string is not a well-formed `oklch(<l> <c> <h>)` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid oklch color `{0}`, expected `oklch(<l> <c> <h>)`")]
pub struct OklchParseError(pub String);

/// Convert an OKLCH color (lightness 0..1, chroma, hue in degrees) to a
/// lowercase `#rrggbb` sRGB hex string.
///
/// Out-of-gamut channels are clamped into 0..=255 rather than reported; the
/// conversion itself never fails.
pub fn oklch_to_hex(lightness: f64, chroma: f64, hue: f64) -> String {
    // OKLCH -> OKLAB
    let hue_rad = hue * PI / 180.0;
    let a = chroma * hue_rad.cos();
    let b = chroma * hue_rad.sin();

    // OKLAB -> nonlinear LMS
    let l_ = lightness + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = lightness - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = lightness - 0.0894841775 * a - 1.291485548 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    // LMS -> linear sRGB
    let r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let b = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.707614701 * s3;

    format!(
        "#{:02x}{:02x}{:02x}",
        encode_channel(r),
        encode_channel(g),
        encode_channel(b)
    )
}

/// Gamma-encode one linear channel and quantize it to 8 bits.
#[inline]
fn encode_channel(linear: f64) -> u8 {
    let gamma = if linear.abs() <= 0.0031308 {
        linear * 12.92
    } else {
        linear.signum() * (1.055 * linear.abs().powf(1.0 / 2.4) - 0.055)
    };
    (gamma * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Extract `(lightness, chroma, hue)` from a CSS-style `oklch(L C H)` string.
///
/// Only that exact shape is accepted: three space-separated floats inside the
/// parentheses, no unit suffixes, no alpha component.
pub fn parse_oklch(input: &str) -> Result<(f64, f64, f64), OklchParseError> {
    let invalid = || OklchParseError(input.to_string());
    let inner = input
        .trim()
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut parts = inner.split_whitespace();
    let mut component = || -> Result<f64, OklchParseError> {
        parts
            .next()
            .and_then(|raw| raw.parse::<f64>().ok())
            .ok_or_else(invalid)
    };
    let lightness = component()?;
    let chroma = component()?;
    let hue = component()?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((lightness, chroma, hue))
}

/// Parse an `oklch(L C H)` string and convert it to a `#rrggbb` hex string.
pub fn oklch_str_to_hex(input: &str) -> Result<String, OklchParseError> {
    let (lightness, chroma, hue) = parse_oklch(input)?;
    Ok(oklch_to_hex(lightness, chroma, hue))
}

/// Parse a `#rrggbb` hex string (leading `#` optional) into an RGB triple.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some([r, g, b])
}
