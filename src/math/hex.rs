use crate::error::ColorError;

use super::rgb::Rgb;

/// Drop a single leading `#` if present.
pub fn strip_hash(code: &str) -> &str {
    code.strip_prefix('#').unwrap_or(code)
}

/// Parse a 3- or 6-digit hex code (with or without `#`) to RGB.
/// 3-digit shorthand doubles each digit, so `#fa0` is `#ffaa00`.
pub fn hex_to_rgb(code: &str) -> Result<Rgb, ColorError> {
    let raw = strip_hash(code);
    let invalid = || ColorError::InvalidFormat(code.to_string());

    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match raw.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, digit) in channels.iter_mut().zip(raw.chars()) {
                let nibble = digit.to_digit(16).ok_or_else(invalid)? as u8;
                *slot = nibble * 17;
            }
            Ok(Rgb::from(channels))
        }
        6 => {
            let r = u8::from_str_radix(&raw[0..2], 16).map_err(|_| invalid())?;
            let g = u8::from_str_radix(&raw[2..4], 16).map_err(|_| invalid())?;
            let b = u8::from_str_radix(&raw[4..6], 16).map_err(|_| invalid())?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

/// Format as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Canonical lowercase 6-digit form, with or without the leading `#`.
pub fn normalize_hex(code: &str, prefix: bool) -> Result<String, ColorError> {
    let hex = rgb_to_hex(hex_to_rgb(code)?);
    if prefix {
        Ok(hex)
    } else {
        Ok(strip_hash(&hex).to_string())
    }
}
