use csscolorparser::Color;

use crate::error::ColorError;

use super::hex::hex_to_rgb;
use super::rgb::Rgb;

/// Parse any opaque CSS color value to RGB.
/// Handles: hex (3/6 digit), rgb(), hsl(), hwb(), oklch, named colors.
///
/// Hex input goes through [`hex_to_rgb`] so malformed codes report
/// `InvalidFormat` the same way as the hex API. Translucent colors are
/// rejected: contrast is only defined here for opaque pairs.
pub fn parse_color(value: &str) -> Result<Rgb, ColorError> {
    let trimmed = value.trim();

    if trimmed.starts_with('#') {
        return hex_to_rgb(trimmed);
    }

    let color: Color = trimmed
        .parse()
        .map_err(|_| ColorError::InvalidFormat(value.to_string()))?;
    let [r, g, b, a] = color.to_rgba8();
    if a < 255 {
        return Err(ColorError::InvalidFormat(format!("{value} (not opaque)")));
    }
    Ok(Rgb::new(r, g, b))
}
