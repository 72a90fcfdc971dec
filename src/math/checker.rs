use crate::error::ColorError;
use crate::types::ContrastReport;

use super::color_parse::parse_color;
use super::hex::rgb_to_hex;
use super::rgb::Rgb;
use super::wcag::{contrast_ratio, level_label, ratio_to_level, Level};

/// WCAG ratio, level, and per-level pass flags for one pair.
/// The level is judged on the unrounded ratio.
pub fn check_contrast(fg: Rgb, bg: Rgb) -> ContrastReport {
    let ratio_raw = contrast_ratio(fg, bg);
    let ratio = (ratio_raw * 100.0).round() / 100.0;

    ContrastReport {
        fg_hex: rgb_to_hex(fg),
        bg_hex: rgb_to_hex(bg),
        ratio,
        level: level_label(ratio_to_level(ratio_raw)).to_string(),
        pass_a: ratio_raw >= Level::A.ratio(),
        pass_aa: ratio_raw >= Level::AA.ratio(),
        pass_aaa: ratio_raw >= Level::AAA.ratio(),
    }
}

/// [`check_contrast`] for CSS color strings.
pub fn check_contrast_str(fg: &str, bg: &str) -> Result<ContrastReport, ColorError> {
    Ok(check_contrast(parse_color(fg)?, parse_color(bg)?))
}
