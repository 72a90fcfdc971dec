//! Node-API surface. Colors cross the boundary as CSS strings or `[r, g, b]`
//! number arrays; results go back as `#rrggbb`.

use napi::Result;

use crate::math::checker::check_contrast_str;
use crate::math::color_parse::parse_color;
use crate::math::hex::rgb_to_hex;
use crate::math::rgb::Rgb;
use crate::math::wcag::{self, level_label, resolve_target_ratio};
use crate::threshold::{find_brightness_threshold_for_ratio, find_lightness_threshold_for_ratio};
use crate::types::{BatchOptions, ContrastReport, ThresholdResult};

#[napi]
pub fn health_check() -> String {
    "wcag-threshold ok".to_string()
}

#[napi]
pub fn relative_luminance(color: String) -> Result<f64> {
    Ok(wcag::relative_luminance(parse_color(&color)?))
}

#[napi]
pub fn relative_luminance_rgb(rgb: Vec<f64>) -> Result<f64> {
    Ok(wcag::relative_luminance(Rgb::from_components(&rgb)?))
}

#[napi]
pub fn contrast_ratio(color1: String, color2: String) -> Result<f64> {
    Ok(wcag::contrast_ratio(parse_color(&color1)?, parse_color(&color2)?))
}

/// "A" | "AA" | "AAA" | "-"
#[napi]
pub fn ratio_to_level(ratio: f64) -> String {
    level_label(wcag::ratio_to_level(ratio)).to_string()
}

/// `null` for unknown tokens.
#[napi]
pub fn level_to_ratio(level: String) -> Option<f64> {
    wcag::level_to_ratio(&level)
}

#[napi]
pub fn is_light_color(color: String) -> Result<bool> {
    Ok(wcag::is_light_color(parse_color(&color)?))
}

#[napi]
pub fn check_contrast(fg: String, bg: String) -> Result<ContrastReport> {
    Ok(check_contrast_str(&fg, &bg)?)
}

#[napi]
pub fn find_brightness_threshold(fixed: String, other: String, level: Option<String>) -> Result<String> {
    let target = resolve_target_ratio(level.as_deref().unwrap_or("AA"))?;
    let found = find_brightness_threshold_for_ratio(parse_color(&fixed)?, parse_color(&other)?, target);
    Ok(rgb_to_hex(found))
}

#[napi]
pub fn find_lightness_threshold(fixed: String, other: String, level: Option<String>) -> Result<String> {
    let target = resolve_target_ratio(level.as_deref().unwrap_or("AA"))?;
    let found = find_lightness_threshold_for_ratio(parse_color(&fixed)?, parse_color(&other)?, target);
    Ok(rgb_to_hex(found))
}

#[napi]
pub fn find_thresholds(options: BatchOptions) -> Vec<ThresholdResult> {
    crate::engine::find_thresholds(&options)
}

#[napi]
pub fn find_thresholds_json(json: String) -> Result<Vec<ThresholdResult>> {
    Ok(crate::engine::find_thresholds_json(&json)?)
}
