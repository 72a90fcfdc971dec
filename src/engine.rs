use std::str::FromStr;

use rayon::prelude::*;
use tracing::debug_span;

use crate::error::ColorError;
use crate::math::color_parse::parse_color;
use crate::math::hex::rgb_to_hex;
use crate::math::rgb::Rgb;
use crate::math::wcag::{contrast_ratio, resolve_target_ratio, Level};
use crate::threshold::{find_brightness_threshold_for_ratio, find_lightness_threshold_for_ratio};
use crate::types::{BatchOptions, ThresholdRequest, ThresholdResult};

/// Which parameter a threshold request varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAxis {
    #[default]
    Brightness,
    Lightness,
}

impl FromStr for SearchAxis {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brightness" => Ok(SearchAxis::Brightness),
            "lightness" => Ok(SearchAxis::Lightness),
            _ => Err(ColorError::UnknownAxis(s.to_string())),
        }
    }
}

/// Run the threshold search on one axis.
pub fn find_threshold(axis: SearchAxis, fixed: Rgb, other: Rgb, target_ratio: f64) -> Rgb {
    match axis {
        SearchAxis::Brightness => find_brightness_threshold_for_ratio(fixed, other, target_ratio),
        SearchAxis::Lightness => find_lightness_threshold_for_ratio(fixed, other, target_ratio),
    }
}

/// Resolve and run a single request. Missing level/axis fall back to AA
/// and brightness.
pub fn run_request(request: &ThresholdRequest) -> Result<(Rgb, f64, bool), ColorError> {
    let fixed = parse_color(&request.fixed)?;
    let other = parse_color(&request.other)?;
    let target_ratio = match request.level.as_deref() {
        Some(token) => resolve_target_ratio(token)?,
        None => Level::default().ratio(),
    };
    let axis = match request.axis.as_deref() {
        Some(name) => name.parse()?,
        None => SearchAxis::default(),
    };

    let found = find_threshold(axis, fixed, other, target_ratio);
    let ratio = contrast_ratio(fixed, found);
    Ok((found, ratio, ratio >= target_ratio))
}

/// Run many threshold requests in parallel.
///
/// Each request is independent (no shared state between searches), so they
/// fan out over Rayon's pool. Output order matches input order; a failing
/// request yields a result with `error` set.
pub fn find_thresholds(options: &BatchOptions) -> Vec<ThresholdResult> {
    let _span = debug_span!("find_thresholds", requests = options.requests.len()).entered();

    options
        .requests
        .par_iter()
        .map(|request| match run_request(request) {
            Ok((found, ratio, meets_target)) => ThresholdResult {
                fixed: request.fixed.clone(),
                other: request.other.clone(),
                hex: Some(rgb_to_hex(found)),
                ratio: Some(ratio),
                meets_target: Some(meets_target),
                error: None,
            },
            Err(err) => ThresholdResult {
                fixed: request.fixed.clone(),
                other: request.other.clone(),
                hex: None,
                ratio: None,
                meets_target: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

/// [`find_thresholds`] over a JSON document shaped like [`BatchOptions`].
pub fn find_thresholds_json(json: &str) -> Result<Vec<ThresholdResult>, ColorError> {
    let options: BatchOptions =
        serde_json::from_str(json).map_err(|e| ColorError::InvalidConfig(e.to_string()))?;
    Ok(find_thresholds(&options))
}
