#[cfg(feature = "node")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

/// Contrast summary for one foreground/background pair.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub fg_hex: String,
    pub bg_hex: String,
    /// Rounded to 2 decimals
    pub ratio: f64,
    /// "A" | "AA" | "AAA" | "-"
    pub level: String,
    pub pass_a: bool,
    pub pass_aa: bool,
    pub pass_aaa: bool,
}

/// One threshold search: adjust `other` until it contrasts with `fixed`.
/// Colors are any CSS color string (hex, rgb(), hsl(), named).
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRequest {
    pub fixed: String,
    pub other: String,
    /// "A" | "AA" | "AAA" | numeric ratio. Defaults to "AA".
    #[serde(default)]
    pub level: Option<String>,
    /// "brightness" | "lightness". Defaults to "brightness".
    #[serde(default)]
    pub axis: Option<String>,
}

/// Outcome of a [`ThresholdRequest`]. A request with bad input reports
/// `error` instead of failing the whole batch.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdResult {
    pub fixed: String,
    pub other: String,
    /// Adjusted color as `#rrggbb`
    pub hex: Option<String>,
    /// Contrast of `hex` against `fixed`
    pub ratio: Option<f64>,
    /// false when the search hit a boundary short of the target
    pub meets_target: Option<bool>,
    pub error: Option<String>,
}

/// Batch configuration passed from JS (or as JSON text) to Rust
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    pub requests: Vec<ThresholdRequest>,
}
