//! WCAG 2.0 contrast metrics and threshold search.
//!
//! Given a fixed color and an adjustable one, the threshold finders look for
//! the nearest variant of the adjustable color (by CSS brightness or HSL
//! lightness) whose contrast ratio against the fixed color meets A, AA, or
//! AAA. All functions are pure and safe to call from many threads at once.

#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod threshold;
pub mod types;

#[cfg(feature = "node")]
pub mod bindings;

pub use error::ColorError;
pub use math::hex::{hex_to_rgb, normalize_hex, rgb_to_hex};
pub use math::hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use math::rgb::{brightness_rgb, clamp_round, contrast_rgb, is_valid_hsl, is_valid_rgb, Hsl, Rgb};
pub use math::wcag::{
    contrast_level, contrast_ratio, has_higher_luminance, has_max_contrast, has_min_contrast,
    has_same_luminance, has_sufficient_contrast, is_light_color, is_same_color, level_to_ratio,
    luminance_to_contrast_ratio, ratio_to_level, relative_luminance, target_ratio, Level,
};
pub use threshold::{find_brightness_threshold, find_lightness_threshold};
