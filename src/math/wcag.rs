use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

use super::hex::hex_to_rgb;
use super::rgb::Rgb;

/// WCAG 2.0 conformance level for text contrast.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    A,
    #[default]
    AA,
    AAA,
}

impl Level {
    /// Minimum contrast ratio required by the level.
    pub const fn ratio(self) -> f64 {
        match self {
            Level::A => 3.0,
            Level::AA => 4.5,
            Level::AAA => 7.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::A => "A",
            Level::AA => "AA",
            Level::AAA => "AAA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Level::A),
            "AA" => Ok(Level::AA),
            "AAA" => Ok(Level::AAA),
            _ => Err(ColorError::UnknownLevel(s.to_string())),
        }
    }
}

/// Convert an sRGB channel (0-255) to linear light.
/// WCAG 2.0 uses 0.03928 as the knee of the piecewise curve.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.0, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    srgb_to_linear(rgb.r) * 0.2126 + srgb_to_linear(rgb.g) * 0.7152 + srgb_to_linear(rgb.b) * 0.0722
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2. Argument order does not matter.
pub fn luminance_to_contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG 2.0 contrast ratio between two colors, in [1, 21].
pub fn contrast_ratio(rgb1: Rgb, rgb2: Rgb) -> f64 {
    luminance_to_contrast_ratio(relative_luminance(rgb1), relative_luminance(rgb2))
}

/// Highest level a ratio satisfies, or `None` below 3:1.
pub fn ratio_to_level(ratio: f64) -> Option<Level> {
    if ratio >= 7.0 {
        Some(Level::AAA)
    } else if ratio >= 4.5 {
        Some(Level::AA)
    } else if ratio >= 3.0 {
        Some(Level::A)
    } else {
        None
    }
}

/// Report form of a level: "A", "AA", "AAA", or "-" for none.
pub fn level_label(level: Option<Level>) -> &'static str {
    level.map_or("-", Level::as_str)
}

/// Target ratio for a level token. Numeric tokens within [1, 21] are taken
/// as the ratio itself. Unrecognized tokens yield `None`.
pub fn level_to_ratio(token: &str) -> Option<f64> {
    if let Ok(level) = token.parse::<Level>() {
        return Some(level.ratio());
    }
    target_ratio(token.trim().parse().ok()?)
}

/// A raw ratio as a search target: kept if within [1, 21], else `None`.
pub fn target_ratio(ratio: f64) -> Option<f64> {
    (1.0..=21.0).contains(&ratio).then_some(ratio)
}

impl From<Level> for f64 {
    fn from(level: Level) -> f64 {
        level.ratio()
    }
}

/// Like [`level_to_ratio`], but an unknown token is an error.
pub fn resolve_target_ratio(token: &str) -> Result<f64, ColorError> {
    level_to_ratio(token).ok_or_else(|| ColorError::UnknownLevel(token.to_string()))
}

/// True when the color contrasts at least as well with black as with white.
pub fn is_light_color(rgb: Rgb) -> bool {
    let l = relative_luminance(rgb);
    let against_white = luminance_to_contrast_ratio(l, 1.0);
    let against_black = luminance_to_contrast_ratio(l, 0.0);
    against_white <= against_black
}

pub fn has_sufficient_contrast(rgb1: Rgb, rgb2: Rgb, level: Level) -> bool {
    contrast_ratio(rgb1, rgb2) >= level.ratio()
}

pub fn has_higher_luminance(rgb: Rgb, other: Rgb) -> bool {
    relative_luminance(rgb) > relative_luminance(other)
}

pub fn has_same_luminance(rgb: Rgb, other: Rgb) -> bool {
    relative_luminance(rgb) == relative_luminance(other)
}

pub fn contrast_level(rgb1: Rgb, rgb2: Rgb) -> Option<Level> {
    ratio_to_level(contrast_ratio(rgb1, rgb2))
}

/// Hex codes are compared after normalization, so `#FFF` matches `#ffffff`.
/// Unparseable codes never match.
pub fn is_same_color(rgb: Rgb, code: &str) -> bool {
    hex_to_rgb(code).is_ok_and(|other| other == rgb)
}

/// True when a contrast filter above 100% can no longer change the color:
/// every channel is already 0 or 255.
pub fn has_max_contrast(rgb: Rgb) -> bool {
    rgb.channels().iter().all(|&c| c == 0 || c == 255)
}

/// True for `#808080`, the fixed point of a 0% contrast filter.
pub fn has_min_contrast(rgb: Rgb) -> bool {
    rgb == Rgb::GRAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rgb(hex: &str) -> Rgb {
        hex_to_rgb(hex).unwrap()
    }

    #[test]
    fn black_on_white_is_exactly_21() {
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
    }

    #[test]
    fn same_color_is_exactly_1() {
        assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::WHITE), 1.0);
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::BLACK), 1.0);
    }

    #[test]
    fn olive_on_white() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::new(127, 127, 32));
        assert!((ratio - 4.23).abs() < 0.005, "got {ratio}");
    }

    #[test]
    fn gray_on_white() {
        let ratio = contrast_ratio(rgb("#767676"), Rgb::WHITE);
        assert!((ratio - 4.54).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn luminance_form_matches_rgb_form() {
        let white_l = relative_luminance(Rgb::WHITE);
        let black_l = relative_luminance(Rgb::BLACK);
        assert_eq!(white_l, 1.0);
        assert_eq!(black_l, 0.0);
        assert_eq!(luminance_to_contrast_ratio(black_l, white_l), 21.0);
        assert_eq!(luminance_to_contrast_ratio(white_l, black_l), 21.0);
        let olive_l = relative_luminance(Rgb::new(127, 127, 32));
        assert!((luminance_to_contrast_ratio(white_l, olive_l) - 4.23).abs() < 0.005);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(ratio_to_level(7.0), Some(Level::AAA));
        assert_eq!(ratio_to_level(4.5), Some(Level::AA));
        assert_eq!(ratio_to_level(3.0), Some(Level::A));
        assert_eq!(ratio_to_level(2.9), None);
        assert_eq!(level_label(ratio_to_level(2.9)), "-");
        assert_eq!(level_label(ratio_to_level(21.0)), "AAA");
    }

    #[test]
    fn level_tokens_to_ratio() {
        assert_eq!(level_to_ratio("A"), Some(3.0));
        assert_eq!(level_to_ratio("AA"), Some(4.5));
        assert_eq!(level_to_ratio("AAA"), Some(7.0));
        assert_eq!(level_to_ratio("aa"), Some(4.5));
    }

    #[test]
    fn numeric_tokens_pass_through() {
        assert_eq!(level_to_ratio("4.5"), Some(4.5));
        assert_eq!(level_to_ratio("1"), Some(1.0));
        assert_eq!(level_to_ratio("21"), Some(21.0));
        assert_eq!(level_to_ratio("21.5"), None);
        assert_eq!(level_to_ratio("0.5"), None);
    }

    #[test]
    fn unknown_level_is_absent_or_error() {
        assert_eq!(level_to_ratio("AAAA"), None);
        assert_eq!(level_to_ratio(""), None);
        assert!(matches!(
            resolve_target_ratio("B"),
            Err(ColorError::UnknownLevel(_))
        ));
        assert!("gold".parse::<Level>().is_err());
    }

    #[test]
    fn level_display_round_trips() {
        for level in [Level::A, Level::AA, Level::AAA] {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
        assert_eq!(Level::default(), Level::AA);
    }

    #[test]
    fn light_and_dark_colors() {
        assert!(is_light_color(Rgb::WHITE));
        assert!(is_light_color(rgb("#ffff00")));
        assert!(is_light_color(rgb("#00ff7f")));
        assert!(is_light_color(rgb("#808080")));
        assert!(!is_light_color(Rgb::BLACK));
        assert!(!is_light_color(rgb("#006400")));
    }

    #[test]
    fn facade_helpers() {
        let orange = rgb("#ffa500");
        assert!(has_sufficient_contrast(Rgb::BLACK, orange, Level::AAA));
        assert!(!has_sufficient_contrast(Rgb::WHITE, orange, Level::A));
        assert!(has_higher_luminance(Rgb::WHITE, orange));
        assert!(!has_higher_luminance(orange, orange));
        assert_eq!(contrast_level(Rgb::BLACK, Rgb::WHITE), Some(Level::AAA));
        assert_eq!(contrast_level(orange, orange), None);
    }

    #[test]
    fn same_color_and_luminance() {
        let orange = rgb("#ffa500");
        assert!(is_same_color(orange, "#ffa500"));
        assert!(is_same_color(orange, "FFA500"));
        assert!(is_same_color(Rgb::WHITE, "#fff"));
        assert!(!is_same_color(orange, "#ffa501"));
        assert!(!is_same_color(orange, "orange-ish"));
        assert!(has_same_luminance(orange, orange));
        assert!(!has_same_luminance(orange, Rgb::WHITE));
    }

    #[test]
    fn contrast_extremes() {
        assert!(has_max_contrast(Rgb::BLACK));
        assert!(has_max_contrast(rgb("#ffff00")));
        assert!(has_max_contrast(rgb("#00ffff")));
        assert!(!has_max_contrast(rgb("#ffa500")));
        assert!(has_min_contrast(rgb("#808080")));
        assert!(!has_min_contrast(rgb("#7f7f7f")));
    }

    #[test]
    fn numeric_targets_without_text() {
        assert_eq!(target_ratio(4.5), Some(4.5));
        assert_eq!(target_ratio(21.0), Some(21.0));
        assert_eq!(target_ratio(0.99), None);
        assert_eq!(target_ratio(f64::NAN), None);
        assert_eq!(f64::from(Level::AAA), 7.0);
        let ratio: f64 = Level::A.into();
        assert_eq!(ratio, 3.0);
    }

    proptest! {
        #[test]
        fn self_contrast_is_one(r: u8, g: u8, b: u8) {
            let c = Rgb::new(r, g, b);
            prop_assert_eq!(contrast_ratio(c, c), 1.0);
        }

        #[test]
        fn contrast_is_symmetric_and_bounded(a: [u8; 3], b: [u8; 3]) {
            let (a, b) = (Rgb::from(a), Rgb::from(b));
            let ratio = contrast_ratio(a, b);
            prop_assert_eq!(ratio, contrast_ratio(b, a));
            prop_assert!((1.0..=21.0).contains(&ratio));
        }

        #[test]
        fn luminance_is_normalized(r: u8, g: u8, b: u8) {
            let l = relative_luminance(Rgb::new(r, g, b));
            prop_assert!((0.0..=1.0).contains(&l));
        }
    }
}
