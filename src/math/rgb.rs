use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build from untyped numeric components (e.g. values handed over from JS).
    /// Requires exactly three integral values within 0..=255.
    pub fn from_components(components: &[f64]) -> Result<Self, ColorError> {
        if !is_valid_rgb(components) {
            return Err(ColorError::InvalidRange(format!("rgb{:?}", components)));
        }
        Ok(Self::new(
            components[0] as u8,
            components[1] as u8,
            components[2] as u8,
        ))
    }

    /// Map each channel through `f` and clamp-round the results back into RGB.
    pub fn map_channels(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            clamp_round(f(self.r as f64)),
            clamp_round(f(self.g as f64)),
            clamp_round(f(self.b as f64)),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::hex::rgb_to_hex(*self))
    }
}

/// HSL with hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Validated constructor. Hue wraps into [0, 360); saturation and
    /// lightness must already be within [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        if !is_valid_hsl(h, s, l) {
            return Err(ColorError::InvalidRange(format!("hsl({h}, {s}, {l})")));
        }
        Ok(Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        })
    }
}

/// True when `components` holds exactly three integers in 0..=255.
pub fn is_valid_rgb(components: &[f64]) -> bool {
    components.len() == 3
        && components
            .iter()
            .all(|&c| c.fract() == 0.0 && (0.0..=255.0).contains(&c))
}

/// True when hue is finite and saturation/lightness are within [0, 100].
pub fn is_valid_hsl(h: f64, s: f64, l: f64) -> bool {
    h.is_finite() && (0.0..=100.0).contains(&s) && (0.0..=100.0).contains(&l)
}

/// Clamp to [0, 255] and round to the nearest integer.
/// An exact `.5` fraction always rounds up, never to even.
pub fn clamp_round(value: f64) -> u8 {
    let v = value.clamp(0.0, 255.0);
    if v.fract() == 0.5 {
        v.ceil() as u8
    } else {
        v.round() as u8
    }
}

/// CSS `filter: brightness(ratio%)`: scale every channel linearly.
/// 100 is the identity, 0 gives black; values above 100 brighten until
/// channels saturate at 255.
pub fn brightness_rgb(rgb: Rgb, ratio: f64) -> Rgb {
    rgb.map_channels(|c| c * ratio / 100.0)
}

/// CSS `filter: contrast(ratio%)`: pull channels toward or away from mid
/// gray. 100 is the identity, 0 gives `#808080`.
pub fn contrast_rgb(rgb: Rgb, ratio: f64) -> Rgb {
    rgb.map_channels(|c| (c * ratio + 255.0 * (50.0 - ratio / 2.0)) / 100.0)
}
