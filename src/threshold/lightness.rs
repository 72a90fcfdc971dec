use tracing::debug;

use crate::math::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::math::rgb::{Hsl, Rgb};
use crate::math::wcag::Level;

use super::criteria::{Direction, SearchCriteria};
use super::{find_ratio, pick_best, Axis};

/// Varies HSL lightness with the other color's hue and saturation held.
#[derive(Debug, Clone, Copy)]
pub struct LightnessAxis {
    pub hue: f64,
    pub saturation: f64,
}

impl LightnessAxis {
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self {
            hue: hsl.h,
            saturation: hsl.s,
        }
    }
}

impl Axis for LightnessAxis {
    const NAME: &'static str = "lightness";

    fn rgb_at(&self, lightness: f64) -> Rgb {
        hsl_to_rgb(Hsl {
            h: self.hue,
            s: self.saturation,
            l: lightness,
        })
    }

    // Lightness already lands on channel values through hsl_to_rgb;
    // snapping it to one decimal would skip reachable colors.
    fn snap(&self, _criteria: &SearchCriteria, lightness: f64) -> f64 {
        lightness
    }
}

/// Adjust the lightness of `other` until it contrasts with `fixed` at
/// `level`. Best effort, like the brightness variant: when the extreme of
/// the lightness range still misses the level, that extreme is returned.
pub fn find_lightness_threshold(fixed: Rgb, other: Rgb, level: Level) -> Rgb {
    find_lightness_threshold_for_ratio(fixed, other, level.ratio())
}

pub fn find_lightness_threshold_for_ratio(fixed: Rgb, other: Rgb, target_ratio: f64) -> Rgb {
    let criteria = SearchCriteria::new(target_ratio, fixed, other);
    let other_hsl = rgb_to_hsl(other);
    let axis = LightnessAxis::from_hsl(other_hsl);
    let (min, max) = lightness_range(criteria.direction, other_hsl.l);

    if let Some(boundary) = boundary_color(&criteria, min, max) {
        debug!(
            fixed = %fixed,
            other = %other,
            target_ratio,
            boundary = %boundary,
            "lightness boundary cannot reach target"
        );
        return boundary;
    }

    let (l, sufficient_l) = find_ratio(&axis, &criteria, (max + min) / 2.0, max - min);
    debug!(
        fixed = %fixed,
        other = %other,
        target_ratio,
        l,
        sufficient_l = ?sufficient_l,
        "lightness search converged"
    );
    pick_best(&axis, &criteria, l, sufficient_l)
}

/// `(min, max)` lightness the search may visit.
fn lightness_range(direction: Direction, initial: f64) -> (f64, f64) {
    match direction {
        Direction::Darker => (0.0, initial),
        Direction::Brighter => (initial, 100.0),
    }
}

// An extreme of the range that still fails the target is the answer itself.
fn boundary_color(criteria: &SearchCriteria, min: f64, max: f64) -> Option<Rgb> {
    if min == 0.0 && !criteria.has_sufficient_contrast(Rgb::BLACK) {
        return Some(Rgb::BLACK);
    }
    if max == 100.0 && !criteria.has_sufficient_contrast(Rgb::WHITE) {
        return Some(Rgb::WHITE);
    }
    None
}
