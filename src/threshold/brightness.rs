use tracing::debug;

use crate::math::rgb::{brightness_rgb, Rgb};
use crate::math::wcag::{relative_luminance, Level};

use super::criteria::SearchCriteria;
use super::{find_ratio, pick_best, Axis};

/// Varies the other color through the CSS `brightness()` filter.
/// Parameter: percentage, 100 = unchanged.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessAxis {
    pub other: Rgb,
}

impl Axis for BrightnessAxis {
    const NAME: &'static str = "brightness";

    fn rgb_at(&self, ratio: f64) -> Rgb {
        brightness_rgb(self.other, ratio)
    }
}

/// Smallest brightness ratio that pushes the darkest non-zero channel to
/// 255; anything above it changes nothing. Black cannot be brightened, so
/// its limit is the identity ratio 100.
pub fn upper_ratio_limit(rgb: Rgb) -> f64 {
    match rgb.channels().into_iter().filter(|&c| c != 0).min() {
        Some(darkest) => ((255.0 / darkest as f64) * 100.0).ceil(),
        None => 100.0,
    }
}

/// Adjust the brightness of `other` until it contrasts with `fixed` at
/// `level`. Best effort: if the level is out of reach the closest color
/// found is returned, so re-check the ratio when it matters.
pub fn find_brightness_threshold(fixed: Rgb, other: Rgb, level: Level) -> Rgb {
    find_brightness_threshold_for_ratio(fixed, other, level.ratio())
}

pub fn find_brightness_threshold_for_ratio(fixed: Rgb, other: Rgb, target_ratio: f64) -> Rgb {
    let criteria = SearchCriteria::new(target_ratio, fixed, other);
    let axis = BrightnessAxis { other };
    let w = upper_ratio_limit(other) / 2.0;

    let limit_color = axis.rgb_at(w * 2.0);
    let other_is_brighter = relative_luminance(other) > relative_luminance(fixed);
    if other_is_brighter && !criteria.has_sufficient_contrast(limit_color) {
        debug!(
            fixed = %fixed,
            other = %other,
            target_ratio,
            limit = w * 2.0,
            "brightness limit cannot reach target"
        );
        return limit_color;
    }

    let (r, sufficient_r) = find_ratio(&axis, &criteria, w, w);
    debug!(
        fixed = %fixed,
        other = %other,
        target_ratio,
        r,
        sufficient_r = ?sufficient_r,
        "brightness search converged"
    );
    pick_best(&axis, &criteria, r, sufficient_r)
}
