//! Bisection search for the nearest color that meets a contrast target.
//!
//! An [`Axis`] maps a single real parameter (brightness ratio, HSL
//! lightness) to a color. [`find_ratio`] walks that parameter with halving
//! steps, steered by [`SearchCriteria`], and [`pick_best`] turns the
//! converged parameter into the final color.
//!
//! The walk assumes contrast is monotone in the parameter over the axis
//! range. Nothing checks this; an axis that breaks it can converge on a
//! local crossing.

pub mod brightness;
pub mod criteria;
pub mod lightness;

use tracing::trace;

use crate::math::rgb::Rgb;
use criteria::SearchCriteria;

pub use brightness::{find_brightness_threshold, find_brightness_threshold_for_ratio};
pub use lightness::{find_lightness_threshold, find_lightness_threshold_for_ratio};

/// Steps narrower than this end the search.
pub const MIN_STEP_WIDTH: f64 = 0.01;

/// One-dimensional parameterization of the adjustable color.
pub trait Axis {
    /// Name used in trace output.
    const NAME: &'static str;

    /// Color produced at parameter value `param`.
    fn rgb_at(&self, param: f64) -> Rgb;

    /// Representable parameter the final color is built from.
    fn snap(&self, criteria: &SearchCriteria, param: f64) -> f64 {
        criteria.round(param)
    }
}

/// Halving widths `initial/2, initial/4, ...` while they stay above `min`.
#[derive(Debug, Clone)]
pub struct StepWidths {
    initial: f64,
    min: f64,
    exponent: i32,
    done: bool,
}

impl StepWidths {
    pub fn new(initial: f64, min: f64) -> Self {
        Self {
            initial,
            min,
            exponent: 1,
            done: false,
        }
    }
}

impl Iterator for StepWidths {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        let d = self.initial / 2f64.powi(self.exponent);
        if d > self.min {
            self.exponent += 1;
            Some(d)
        } else {
            self.done = true;
            None
        }
    }
}

pub fn step_widths(initial: f64, min: f64) -> StepWidths {
    StepWidths::new(initial, min)
}

/// Bisect along `axis` starting at `initial_r`.
///
/// Returns the converged parameter and the last parameter whose color met
/// the target, if any did. An exact hit on the target stops early.
pub fn find_ratio<A: Axis>(
    axis: &A,
    criteria: &SearchCriteria,
    initial_r: f64,
    initial_width: f64,
) -> (f64, Option<f64>) {
    let mut r = initial_r;
    let mut sufficient_r = None;

    for d in step_widths(initial_width, MIN_STEP_WIDTH) {
        let ratio = criteria.contrast_ratio(axis.rgb_at(r));
        trace!(axis = A::NAME, r, ratio, d, "bisection step");

        if ratio >= criteria.target_ratio {
            sufficient_r = Some(r);
        }
        if ratio == criteria.target_ratio {
            break;
        }

        if criteria.increment_condition(ratio) {
            r += d;
        } else {
            r -= d;
        }
    }

    (r, sufficient_r)
}

/// Color at the snapped converged parameter, unless it misses the target
/// while a known-sufficient parameter exists.
pub fn pick_best<A: Axis>(
    axis: &A,
    criteria: &SearchCriteria,
    r: f64,
    sufficient_r: Option<f64>,
) -> Rgb {
    let nearest = axis.rgb_at(axis.snap(criteria, r));

    match sufficient_r {
        Some(sr) if !criteria.has_sufficient_contrast(nearest) => {
            axis.rgb_at(axis.snap(criteria, sr))
        }
        _ => nearest,
    }
}
