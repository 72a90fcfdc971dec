use crate::math::rgb::Rgb;
use crate::math::wcag::{is_light_color, luminance_to_contrast_ratio, relative_luminance};

/// Which way the adjusted color travels while the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward black: the fixed color is the brighter one.
    Darker,
    /// Toward white: the fixed color is the darker one.
    Brighter,
}

impl Direction {
    /// Darker when the fixed color is brighter than the other one. On equal
    /// luminance a light fixed color sends the search toward black.
    pub fn determine(fixed: Rgb, other: Rgb) -> Self {
        let fixed_luminance = relative_luminance(fixed);
        let other_luminance = relative_luminance(other);

        if fixed_luminance > other_luminance
            || (fixed_luminance == other_luminance && is_light_color(fixed))
        {
            Direction::Darker
        } else {
            Direction::Brighter
        }
    }

    /// Snap a parameter to one decimal, toward the side that keeps contrast.
    pub fn round(self, r: f64) -> f64 {
        match self {
            Direction::Darker => (r * 10.0).floor() / 10.0,
            Direction::Brighter => (r * 10.0).ceil() / 10.0,
        }
    }
}

/// Per-call search policy: target, fixed luminance, and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCriteria {
    pub target_ratio: f64,
    pub fixed_luminance: f64,
    pub direction: Direction,
}

impl SearchCriteria {
    /// `other` only picks the direction; it is not kept.
    pub fn new(target_ratio: f64, fixed: Rgb, other: Rgb) -> Self {
        Self {
            target_ratio,
            fixed_luminance: relative_luminance(fixed),
            direction: Direction::determine(fixed, other),
        }
    }

    pub fn round(&self, r: f64) -> f64 {
        self.direction.round(r)
    }

    /// Whether the search parameter should grow after observing `ratio`.
    pub fn increment_condition(&self, ratio: f64) -> bool {
        match self.direction {
            // still more contrast than needed: keep moving toward the fixed color
            Direction::Darker => ratio > self.target_ratio,
            Direction::Brighter => self.target_ratio > ratio,
        }
    }

    pub fn contrast_ratio(&self, rgb: Rgb) -> f64 {
        luminance_to_contrast_ratio(self.fixed_luminance, relative_luminance(rgb))
    }

    pub fn has_sufficient_contrast(&self, rgb: Rgb) -> bool {
        self.contrast_ratio(rgb) >= self.target_ratio
    }
}
