use crate::error::ColorError;

use super::hex::{hex_to_rgb, rgb_to_hex};
use super::rgb::{clamp_round, Hsl, Rgb};

/// CSS Color Level 3 HSL -> RGB (the `m1`/`m2` formulation).
/// Channels go through [`clamp_round`], so `.5` ties round up.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    Rgb::new(
        clamp_round(hue_to_rgb(m1, m2, h + 1.0 / 3.0) * 255.0),
        clamp_round(hue_to_rgb(m1, m2, h) * 255.0),
        clamp_round(hue_to_rgb(m1, m2, h - 1.0 / 3.0) * 255.0),
    )
}

fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> f64 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// RGB -> HSL. Not an exact inverse of [`hsl_to_rgb`]: channels are
/// rounded on the way back.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let channels = rgb.channels();
    let max = channels.iter().copied().max().unwrap_or(0) as f64;
    let min = channels.iter().copied().min().unwrap_or(0) as f64;

    let l = (max + min) / 510.0;

    Hsl {
        h: rgb_to_hue(channels),
        s: saturation(max / 255.0, min / 255.0, l) * 100.0,
        l: l * 100.0,
    }
}

fn saturation(max: f64, min: f64, l: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    let d = max - min;
    if l <= 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    }
}

// Each channel sits 120 degrees from the previous one; when two channels tie
// for maximum, the earlier one (R, then G) decides the sector.
fn rgb_to_hue(channels: [u8; 3]) -> f64 {
    let max_idx = (1..3).fold(0, |best, i| if channels[i] > channels[best] { i } else { best });
    let max = channels[max_idx] as f64;
    let min = channels.iter().copied().min().unwrap_or(0) as f64;
    if max == min {
        return 0.0;
    }

    let next = channels[(max_idx + 1) % 3] as f64;
    let prev = channels[(max_idx + 2) % 3] as f64;
    let h = max_idx as f64 * 120.0 + 60.0 * (next - prev) / (max - min);

    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

pub fn hex_to_hsl(code: &str) -> Result<Hsl, ColorError> {
    Ok(rgb_to_hsl(hex_to_rgb(code)?))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }

    fn assert_hsl_close(actual: Hsl, expected: (f64, f64, f64), tolerance: f64) {
        assert!((actual.h - expected.0).abs() <= tolerance, "h: {actual:?}");
        assert!((actual.s - expected.1).abs() <= tolerance, "s: {actual:?}");
        assert!((actual.l - expected.2).abs() <= tolerance, "l: {actual:?}");
    }

    #[test]
    fn primaries_and_secondaries() {
        assert_eq!(hsl_to_rgb(hsl(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(hsl(30.0, 100.0, 50.0)), Rgb::new(255, 128, 0));
        assert_eq!(hsl_to_rgb(hsl(60.0, 100.0, 50.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(hsl(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(hsl(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn named_color_hex_values() {
        // greenyellow and indianred
        assert_eq!(hsl_to_hex(hsl(83.653, 100.0, 59.215)), "#adff2f");
        assert_eq!(hsl_to_hex(hsl(0.0, 53.0, 58.2352)), "#cd5c5c");
    }

    #[test]
    fn rgb_to_hsl_exact_cases() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), hsl(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 0)), hsl(60.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), hsl(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 255)), hsl(180.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), hsl(240.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::BLACK), hsl(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(Rgb::WHITE), hsl(0.0, 0.0, 100.0));
    }

    #[test]
    fn rgb_to_hsl_approximate_cases() {
        assert_hsl_close(rgb_to_hsl(Rgb::new(0, 128, 0)), (120.0, 100.0, 25.0), 0.5);
        assert_hsl_close(rgb_to_hsl(Rgb::new(0, 128, 128)), (180.0, 100.0, 25.0), 0.5);
    }

    #[test]
    fn hue_wraps_for_magenta_side() {
        // max is R, B > G -> negative raw hue
        let h = rgb_to_hsl(Rgb::new(255, 0, 128)).h;
        assert!(h > 300.0 && h < 360.0, "got {h}");
    }

    #[test]
    fn hex_round_trips_through_hsl() {
        for hex in ["#ff0000", "#ffffff", "#808080", "#d2691e", "#cd5c5c", "#adff2f"] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_eq!(hsl_to_hex(hsl), hex);
        }
    }

    #[test]
    fn hex_to_hsl_rejects_bad_input() {
        assert!(matches!(hex_to_hsl("#12"), Err(ColorError::InvalidFormat(_))));
    }
}
