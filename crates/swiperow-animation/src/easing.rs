//! Easing curves.

/// Maps linear animation progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`.
    #[default]
    FastOutSlowIn,
    /// `cubic-bezier(0.0, 0.0, 0.2, 1.0)`.
    LinearOutSlowIn,
    CubicBezier { a: f32, b: f32, c: f32, d: f32 },
}

const BEZIER_EPSILON: f32 = 1e-4;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;

impl Easing {
    pub fn transform(self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::CubicBezier { a, b, c, d } => cubic_bezier(a, b, c, d, fraction),
        }
    }
}

/// One coordinate of a bezier with endpoints at 0 and 1.
fn bezier_coordinate(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(a: f32, b: f32, c: f32, d: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 || fraction >= 1.0 {
        return fraction;
    }

    // Newton first, bisection when the slope flattens out.
    let mut t = fraction;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_coordinate(a, c, t) - fraction;
        if error.abs() < BEZIER_EPSILON {
            return bezier_coordinate(b, d, t);
        }
        let slope = bezier_slope(a, c, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = fraction;
    for _ in 0..BISECTION_ITERATIONS {
        let x = bezier_coordinate(a, c, t);
        if (x - fraction).abs() < BEZIER_EPSILON {
            break;
        }
        if x < fraction {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) * 0.5;
    }
    bezier_coordinate(b, d, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::FastOutSlowIn, Easing::LinearOutSlowIn] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn fast_out_slow_in_is_monotonic_and_ahead_of_linear_late() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = Easing::FastOutSlowIn.transform(step as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
        assert!(Easing::FastOutSlowIn.transform(0.7) > 0.7);
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        assert_eq!(Easing::Linear.transform(-1.0), 0.0);
        assert_eq!(Easing::FastOutSlowIn.transform(3.0), 1.0);
    }
}
