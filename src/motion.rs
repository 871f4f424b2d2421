//! Frame-driven tween primitives shared by every animated part of the page.
//!
//! Nothing here touches the DOM: a [`TweenClock`] is advanced by the frame
//! deltas the browser hands us and reports an eased progress in `[0, 1]`,
//! which a [`Transition`] turns into a [`Pose`] for inline styling.

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing curve anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Finds the curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled on a flat stretch, fall back to bisection.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let sampled = Self::sample(self.x1, self.x2, t);
            if (sampled - x).abs() < SOLVE_EPSILON {
                break;
            }
            if sampled < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Maps linear progress `x` onto the curve. Input is clamped to `[0, 1]`.
    pub fn apply(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// The easing curves the site animates with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::EaseOut => Self::EASE_OUT.apply(t),
            Easing::EaseInOut => Self::EASE_IN_OUT.apply(t),
        }
    }
}

/// When and how a tween runs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

/// Accumulates frame time for one tween.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenClock {
    timing: Timing,
    elapsed_ms: f64,
    ticked: bool,
}

impl TweenClock {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            elapsed_ms: 0.0,
            ticked: false,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Moves the clock forward and returns the new eased progress.
    /// Negative or non-finite deltas are ignored so progress never runs backwards.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms >= 0.0 {
            self.ticked = true;
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.timing.total_ms());
        }
        self.progress()
    }

    /// Linear progress through the active (post-delay) part of the tween.
    pub fn linear_progress(&self) -> f64 {
        if self.timing.duration_ms <= 0.0 {
            return if self.is_finished() { 1.0 } else { 0.0 };
        }
        ((self.elapsed_ms - self.timing.delay_ms) / self.timing.duration_ms).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        self.timing.easing.apply(self.linear_progress())
    }

    /// A clock only finishes after at least one frame, even with nothing to animate.
    pub fn is_finished(&self) -> bool {
        self.ticked && self.elapsed_ms >= self.timing.total_ms()
    }
}

/// The animated visual properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub offset_y: f64,
}

impl Pose {
    pub const fn new(opacity: f64, offset_y: f64) -> Self {
        Self { opacity, offset_y }
    }

    /// Inline CSS for the pose. A resting offset emits no transform, so a settled
    /// ancestor never becomes the containing block of `position: fixed` children.
    pub fn to_style(self) -> String {
        if self.offset_y == 0.0 {
            format!("opacity: {:.3};", self.opacity)
        } else {
            format!(
                "opacity: {:.3}; transform: translateY({:.2}px);",
                self.opacity, self.offset_y
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
}

impl Transition {
    pub const fn new(from: Pose, to: Pose) -> Self {
        Self { from, to }
    }

    /// Interpolates between the two poses at eased `progress`.
    pub fn at(&self, progress: f64) -> Pose {
        let p = progress.clamp(0.0, 1.0);
        Pose {
            opacity: lerp(self.from.opacity, self.to.opacity, p),
            offset_y: lerp(self.from.offset_y, self.to.offset_y, p),
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Fade of the whole content tree once loading is over.
pub const PAGE_FADE: Timing = Timing::new(800.0, Easing::EaseInOut);
pub const FADE_IN: Transition = Transition::new(Pose::new(0.0, 0.0), Pose::new(1.0, 0.0));

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in [Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 0..=200 {
                let v = easing.apply(i as f64 / 200.0);
                assert!(v + 1e-9 >= prev, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_easing_shapes() {
        // ease-in-out is symmetric around the midpoint
        assert!(approx(Easing::EaseInOut.apply(0.5), 0.5));
        assert!(approx(
            Easing::EaseInOut.apply(0.25) + Easing::EaseInOut.apply(0.75),
            1.0
        ));
        // ease-out front-loads the motion
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        // ease-in-out starts slow
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn test_clock_reaches_exactly_one() {
        let mut clock = TweenClock::new(Timing::new(800.0, Easing::EaseOut));
        assert_eq!(clock.progress(), 0.0);
        let mut prev = 0.0;
        for _ in 0..60 {
            let p = clock.advance(16.0);
            assert!(p >= prev);
            prev = p;
        }
        assert!(clock.is_finished());
        assert_eq!(clock.progress(), 1.0);
        assert_eq!(clock.elapsed_ms(), 800.0);
    }

    #[test]
    fn test_clock_holds_through_delay() {
        let mut clock = TweenClock::new(Timing::new(1000.0, Easing::Linear).delayed(500.0));
        assert_eq!(clock.advance(499.0), 0.0);
        assert!(!clock.is_finished());
        assert!(approx(clock.advance(501.0), 0.5));
        assert_eq!(clock.advance(10_000.0), 1.0);
        assert!(clock.is_finished());
    }

    #[test]
    fn test_clock_ignores_bad_deltas() {
        let mut clock = TweenClock::new(Timing::new(100.0, Easing::Linear));
        clock.advance(50.0);
        assert!(approx(clock.advance(-20.0), 0.5));
        assert!(approx(clock.advance(f64::NAN), 0.5));
        assert!(approx(clock.advance(f64::INFINITY), 0.5));
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut clock = TweenClock::new(Timing::new(0.0, Easing::EaseOut));
        assert!(!clock.is_finished());
        assert_eq!(clock.progress(), 0.0);
        assert_eq!(clock.advance(16.0), 1.0);
        assert!(clock.is_finished());
    }

    #[test]
    fn test_transition_interpolates_pose() {
        let t = Transition::new(Pose::new(0.0, 50.0), Pose::new(1.0, 0.0));
        assert_eq!(t.at(0.0), Pose::new(0.0, 50.0));
        assert_eq!(t.at(1.0), Pose::new(1.0, 0.0));
        assert_eq!(t.at(0.5), Pose::new(0.5, 25.0));
        assert_eq!(t.at(2.0), Pose::new(1.0, 0.0));
    }

    #[test]
    fn test_pose_style() {
        assert_eq!(
            Pose::new(0.5, -20.0).to_style(),
            "opacity: 0.500; transform: translateY(-20.00px);"
        );
        assert_eq!(Pose::new(1.0, 0.0).to_style(), "opacity: 1.000;");
        assert_eq!(FADE_IN.at(0.25).to_style(), "opacity: 0.250;");
    }
}
