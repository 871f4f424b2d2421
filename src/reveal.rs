//! One-way "reveal on first sight" state for page sections.

use crate::motion::{Easing, Pose, Timing, Transition};

/// Share of a section's area that must be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_TIMING: Timing = Timing::new(800.0, Easing::EaseOut);
pub const HIDDEN_POSE: Pose = Pose::new(0.0, 50.0);
pub const VISIBLE_POSE: Pose = Pose::new(1.0, 0.0);
pub const REVEAL_TRANSITION: Transition = Transition::new(HIDDEN_POSE, VISIBLE_POSE);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// Latches the first qualifying intersection of a section with the viewport.
///
/// Once [`VisibilityLatch::observe`] has returned `true` the latch is spent:
/// later entries, including the section scrolling back out of view, change nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    observed: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    pub fn state(&self) -> RevealState {
        if self.observed {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }

    /// Feeds one intersection entry. Returns `true` only for the entry that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.observed || !is_intersecting || ratio.is_nan() {
            return false;
        }
        // browsers report ratios a hair under the threshold they fired for
        if ratio + f64::EPSILON * 16.0 < self.threshold {
            return false;
        }
        self.observed = true;
        true
    }
}

/// Pose of a section for its reveal state and tween progress.
pub fn reveal_pose(state: RevealState, progress: f64) -> Pose {
    match state {
        RevealState::Hidden => HIDDEN_POSE,
        RevealState::Visible => REVEAL_TRANSITION.at(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::TweenClock;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = VisibilityLatch::default();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_observed());
        assert_eq!(latch.threshold(), REVEAL_THRESHOLD);
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.15));
        assert_eq!(latch.state(), RevealState::Visible);

        // further entries never report a second transition
        assert!(!latch.observe(true, 0.9));
        assert!(!latch.observe(true, 1.0));
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = VisibilityLatch::default();
        latch.observe(true, 0.5);
        // scrolled back out of the viewport
        assert!(!latch.observe(false, 0.0));
        assert_eq!(latch.state(), RevealState::Visible);
        assert!(latch.is_observed());
    }

    #[test]
    fn test_latch_ignores_below_threshold() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(true, f64::NAN));
        // a non-intersecting entry never counts, whatever the ratio says
        assert!(!latch.observe(false, 0.4));
        assert_eq!(latch.state(), RevealState::Hidden);

        assert!(latch.observe(true, REVEAL_THRESHOLD));
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityLatch::new(4.0).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_hidden_section_stays_transparent() {
        // no entry ever qualifies, so the pose never leaves the hidden one
        let latch = VisibilityLatch::default();
        for progress in [0.0, 0.5, 1.0] {
            let pose = reveal_pose(latch.state(), progress);
            assert_eq!(pose.opacity, 0.0);
            assert_eq!(pose.offset_y, 50.0);
        }
    }

    #[test]
    fn test_reveal_animates_over_800ms() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.15));

        let mut clock = TweenClock::new(REVEAL_TIMING);
        let start = reveal_pose(latch.state(), clock.progress());
        assert_eq!(start, HIDDEN_POSE);

        let mut last_opacity = 0.0;
        let mut frames = 0;
        while !clock.is_finished() {
            let pose = reveal_pose(latch.state(), clock.advance(16.0));
            assert!(pose.opacity >= last_opacity);
            assert!(pose.offset_y <= 50.0 && pose.offset_y >= 0.0);
            last_opacity = pose.opacity;
            frames += 1;
        }
        // 800ms at 16ms per frame
        assert_eq!(frames, 50);
        assert_eq!(reveal_pose(latch.state(), clock.progress()), VISIBLE_POSE);
    }
}
