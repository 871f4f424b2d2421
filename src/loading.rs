//! The loading counter shown before the page mounts, and the page phase it gates.

use crate::motion::{Easing, Timing, TweenClock};

pub const PROGRESS_MAX: f64 = 100.0;
pub const FILL_TIMING: Timing = Timing::new(2500.0, Easing::EaseInOut);
pub const GRACE_MS: f64 = 500.0;
/// Fade-in of the loader panel itself.
pub const PANEL_TIMING: Timing = Timing::new(500.0, Easing::EaseOut);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderTiming {
    pub fill: Timing,
    pub grace_ms: f64,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            fill: FILL_TIMING,
            grace_ms: GRACE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderPhase {
    Filling,
    Settling { waited_ms: f64 },
    Complete,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    /// The counter just hit 100 and the grace period started.
    Full,
    /// The grace period ran out; reported once per loader.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingProgress {
    clock: TweenClock,
    grace_ms: f64,
    phase: LoaderPhase,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::new(LoaderTiming::default())
    }
}

impl LoadingProgress {
    pub fn new(timing: LoaderTiming) -> Self {
        Self {
            clock: TweenClock::new(timing.fill),
            grace_ms: timing.grace_ms.max(0.0),
            phase: LoaderPhase::Filling,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Current counter value in `[0, 100]`.
    pub fn value(&self) -> f64 {
        self.clock.progress() * PROGRESS_MAX
    }

    pub fn display_value(&self) -> u32 {
        display_value(self.value())
    }

    pub fn ring_fraction(&self) -> f64 {
        ring_fraction(self.value())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == LoaderPhase::Complete
    }

    /// Advances by one frame. The grace period only starts counting on the
    /// frame after the counter reaches 100.
    pub fn advance(&mut self, delta_ms: f64) -> Option<LoadingEvent> {
        match self.phase {
            LoaderPhase::Filling => {
                self.clock.advance(delta_ms);
                if self.clock.is_finished() {
                    self.phase = LoaderPhase::Settling { waited_ms: 0.0 };
                    Some(LoadingEvent::Full)
                } else {
                    None
                }
            }
            LoaderPhase::Settling { waited_ms } => {
                let waited_ms = if delta_ms.is_finite() && delta_ms > 0.0 {
                    waited_ms + delta_ms
                } else {
                    waited_ms
                };
                if waited_ms >= self.grace_ms {
                    self.phase = LoaderPhase::Complete;
                    Some(LoadingEvent::Complete)
                } else {
                    self.phase = LoaderPhase::Settling { waited_ms };
                    None
                }
            }
            LoaderPhase::Complete | LoaderPhase::Cancelled => None,
        }
    }

    /// Stops the loader for good. Has no effect once it has completed.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            LoaderPhase::Filling | LoaderPhase::Settling { .. } => {
                self.phase = LoaderPhase::Cancelled;
                true
            }
            LoaderPhase::Complete | LoaderPhase::Cancelled => false,
        }
    }
}

pub fn display_value(value: f64) -> u32 {
    value.round().clamp(0.0, PROGRESS_MAX) as u32
}

pub fn ring_fraction(value: f64) -> f64 {
    (value / PROGRESS_MAX).clamp(0.0, 1.0)
}

/// `stroke-dasharray` for a circle with `pathLength="1"`.
pub fn ring_dasharray(fraction: f64) -> String {
    format!("{:.4} 1", fraction.clamp(0.0, 1.0))
}

/// Whether the page is still behind the loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Loading,
    Loaded,
}

impl PagePhase {
    pub fn is_loaded(self) -> bool {
        self == PagePhase::Loaded
    }

    /// Returns `true` only on the call that moves the page out of loading.
    pub fn finish_loading(&mut self) -> bool {
        match self {
            PagePhase::Loading => {
                *self = PagePhase::Loaded;
                true
            }
            PagePhase::Loaded => false,
        }
    }
}
