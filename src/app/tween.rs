use leptos::prelude::*;
use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::motion::{Timing, TweenClock};

pub struct UseTweenReturn<StartFn>
where
    StartFn: Fn() + Clone,
{
    /// Eased progress in `[0, 1]`.
    pub progress: Signal<f64>,
    /// Starts (or resumes) the frame loop when the tween wasn't `immediate`.
    pub start: StartFn,
}

/// Drives a [`TweenClock`] from `requestAnimationFrame`.
///
/// The frame loop pauses itself once the tween finishes and is released with
/// the owning reactive scope, so an unmounted element stops animating.
pub fn use_tween(timing: Timing, immediate: bool) -> UseTweenReturn<impl Fn() + Clone> {
    let clock = StoredValue::new(TweenClock::new(timing));
    let (progress, set_progress) = signal(0.0_f64);
    let (finished, set_finished) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let Some((value, done)) = clock.try_update_value(|c| {
                let value = c.advance(args.delta);
                (value, c.is_finished())
            }) else {
                return;
            };
            set_progress.set(value);
            if done {
                set_finished.set(true);
            }
        },
        UseRafFnOptions::default().immediate(immediate),
    );

    Effect::new(move |_| {
        if finished.get() {
            pause();
        }
    });

    UseTweenReturn {
        progress: progress.into(),
        start: resume,
    }
}
