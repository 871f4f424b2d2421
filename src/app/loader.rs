use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::loading::{
    display_value, ring_dasharray, ring_fraction, LoadingEvent, LoadingProgress, GRACE_MS,
    PANEL_TIMING,
};
use crate::motion::FADE_IN;

use super::tween::{use_tween, UseTweenReturn};

/// Full-screen counter that fills a ring from 0 to 100, then calls `on_complete` once.
///
/// Unmounting the screen before it finishes cancels it; `on_complete` is then never called.
/// Cancels `progress` when the current owner is cleaned up, so a frame that
/// lands after teardown can't report completion.
fn cancel_on_cleanup(progress: StoredValue<LoadingProgress>) {
    on_cleanup(move || {
        if progress.try_update_value(|p| p.cancel()).unwrap_or(false) {
            log::debug!("loader torn down before completion");
        }
    });
}

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let progress = StoredValue::new(LoadingProgress::default());
    let (value, set_value) = signal(0.0_f64);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some((current, event)) = progress.try_update_value(|p| {
            let event = p.advance(args.delta);
            (p.value(), event)
        }) else {
            return;
        };
        if current != value.get_untracked() {
            set_value.set(current);
        }
        match event {
            Some(LoadingEvent::Full) => log::debug!("loader full, settling for {GRACE_MS}ms"),
            Some(LoadingEvent::Complete) => {
                log::info!("loading complete");
                on_complete.run(());
            }
            None => {}
        }
    });

    cancel_on_cleanup(progress);

    let UseTweenReturn { progress: panel, .. } = use_tween(PANEL_TIMING, true);

    view! {
        <div
            class="fixed inset-0 bg-black flex items-center justify-center z-50"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || display_value(value.get())
        >
            <div
                class="relative w-40 h-40 flex items-center justify-center"
                style=move || FADE_IN.at(panel.get()).to_style()
            >
                // rotated so the ring fills clockwise from 12 o'clock
                <svg class="absolute w-full h-full transform -rotate-90" viewBox="0 0 100 100">
                    <circle
                        cx="50"
                        cy="50"
                        r="45"
                        fill="transparent"
                        stroke="#282828"
                        stroke-width="5"
                    />
                    <circle
                        cx="50"
                        cy="50"
                        r="45"
                        fill="transparent"
                        stroke="#E0E0E0"
                        stroke-width="5"
                        stroke-linecap="round"
                        pathLength="1"
                        stroke-dashoffset="0"
                        stroke-dasharray=move || ring_dasharray(ring_fraction(value.get()))
                        visibility=move || { if value.get() > 0.0 { "visible" } else { "hidden" } }
                    />
                </svg>
                <p class="text-gray-200 text-4xl font-medium font-mono">
                    {move || display_value(value.get())}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::LoaderPhase;

    #[test]
    fn test_teardown_cancels_loading() {
        let owner = Owner::new();
        owner.set();
        let progress = StoredValue::new(LoadingProgress::default());
        let screen = owner.child();
        screen.with(|| cancel_on_cleanup(progress));

        progress.update_value(|p| {
            p.advance(1000.0);
        });
        screen.cleanup();

        assert_eq!(progress.with_value(|p| p.phase()), LoaderPhase::Cancelled);
        for _ in 0..1000 {
            assert_eq!(progress.try_update_value(|p| p.advance(16.0)).flatten(), None);
        }
    }

    #[test]
    fn test_teardown_after_completion_is_quiet() {
        let owner = Owner::new();
        owner.set();
        let progress = StoredValue::new(LoadingProgress::default());
        let screen = owner.child();
        screen.with(|| cancel_on_cleanup(progress));

        let completions = (0..400)
            .filter_map(|_| progress.try_update_value(|p| p.advance(16.0)).flatten())
            .filter(|e| *e == LoadingEvent::Complete)
            .count();
        screen.cleanup();

        assert_eq!(completions, 1);
        assert!(progress.with_value(|p| p.is_complete()));
    }
}
