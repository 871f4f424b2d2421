use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::content::SectionId;
use crate::reveal::{reveal_pose, RevealState, VisibilityLatch, REVEAL_THRESHOLD, REVEAL_TIMING};

use super::tween::{use_tween, UseTweenReturn};

/// Feeds `(is_intersecting, ratio)` pairs into the latch; true if one of them flipped it.
fn record_entries(
    latch: StoredValue<VisibilityLatch>,
    entries: impl IntoIterator<Item = (bool, f64)>,
) -> bool {
    entries.into_iter().fold(false, |flipped, (intersecting, ratio)| {
        latch
            .try_update_value(|l| l.observe(intersecting, ratio))
            .unwrap_or(false)
            || flipped
    })
}

// the latch is one-way, so once visible the observer has nothing left to report
fn settle(state: RevealState, stop: &impl Fn(), start: &impl Fn()) {
    if state.is_visible() {
        stop();
        start();
    }
}

/// A page section that fades and slides into place the first time it scrolls into view.
#[component]
pub fn RevealSection(id: SectionId, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let latch = StoredValue::new(VisibilityLatch::new(REVEAL_THRESHOLD));
    let (state, set_state) = signal(RevealState::Hidden);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            let seen = entries
                .iter()
                .map(|entry| (entry.is_intersecting(), entry.intersection_ratio()));
            if record_entries(latch, seen) {
                log::debug!("section #{} revealed", id.as_str());
                set_state.set(RevealState::Visible);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let UseTweenReturn {
        progress, start, ..
    } = use_tween(REVEAL_TIMING, false);

    Effect::new(move |_| settle(state.get(), &stop, &start));

    view! {
        <section
            id=id.as_str()
            node_ref=node_ref
            class="py-24"
            style=move || reveal_pose(state.get(), progress.get()).to_style()
        >
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_entries_below_threshold_do_not_reveal() {
        let latch = StoredValue::new(VisibilityLatch::new(REVEAL_THRESHOLD));
        assert!(!record_entries(latch, [(true, 0.05), (false, 0.0)]));
        assert!(record_entries(latch, [(true, 0.02), (true, 0.1)]));
        assert!(!record_entries(latch, [(true, 0.5)]));
        assert!(!record_entries(latch, [(false, 0.0)]));
        assert_eq!(latch.with_value(|l| l.state()), RevealState::Visible);
    }

    #[test]
    fn test_settle_stops_observer_once_visible() {
        let stops = Cell::new(0);
        let starts = Cell::new(0);
        let stop = || stops.set(stops.get() + 1);
        let start = || starts.set(starts.get() + 1);

        settle(RevealState::Hidden, &stop, &start);
        assert_eq!((stops.get(), starts.get()), (0, 0));

        settle(RevealState::Visible, &stop, &start);
        assert_eq!((stops.get(), starts.get()), (1, 1));
    }
}
