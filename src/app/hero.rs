use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::{
    next_role, SectionId, HERO_CTA, HERO_HEADLINE, HERO_ROLES, HERO_TAGLINE, HERO_VIDEO,
    ROLE_ROTATION_MS,
};
use crate::motion::{Easing, Pose, Timing, Transition};

use super::tween::{use_tween, UseTweenReturn};

const ENTRANCE: Transition = Transition::new(Pose::new(0.0, 20.0), Pose::new(1.0, 0.0));
const HEADLINE_TIMING: Timing = Timing::new(1000.0, Easing::EaseOut).delayed(500.0);
const TAGLINE_TIMING: Timing = Timing::new(1000.0, Easing::EaseOut).delayed(900.0);
const CTA_TIMING: Timing = Timing::new(1000.0, Easing::EaseOut).delayed(1100.0);

#[component]
pub fn Hero() -> impl IntoView {
    let (role, set_role) = signal(0_usize);
    let _ = use_interval_fn(
        move || set_role.update(|r| *r = next_role(*r)),
        ROLE_ROTATION_MS,
    );

    view! {
        <section class="relative min-h-screen flex items-center justify-center py-20 md:py-0 overflow-hidden">
            <div class="absolute top-0 left-0 w-full h-full z-0">
                <video autoplay loop muted playsinline src=HERO_VIDEO class="w-full h-full object-cover animate-zoomEffect"></video>
                <div class="absolute inset-0 bg-black/50"></div>
            </div>
            <div class="relative z-10 container mx-auto px-6 text-center">
                <div class="max-w-2xl mx-auto">
                    <Entrance timing=HEADLINE_TIMING>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-100">
                            {HERO_HEADLINE}
                        </h1>
                    </Entrance>
                    <Entrance timing=TAGLINE_TIMING>
                        <p class="text-gray-400 text-lg md:text-xl mt-6">{HERO_TAGLINE}</p>
                        <p class="text-gray-500 text-base md:text-lg mt-2 h-7" aria-live="polite">
                            {move || HERO_ROLES.get(role.get()).copied().unwrap_or_default()}
                        </p>
                    </Entrance>
                    <Entrance timing=CTA_TIMING>
                        <div class="mt-8">
                            <a
                                href=SectionId::Contact.href()
                                class="inline-block bg-gray-700 text-white font-bold py-3 px-8 rounded-lg hover:bg-gray-600 transition-colors"
                            >
                                {HERO_CTA}
                            </a>
                        </div>
                    </Entrance>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Entrance(timing: Timing, children: Children) -> impl IntoView {
    let UseTweenReturn { progress, .. } = use_tween(timing, true);
    view! { <div style=move || ENTRANCE.at(progress.get()).to_style()>{children()}</div> }
}
