use leptos::prelude::*;
use leptos_meta::Title;

use crate::loading::PagePhase;
use crate::motion::{FADE_IN, PAGE_FADE};

use super::header::Navbar;
use super::hero::Hero;
use super::loader::LoadingScreen;
use super::sections::{About, Contact, Footer, Projects, Skills, Timeline};
use super::tween::{use_tween, UseTweenReturn};

/// Shows the loading screen until it reports completion, then the portfolio for good.
#[component]
pub fn HomePage() -> impl IntoView {
    let (phase, set_phase) = signal(PagePhase::Loading);
    let on_complete = Callback::new(move |_: ()| {
        let mut next = phase.get_untracked();
        if next.finish_loading() {
            log::info!("page loaded");
            set_phase.set(next);
        }
    });

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || phase.get().is_loaded()
            fallback=move || view! { <LoadingScreen on_complete /> }
        >
            <Portfolio />
        </Show>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let UseTweenReturn { progress, .. } = use_tween(PAGE_FADE, true);

    view! {
        <div
            class="bg-black text-gray-300 min-h-screen"
            style=move || FADE_IN.at(progress.get()).to_style()
        >
            <div class="relative z-10">
                <Navbar />
                <main>
                    <Hero />
                    <Projects />
                    <Timeline />
                    <Skills />
                    <About />
                    <Contact />
                </main>
                <Footer />
            </div>
        </div>
    }
}
