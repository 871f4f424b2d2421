use leptos::{either::Either, prelude::*};

use crate::content::{SectionId, SITE_NAME};
use crate::motion::{Easing, Pose, Timing, Transition};

use super::tween::{use_tween, UseTweenReturn};

const HEADER_TIMING: Timing = Timing::new(800.0, Easing::EaseOut);
const HEADER_SLIDE: Transition = Transition::new(Pose::new(1.0, -100.0), Pose::new(1.0, 0.0));
const MENU_TIMING: Timing = Timing::new(300.0, Easing::EaseOut);
const MENU_DROP: Transition = Transition::new(Pose::new(0.0, -20.0), Pose::new(1.0, 0.0));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    fn is_open(self) -> bool {
        self == MenuState::Open
    }

    fn button_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::Closed);
    let close_menu = Callback::new(move |_: ()| set_menu.set(MenuState::Closed));
    let UseTweenReturn { progress, .. } = use_tween(HEADER_TIMING, true);

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-40 bg-black/50 backdrop-blur-sm"
            style=move || HEADER_SLIDE.at(progress.get()).to_style()
        >
            <div class="container mx-auto px-6 py-4 flex justify-between items-center text-gray-300">
                <a href="#" class="font-bold text-lg tracking-wider hover:text-white transition-colors">
                    {SITE_NAME}
                </a>
                <nav class="hidden md:flex space-x-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a href=section.href() class="hover:text-white transition-colors">
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="md:hidden">
                    <button
                        aria-label=move || menu.get().button_label()
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(|m| *m = m.toggled())
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(view! { <CloseIcon /> })
                            } else {
                                Either::Right(view! { <MenuIcon /> })
                            }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <MobileMenu on_navigate=close_menu />
            </Show>
        </header>
    }
}

#[component]
fn MobileMenu(on_navigate: Callback<()>) -> impl IntoView {
    let UseTweenReturn { progress, .. } = use_tween(MENU_TIMING, true);

    view! {
        <nav
            class="md:hidden bg-black/70 backdrop-blur-md"
            style=move || MENU_DROP.at(progress.get()).to_style()
        >
            <div class="flex flex-col items-center space-y-4 py-4">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href=section.href()
                                class="hover:text-white transition-colors"
                                on:click=move |_| on_navigate.run(())
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
        >
            <line x1="4" y1="6" x2="20" y2="6" />
            <line x1="4" y1="12" x2="20" y2="12" />
            <line x1="4" y1="18" x2="20" y2="18" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
        >
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
        assert_eq!(menu.button_label(), "Open menu");
        assert_eq!(menu.toggled().button_label(), "Close menu");
    }

    #[test]
    fn test_header_slides_in_from_above() {
        assert_eq!(HEADER_SLIDE.at(0.0).offset_y, -100.0);
        assert_eq!(HEADER_SLIDE.at(1.0).to_style(), "opacity: 1.000;");
        assert_eq!(MENU_DROP.at(0.0), Pose::new(0.0, -20.0));
    }
}
