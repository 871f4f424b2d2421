use leptos::prelude::*;

use crate::content::{
    copyright_line, display_index, SectionId, SocialIcon, ABOUT, CONTACT_BLURB, CONTACT_EMAIL,
    CONTACT_HEADLINE, PROJECTS, SKILLS, SOCIAL_LINKS, TIMELINE,
};

use super::section::RevealSection;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Projects>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-gray-200">"Projects"</h2>
                <div class="space-y-16">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let (href, target) = match project.link {
                                Some(link) => (link, Some("_blank")),
                                None => ("#", None),
                            };
                            view! {
                                <div class="group">
                                    <a href=href target=target rel="noopener noreferrer" class="block">
                                        <div class="flex justify-between items-center border-b border-gray-700 pb-4">
                                            <div>
                                                <span class="text-gray-500 text-sm">
                                                    {display_index(index)}
                                                </span>
                                                <h3 class="text-2xl md:text-4xl font-bold text-gray-300 group-hover:text-white transition-colors duration-300 mt-2">
                                                    {project.title}
                                                </h3>
                                            </div>
                                            <ArrowUpRight />
                                        </div>
                                        <p class="text-gray-400 mt-4 max-w-lg">{project.description}</p>
                                        <div class="flex flex-wrap gap-2 mt-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-gray-800 text-gray-300 rounded-full text-sm">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Timeline>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-gray-200">"Timeline"</h2>
                <div class="relative border-l-2 border-gray-700">
                    {TIMELINE
                        .iter()
                        .map(|event| {
                            view! {
                                <div class="mb-12 ml-6">
                                    <span class="absolute flex items-center justify-center w-3 h-3 bg-gray-500 rounded-full -left-1.5 ring-4 ring-gray-800"></span>
                                    <h3 class="flex items-center mb-1 text-lg font-semibold text-white">
                                        {event.role}
                                        <span class="text-gray-500 font-normal ml-2">
                                            "@ "{event.organization}
                                        </span>
                                    </h3>
                                    <time class="block mb-2 text-sm font-normal leading-none text-gray-500">
                                        {event.period}
                                    </time>
                                    <p class="text-base font-normal text-gray-400">{event.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Skills>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-gray-200">"Skills"</h2>
                <div class="grid gap-6 sm:grid-cols-2">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="p-6 rounded-lg border border-gray-800 bg-gray-900/40">
                                    <h3 class="text-lg font-semibold text-gray-200 mb-4">
                                        {category.title}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-gray-800 text-gray-300 rounded-full text-sm">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::About>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-8 text-gray-200">"About Me"</h2>
                <p class="text-gray-400 text-lg max-w-3xl leading-relaxed">{ABOUT}</p>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Contact>
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-4xl md:text-5xl font-bold text-gray-200 mb-6">{CONTACT_HEADLINE}</h2>
                <p class="text-gray-400 text-lg mb-8">{CONTACT_BLURB}</p>
                <a
                    href=format!("mailto:{CONTACT_EMAIL}")
                    class="inline-block text-2xl md:text-3xl font-semibold text-gray-300 hover:text-white transition-colors duration-300 border-b border-gray-600 hover:border-white pb-2"
                >
                    {CONTACT_EMAIL}
                </a>
                <div class="flex justify-center space-x-6 mt-12">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    aria-label=link.label
                                    class="text-gray-500 hover:text-white transition-colors duration-300"
                                >
                                    <SocialGlyph icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center py-8 text-gray-600 text-sm">
            <p>{copyright_line()}</p>
        </footer>
    }
}

#[component]
fn ArrowUpRight() -> impl IntoView {
    view! {
        <svg
            class="text-gray-500 group-hover:text-white transition-colors duration-300 transform -rotate-45 group-hover:rotate-0"
            width="32"
            height="32"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M7 7h10v10" />
            <path d="M7 17 17 7" />
        </svg>
    }
}

#[component]
fn SocialGlyph(icon: SocialIcon) -> impl IntoView {
    let paths: &[&str] = match icon {
        SocialIcon::GitHub => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        SocialIcon::LinkedIn => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
        ],
        SocialIcon::Mail => &[
            "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
            "m22 6-10 7L2 6",
        ],
    };
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
