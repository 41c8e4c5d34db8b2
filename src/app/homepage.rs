use leptos::prelude::*;
use leptos_meta::Title;

use super::reveal::ScrollReveal;
use crate::config::GITHUB_URL;
use crate::data::{OWNER, TAGLINE, TECH_TOOLS, UPCOMING_PROJECTS};
use crate::routing::{BasePath, Route};

#[component]
pub fn HomePage() -> impl IntoView {
    let base = expect_context::<BasePath>();

    view! {
        <Title text="Home" />
        <div class="max-w-7xl mx-auto px-4">
            <section class="min-h-[80vh] flex flex-col justify-center items-center text-center gap-6">
                <p class="text-blue-400 font-mono">"Hi, my name is"</p>
                <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                    {OWNER}
                </h1>
                <h2 class="text-2xl md:text-3xl text-gray-300">{TAGLINE}</h2>
                <p class="max-w-2xl text-gray-400 text-lg">
                    "I build fast, accessible web applications end to end, from the database schema to the last pixel."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 mt-4">
                    <a
                        href=base.format_path(Route::Projects.path())
                        class="px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-500 text-white rounded-xl font-medium hover:shadow-lg hover:shadow-blue-500/25 transition-all duration-300"
                    >
                        "View Projects"
                    </a>
                    <a
                        href=base.format_path(Route::Contact.path())
                        class="px-6 py-3 border border-gray-700 text-white rounded-xl font-medium hover:border-blue-500/50 transition-all duration-300"
                    >
                        "Get in Touch"
                    </a>
                </div>
            </section>

            <ScrollReveal>
                <section class="py-16">
                    <h2 class="text-3xl font-bold text-white mb-8 text-center">"What I Work With"</h2>
                    <div class="flex flex-wrap justify-center gap-3">
                        {TECH_TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="px-3 py-1 text-sm font-medium text-blue-400 bg-blue-500/10 rounded-full">
                                        {tool.name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </ScrollReveal>

            <ScrollReveal delay_ms=100>
                <section class="py-16">
                    <h2 class="text-3xl font-bold text-white mb-8 text-center">"Currently Building"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {UPCOMING_PROJECTS
                            .iter()
                            .map(|p| {
                                view! {
                                    <div class="bg-gray-800/50 rounded-2xl p-6 border border-gray-700/50">
                                        <h3 class="text-lg font-bold text-white mb-2">{p.title}</h3>
                                        <p class="text-purple-400 text-sm">{p.status}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-center mt-8 text-gray-400">
                        "More on "
                        <a href=base.format_path(Route::About.path()) class="text-blue-400 hover:underline">
                            "who I am"
                        </a>
                        " or straight to "
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-400 hover:underline"
                        >
                            "GitHub"
                        </a>
                        "."
                    </p>
                </section>
            </ScrollReveal>
        </div>
    }
}
