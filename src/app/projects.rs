use leptos::prelude::*;
use leptos_meta::Title;

use super::reveal::ScrollReveal;
use crate::config::GITHUB_URL;
use crate::data::UPCOMING_PROJECTS;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="max-w-7xl mx-auto px-4 py-16">
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-4">"Upcoming Projects"</h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                    "While my project showcase is in development, here's a glimpse of what I'm working on."
                </p>
            </div>

            <div id="upcoming" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                {UPCOMING_PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <ScrollReveal delay_ms={i as u32 * 100}>
                                <div class="h-full bg-gradient-to-br from-gray-800/50 to-gray-900/50 rounded-2xl p-6 border border-gray-700/50 hover:border-blue-500/50 transition-all duration-300">
                                    <h3 class="text-xl font-bold text-white mb-4">{project.title}</h3>
                                    <p class="text-gray-400 text-sm mb-4">{project.description}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-2 py-1 text-xs font-medium text-blue-400 bg-blue-500/10 rounded-full">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex items-center justify-between text-sm">
                                        <span class="text-purple-400 font-medium">{project.status}</span>
                                        <span class="text-gray-500">{project.timeline}</span>
                                    </div>
                                </div>
                            </ScrollReveal>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="text-center max-w-2xl mx-auto">
                <div class="bg-gradient-to-br from-blue-500/10 to-purple-500/10 rounded-3xl p-8 border border-gray-700/50">
                    <h2 class="text-2xl font-bold text-white mb-4">"Projects Coming Soon!"</h2>
                    <p class="text-gray-400 mb-6">
                        "Follow my GitHub to stay updated on my latest developments and contributions."
                    </p>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-500 text-white rounded-xl font-medium hover:shadow-lg hover:shadow-blue-500/25 transition-all duration-300"
                    >
                        "Follow My Journey →"
                    </a>
                </div>
            </div>
        </div>
    }
}
