use leptos::prelude::*;
use leptos_meta::Title;

use super::reveal::ScrollReveal;
use crate::data::{devicon_class, Level, OWNER, TECH_TOOLS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="max-w-7xl mx-auto px-4 py-16">
            <section class="text-center mb-16">
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-4">"About Me"</h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                    "I'm " {OWNER}
                    ", a developer who enjoys turning rough ideas into polished products. I care about performance, accessibility, and code that the next person can read."
                </p>
            </section>

            <section id="tech-stack">
                <h2 class="text-3xl font-bold text-white mb-8 text-center">"Tech Stack"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TECH_TOOLS
                        .iter()
                        .enumerate()
                        .map(|(i, tool)| {
                            let level_class = match tool.level {
                                Level::Advanced => "text-green-400",
                                Level::Intermediate => "text-yellow-400",
                            };
                            view! {
                                <ScrollReveal delay_ms={(i as u32 % 3) * 100}>
                                    <div class="h-full bg-gradient-to-br from-gray-800/50 to-gray-900/50 rounded-2xl p-6 border border-gray-700/50 hover:border-blue-500/50 transition-all duration-300">
                                        <div class="flex items-center gap-4 mb-3">
                                            <i class=format!("{} text-4xl", devicon_class(tool))></i>
                                            <div>
                                                <h3 class="text-xl font-bold text-white">{tool.name}</h3>
                                                <span class=format!("text-sm {level_class}")>
                                                    {tool.level.as_str()}
                                                </span>
                                            </div>
                                        </div>
                                        <p class="text-gray-400 text-sm">{tool.description}</p>
                                    </div>
                                </ScrollReveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
