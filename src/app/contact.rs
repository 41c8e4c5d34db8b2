use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use super::reveal::ScrollReveal;
use crate::data::SOCIAL_LINKS;

const INPUT: &str = "w-full px-4 py-3 rounded-xl border border-gray-700 bg-gray-800/50 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sent, set_sent) = signal(false);

    // there's no backend to send to
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!(
            "contact form: name={:?} email={:?} message={} chars",
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked().len()
        );
        set_sent.set(true);
        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <Title text="Contact" />
        <div class="max-w-7xl mx-auto px-4 py-16">
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-4">"Let's Connect"</h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hi? Reach out through any of these channels."
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <ScrollReveal delay_ms={i as u32 * 100}>
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="block h-full p-6 rounded-2xl border border-gray-700/50 bg-gradient-to-br from-gray-800/50 to-gray-900/50 hover:border-blue-500/50 transition-all duration-300"
                                    >
                                        <h3 class="text-lg font-bold text-white mb-1">{link.name}</h3>
                                        <p class="text-gray-400 text-sm">{link.description}</p>
                                    </a>
                                </ScrollReveal>
                            }
                        })
                        .collect_view()}
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Your name"
                        required
                        class=INPUT
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        required
                        class=INPUT
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="5"
                        placeholder="Your message"
                        required
                        class=INPUT
                        prop:value=message
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-500 text-white rounded-xl font-medium hover:shadow-lg hover:shadow-blue-500/25 transition-all duration-300"
                    >
                        "Send Message"
                    </button>
                    <Show when=move || sent.get()>
                        <p class="text-green-400 text-sm">"Thanks! I'll get back to you soon."</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
