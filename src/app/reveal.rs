use leptos::{html::Div, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn ScrollReveal(children: Children, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if seen.get() {
                    "opacity-100 translate-y-0 transition-all duration-700 ease-out"
                } else {
                    "opacity-0 translate-y-5 transition-all duration-700 ease-out"
                }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
