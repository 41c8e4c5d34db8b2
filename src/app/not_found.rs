use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::routing::{BasePath, Route};

#[component]
pub fn NotFound() -> impl IntoView {
    let base = expect_context::<BasePath>();
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(resp) = use_context::<ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-[70vh] text-center px-4">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <h2 class="text-2xl font-medium mb-2">"This page could not be found."</h2>
            <p class="text-gray-500 font-mono mb-8">{move || base.clean_path(&pathname.get())}</p>
            <div class="flex flex-col sm:flex-row gap-4">
                <a
                    href=base.format_path(Route::Home.path())
                    class="px-6 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 text-white font-medium"
                >
                    "Return Home"
                </a>
                <a
                    href=base.format_path(Route::Projects.path())
                    class="px-6 py-3 rounded-xl border border-gray-700 hover:border-blue-500/50 text-white font-medium"
                >
                    "View Projects"
                </a>
            </div>
        </div>
    }
}
