mod about;
mod contact;
mod footer;
mod homepage;
mod link_interceptor;
mod loading_screen;
mod nav_bar;
mod not_found;
mod projects;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::BuildMode;
use crate::data::{person_json_ld, OWNER, TAGLINE};
use crate::env::{ambient, RequestEnv};
use crate::loading::LoadingPhase;
use crate::routing::BasePath;

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use link_interceptor::LinkInterceptor;
use loading_screen::LoadingScreen;
use nav_bar::NavBar;
use not_found::NotFound;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="theme-color" content="#000000" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let base = detect_base(BuildMode::current());
    provide_context(base);

    view! {
        <Title formatter=|title| format!("{title} | {OWNER}") />
        <Meta
            name="description"
            content=format!("{TAGLINE} portfolio showcasing projects and technical skills")
        />
        <Script type_="application/ld+json">{person_json_ld()}</Script>

        <Router base=base.as_str()>
            <ClientLayout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </ClientLayout>
        </Router>
    }
}

/// Resolve the base path from the request while rendering on the server and
/// from the window in the browser, so both sides pick the same prefix.
fn detect_base(mode: BuildMode) -> BasePath {
    match request_env() {
        Some(env) => BasePath::detect(&env, mode),
        None => BasePath::detect(&ambient(), mode),
    }
}

#[cfg(feature = "ssr")]
fn request_env() -> Option<RequestEnv> {
    use_context::<http::request::Parts>().map(|parts| RequestEnv::from_parts(&parts))
}

#[cfg(not(feature = "ssr"))]
fn request_env() -> Option<RequestEnv> {
    None
}

/// Everything below the router: loading overlay, link interception and the
/// page chrome. The page stays transparent until the splash has started to
/// leave.
#[component]
fn ClientLayout(children: Children) -> impl IntoView {
    let phase = RwSignal::new(LoadingPhase::Splash);

    view! {
        <LoadingScreen phase />
        <LinkInterceptor />
        <div class=move || {
            if phase.get() == LoadingPhase::Splash {
                "flex flex-col min-h-screen opacity-0"
            } else {
                "flex flex-col min-h-screen opacity-100 transition-opacity duration-500"
            }
        }>
            <NavBar />
            <main class="flex-grow pt-20">{children()}</main>
            <Footer />
        </div>
    }
}
