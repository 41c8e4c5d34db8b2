#[cfg(any(feature = "ssr", feature = "hydrate", feature = "csr"))]
pub mod app;
pub mod config;
pub mod data;
pub mod env;
pub mod error;
pub mod loading;
pub mod nav;
pub mod redirect;
pub mod routing;

#[cfg(any(feature = "hydrate", feature = "csr"))]
fn init_browser() {
    use config::BuildMode;
    use env::BrowserEnv;

    console_error_panic_hook::set_once();
    let mode = BuildMode::current();
    let level = if mode.is_production() {
        log::Level::Warn
    } else {
        log::Level::Debug
    };
    let _ = console_log::init_with_level(level);

    // must run before the router reads the location
    let base = routing::BasePath::detect(&BrowserEnv, mode);
    redirect::restore_pending_route(&BrowserEnv, base);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    init_browser();
    leptos::mount::hydrate_body(App);
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::*;
    init_browser();
    leptos::mount::mount_to_body(App);
}
