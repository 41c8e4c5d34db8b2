use leptos::prelude::*;

/// Routes internal anchor clicks through the client router. Renders nothing.
///
/// Must sit inside the `<Router>`. Every mounted instance shares one document
/// listener, which stays installed until the last of them unmounts.
#[component]
pub fn LinkInterceptor() -> impl IntoView {
    attach_on_mount();
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
fn attach_on_mount() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use leptos_router::hooks::use_navigate;

    use crate::nav::{attach, detach, LeptosRouter};
    use crate::routing::BasePath;

    let base = expect_context::<BasePath>();
    let navigate = use_navigate();
    // whether this instance holds a share of the listener
    let holding = Arc::new(AtomicBool::new(false));

    Effect::new({
        let holding = Arc::clone(&holding);
        move |_| {
            if holding.load(Ordering::Relaxed) {
                return;
            }
            match attach(base, LeptosRouter::new(Some(navigate.clone()))) {
                Ok(installed) => {
                    holding.store(true, Ordering::Relaxed);
                    if installed {
                        log::debug!("link interceptor attached for base {:?}", base.as_str());
                    }
                }
                Err(e) => log::warn!("link interceptor not attached: {e}"),
            }
        }
    });

    on_cleanup(move || {
        if holding.swap(false, Ordering::Relaxed) {
            detach();
        }
    });
}

// nothing to intercept while rendering on the server
#[cfg(not(any(feature = "hydrate", feature = "csr")))]
fn attach_on_mount() {}
