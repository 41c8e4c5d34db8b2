//! Keeps in-app navigation on the client router.
//!
//! A full page load of an internal URL would hit the static host, which only
//! knows about the root document, so internal anchor clicks are routed
//! client-side and stripped of the base path first. Everything else is left
//! to the browser.

use url::Url;

use crate::env::Environment;
use crate::error::SiteError;
use crate::routing::BasePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    External,
    Fragment,
    /// Canonical (un-prefixed) path, including query and fragment.
    Internal(String),
}

/// Anything that looks like `scheme:` before the first `/`, `?` or `#`.
fn has_scheme(href: &str) -> bool {
    let Some(end) = href.find(':') else {
        return false;
    };
    let scheme = &href[..end];
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub fn classify_link(href: &str, target: Option<&str>, current: &Url, base: BasePath) -> LinkKind {
    let href = href.trim();
    if href.starts_with('#') {
        return LinkKind::Fragment;
    }
    if href.is_empty() || href.starts_with("//") || has_scheme(href) {
        return LinkKind::External;
    }
    if target.is_some_and(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self")) {
        return LinkKind::External;
    }

    let Ok(resolved) = current.join(href) else {
        return LinkKind::External;
    };
    if resolved.origin() != current.origin() {
        return LinkKind::External;
    }
    // same origin but outside the app, e.g. another project on the same host
    let Some(mut path) = base.strip(resolved.path()) else {
        return LinkKind::External;
    };
    if let Some(query) = resolved.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = resolved.fragment() {
        path.push('#');
        path.push_str(fragment);
    }
    LinkKind::Internal(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    Programmatic,
    Redirect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
    pub trigger: Trigger,
}

impl NavigationIntent {
    pub fn new(path: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            path: path.into(),
            trigger,
        }
    }
}

/// The client-side router, addressed with canonical paths.
pub trait ClientRouter {
    fn push(&self, path: &str) -> Result<(), SiteError>;
}

/// What the browser sees of a click on an anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorClick<'a> {
    pub href: &'a str,
    pub target: Option<&'a str>,
    pub download: bool,
    /// Modifier key held or a non-primary button.
    pub modified: bool,
    pub default_prevented: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Left to the browser.
    PassThrough,
    /// Handled by the client router with this canonical path.
    Routed(String),
    /// Router failed, fell back to a full load of this URL.
    Reloaded(String),
}

impl Outcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

pub struct Navigator<'a, E, R> {
    env: &'a E,
    router: &'a R,
    base: BasePath,
}

impl<'a, E: Environment, R: ClientRouter> Navigator<'a, E, R> {
    pub fn new(env: &'a E, router: &'a R, base: BasePath) -> Self {
        Self { env, router, base }
    }

    /// Route a canonical path, falling back to a full page load.
    pub fn navigate(&self, intent: NavigationIntent) -> Outcome {
        let err = match self.router.push(&intent.path) {
            Ok(()) => {
                log::debug!("{:?} navigation to {}", intent.trigger, intent.path);
                return Outcome::Routed(intent.path);
            }
            Err(e) => e,
        };
        let url = self.base.format_path(&intent.path);
        log::warn!("client routing to {} failed ({err}), loading {url}", intent.path);
        match self.env.assign_location(&url) {
            Ok(()) => Outcome::Reloaded(url),
            Err(e) => {
                log::warn!("full navigation to {url} failed: {e}");
                Outcome::PassThrough
            }
        }
    }

    pub fn on_click(&self, click: &AnchorClick<'_>) -> Outcome {
        if click.default_prevented || click.modified || click.download {
            return Outcome::PassThrough;
        }
        let current = match self.env.current_url() {
            Ok(url) => url,
            Err(e) => {
                log::warn!("can't classify link {}: {e}", click.href);
                return Outcome::PassThrough;
            }
        };
        match classify_link(click.href, click.target, &current, self.base) {
            LinkKind::Internal(path) => self.navigate(NavigationIntent::new(path, Trigger::Click)),
            LinkKind::External | LinkKind::Fragment => Outcome::PassThrough,
        }
    }
}

/// Holds the single document listener shared by every mounted interceptor.
///
/// Each interceptor acquires the slot once and releases it once. The listener
/// is installed by the first acquire and handed back for removal by the last
/// release, so a duplicate unmounting never pulls it out from under the rest.
#[derive(Debug)]
pub struct ListenerSlot<L> {
    listener: Option<L>,
    users: usize,
}

impl<L> ListenerSlot<L> {
    pub const fn new() -> Self {
        Self {
            listener: None,
            users: 0,
        }
    }

    /// Registers one more user. `install` only runs when nobody holds the
    /// slot yet; if it fails the slot is left as it was.
    ///
    /// Returns `true` when this call installed the listener.
    pub fn acquire<E>(&mut self, install: impl FnOnce() -> Result<L, E>) -> Result<bool, E> {
        let first = self.users == 0;
        if first {
            self.listener = Some(install()?);
        }
        self.users += 1;
        Ok(first)
    }

    /// Drops one user. Returns the listener once the last user is gone.
    pub fn release(&mut self) -> Option<L> {
        match self.users {
            0 => None,
            1 => {
                self.users = 0;
                self.listener.take()
            }
            _ => {
                self.users -= 1;
                None
            }
        }
    }

    pub fn is_installed(&self) -> bool {
        self.listener.is_some()
    }

    pub fn users(&self) -> usize {
        self.users
    }
}

impl<L> Default for ListenerSlot<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
pub use browser::{attach, detach, LeptosRouter};

#[cfg(any(feature = "hydrate", feature = "csr"))]
mod browser {
    use std::cell::RefCell;

    use leptos_router::NavigateOptions;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{Element, MouseEvent};

    use super::{AnchorClick, ClientRouter, ListenerSlot, Navigator};
    use crate::env::BrowserEnv;
    use crate::error::SiteError;
    use crate::routing::BasePath;

    type ClickListener = Closure<dyn FnMut(MouseEvent)>;

    thread_local! {
        static LISTENER: RefCell<ListenerSlot<ClickListener>> = const { RefCell::new(ListenerSlot::new()) };
    }

    pub struct LeptosRouter<F> {
        navigate: Option<F>,
    }

    impl<F> LeptosRouter<F>
    where
        F: Fn(&str, NavigateOptions),
    {
        pub fn new(navigate: Option<F>) -> Self {
            Self { navigate }
        }
    }

    impl<F> ClientRouter for LeptosRouter<F>
    where
        F: Fn(&str, NavigateOptions),
    {
        fn push(&self, path: &str) -> Result<(), SiteError> {
            let navigate = self.navigate.as_ref().ok_or(SiteError::RouterUnavailable)?;
            navigate(path, NavigateOptions::default());
            Ok(())
        }
    }

    fn handle_click<R: ClientRouter>(ev: &MouseEvent, base: BasePath, router: &R) {
        let anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten());
        let Some(anchor) = anchor else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let target = anchor.get_attribute("target");
        let click = AnchorClick {
            href: &href,
            target: target.as_deref(),
            download: anchor.has_attribute("download"),
            modified: ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() || ev.button() != 0,
            default_prevented: ev.default_prevented(),
        };
        let env = BrowserEnv;
        if Navigator::new(&env, router, base).on_click(&click).prevents_default() {
            ev.prevent_default();
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Take a share of the document-level click listener, installing it if
    /// this is the first interceptor. Runs in the capture phase so it sees
    /// clicks before anything else can turn them into a page load.
    ///
    /// Returns `Ok(true)` when the listener was installed by this call and
    /// `Ok(false)` when an existing one is shared. Every `Ok` must be paired
    /// with one [`detach`].
    pub fn attach<R: ClientRouter + 'static>(base: BasePath, router: R) -> Result<bool, SiteError> {
        LISTENER.with(|slot| {
            slot.borrow_mut().acquire(|| {
                let document = document().ok_or(SiteError::NoWindow)?;
                let listener = ClickListener::new(move |ev: MouseEvent| handle_click(&ev, base, &router));
                document
                    .add_event_listener_with_callback_and_bool(
                        "click",
                        listener.as_ref().unchecked_ref(),
                        true,
                    )
                    .map_err(|e| SiteError::Listener(format!("{e:?}")))?;
                Ok(listener)
            })
        })
    }

    /// Give back one share; the listener is removed with the last one.
    pub fn detach() {
        let Some(listener) = LISTENER.with(|slot| slot.borrow_mut().release()) else {
            return;
        };
        if let Some(document) = document() {
            let _ = document.remove_event_listener_with_callback_and_bool(
                "click",
                listener.as_ref().unchecked_ref(),
                true,
            );
        }
        log::debug!("link interceptor detached");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::env::MemoryEnv;

    #[derive(Default)]
    struct RecordingRouter {
        pushed: RefCell<Vec<String>>,
        broken: bool,
    }

    impl ClientRouter for RecordingRouter {
        fn push(&self, path: &str) -> Result<(), SiteError> {
            if self.broken {
                return Err(SiteError::Router("boom".to_string()));
            }
            self.pushed.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    fn click(href: &str) -> AnchorClick<'_> {
        AnchorClick {
            href,
            ..Default::default()
        }
    }

    const PAGES_HOME: &str = "https://akashbroo007.github.io/my-portfolio/";

    #[test]
    fn test_classify_link() {
        let current = Url::parse("https://akashbroo007.github.io/my-portfolio/projects/").unwrap();
        let base = BasePath::SUBPATH;
        let classify = |href, target| classify_link(href, target, &current, base);

        assert_eq!(classify("#skills", None), LinkKind::Fragment);
        assert_eq!(classify("https://github.com/akashbroo007", None), LinkKind::External);
        assert_eq!(classify("https://akashbroo007.github.io/my-portfolio/about/", None), LinkKind::External);
        assert_eq!(classify("//cdn.example/x.js", None), LinkKind::External);
        assert_eq!(classify("mailto:akashfgz80@gmail.com", None), LinkKind::External);
        assert_eq!(classify("/my-portfolio/about/", Some("_blank")), LinkKind::External);
        assert_eq!(classify("/other-project/", None), LinkKind::External);
        assert_eq!(classify("", None), LinkKind::External);

        assert_eq!(
            classify("/my-portfolio/about/", None),
            LinkKind::Internal("/about/".to_string())
        );
        assert_eq!(
            classify("/my-portfolio/about/", Some("_self")),
            LinkKind::Internal("/about/".to_string())
        );
        assert_eq!(
            classify("../contact/?from=projects#form", None),
            LinkKind::Internal("/contact/?from=projects#form".to_string())
        );
        assert_eq!(classify("/my-portfolio", None), LinkKind::Internal("/".to_string()));
    }

    #[test]
    fn test_internal_click_routes_canonical_path() {
        let env = MemoryEnv::new(PAGES_HOME);
        let router = RecordingRouter::default();
        let nav = Navigator::new(&env, &router, BasePath::SUBPATH);

        let href = BasePath::SUBPATH.format_path("/projects/");
        let outcome = nav.on_click(&click(&href));
        assert_eq!(outcome, Outcome::Routed("/projects/".to_string()));
        assert!(outcome.prevents_default());
        assert_eq!(*router.pushed.borrow(), vec!["/projects/".to_string()]);
    }

    #[test]
    fn test_relative_click_with_root_base() {
        let env = MemoryEnv::new("http://127.0.0.1:3000/");
        let router = RecordingRouter::default();
        let nav = Navigator::new(&env, &router, BasePath::ROOT);
        assert_eq!(nav.on_click(&click("about/")), Outcome::Routed("/about/".to_string()));
        assert_eq!(*router.pushed.borrow(), vec!["/about/".to_string()]);
    }

    #[test]
    fn test_external_and_new_tab_clicks_skip_router() {
        let env = MemoryEnv::new(PAGES_HOME);
        let router = RecordingRouter::default();
        let nav = Navigator::new(&env, &router, BasePath::SUBPATH);

        let new_tab = AnchorClick {
            href: "/my-portfolio/about/",
            target: Some("_blank"),
            ..Default::default()
        };
        assert_eq!(nav.on_click(&new_tab), Outcome::PassThrough);
        assert_eq!(nav.on_click(&click("https://github.com/akashbroo007")), Outcome::PassThrough);
        assert_eq!(nav.on_click(&click("#top")), Outcome::PassThrough);
        assert!(router.pushed.borrow().is_empty());
    }

    #[test]
    fn test_modified_and_prevented_clicks_pass_through() {
        let env = MemoryEnv::new(PAGES_HOME);
        let router = RecordingRouter::default();
        let nav = Navigator::new(&env, &router, BasePath::SUBPATH);
        let href = "/my-portfolio/contact/";

        for c in [
            AnchorClick { href, modified: true, ..Default::default() },
            AnchorClick { href, download: true, ..Default::default() },
            AnchorClick { href, default_prevented: true, ..Default::default() },
        ] {
            assert_eq!(nav.on_click(&c), Outcome::PassThrough);
        }
        assert!(router.pushed.borrow().is_empty());
    }

    #[test]
    fn test_router_failure_falls_back_to_full_load() {
        let env = MemoryEnv::new(PAGES_HOME);
        let router = RecordingRouter {
            broken: true,
            ..Default::default()
        };
        let nav = Navigator::new(&env, &router, BasePath::SUBPATH);

        let outcome = nav.on_click(&click("/my-portfolio/about/"));
        assert_eq!(outcome, Outcome::Reloaded("/my-portfolio/about/".to_string()));
        assert!(outcome.prevents_default());
        assert_eq!(*env.assigned.borrow(), vec!["/my-portfolio/about/".to_string()]);
    }

    #[test]
    fn test_programmatic_navigation() {
        let env = MemoryEnv::new(PAGES_HOME);
        let router = RecordingRouter::default();
        let nav = Navigator::new(&env, &router, BasePath::SUBPATH);
        let outcome = nav.navigate(NavigationIntent::new("/contact/", Trigger::Programmatic));
        assert_eq!(outcome, Outcome::Routed("/contact/".to_string()));
        assert!(env.assigned.borrow().is_empty());
    }

    #[test]
    fn test_href_round_trip_through_interceptor() {
        // for every internal path P the router receives exactly P
        for base in [BasePath::ROOT, BasePath::SUBPATH] {
            let env = MemoryEnv::new(&format!("https://akashbroo007.github.io{}/", base.as_str()));
            let router = RecordingRouter::default();
            let nav = Navigator::new(&env, &router, base);
            for route in crate::routing::Route::ALL {
                let href = base.format_path(route.path());
                nav.on_click(&click(&href));
            }
            let expected = crate::routing::Route::ALL
                .iter()
                .map(|r| r.path().to_string())
                .collect::<Vec<_>>();
            assert_eq!(*router.pushed.borrow(), expected);
        }
    }

    /// Stand-in listener that counts how often it was installed.
    fn install(count: &RefCell<usize>) -> Result<&'static str, SiteError> {
        *count.borrow_mut() += 1;
        Ok("click")
    }

    #[test]
    fn test_listener_slot_installs_once() {
        let installs = RefCell::new(0);
        let mut slot = ListenerSlot::new();

        assert_eq!(slot.acquire(|| install(&installs)), Ok(true));
        assert_eq!(slot.acquire(|| install(&installs)), Ok(false));
        assert_eq!(*installs.borrow(), 1);
        assert_eq!(slot.users(), 2);
        assert!(slot.is_installed());
    }

    #[test]
    fn test_listener_slot_survives_duplicate_release() {
        let installs = RefCell::new(0);
        let mut slot = ListenerSlot::new();
        slot.acquire(|| install(&installs)).unwrap();
        slot.acquire(|| install(&installs)).unwrap();

        // the second interceptor unmounts while the first is still mounted
        assert_eq!(slot.release(), None);
        assert!(slot.is_installed());

        assert_eq!(slot.release(), Some("click"));
        assert!(!slot.is_installed());
        assert_eq!(slot.users(), 0);
        assert_eq!(slot.release(), None);
    }

    #[test]
    fn test_listener_slot_reinstalls_after_last_release() {
        let installs = RefCell::new(0);
        let mut slot = ListenerSlot::new();
        slot.acquire(|| install(&installs)).unwrap();
        slot.release();

        assert_eq!(slot.acquire(|| install(&installs)), Ok(true));
        assert_eq!(*installs.borrow(), 2);
    }

    #[test]
    fn test_listener_slot_failed_install_holds_nothing() {
        let mut slot: ListenerSlot<&'static str> = ListenerSlot::new();
        assert_eq!(slot.acquire(|| Err(SiteError::NoWindow)), Err(SiteError::NoWindow));
        assert_eq!(slot.users(), 0);
        assert!(!slot.is_installed());
        assert_eq!(slot.release(), None);
    }
}
