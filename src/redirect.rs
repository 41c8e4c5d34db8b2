//! Restores the route a visitor originally asked for after the static host's
//! fallback page bounced them to the site root.
//!
//! The fallback page hands the route over as `?route=<percent-encoded path>`
//! and may also stash the raw path in session storage under
//! [`PENDING_ROUTE_KEY`]. The query parameter wins when both are present.
//! This runs before the UI mounts and only rewrites history, so the router
//! starts on the right page without another request to the host.

use url::{Position, Url};

use crate::config::{PENDING_ROUTE_KEY, ROUTE_PARAM};
use crate::env::Environment;
use crate::error::SiteError;
use crate::routing::BasePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffSource {
    Query,
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRoute {
    pub route: String,
    pub source: HandoffSource,
}

/// Read and consume the handoff marker, if any.
///
/// The session entry is removed whether or not it is used, so a stale value
/// can't fire on a later load.
pub fn take_pending_route<E: Environment>(env: &E, url: &Url) -> Option<PendingRoute> {
    let stashed = env.session_take(PENDING_ROUTE_KEY);
    let query = url
        .query_pairs()
        .find(|(k, _)| k == ROUTE_PARAM)
        .map(|(_, v)| v.into_owned());

    match (query, stashed) {
        (Some(route), _) => Some(PendingRoute {
            route,
            source: HandoffSource::Query,
        }),
        (None, Some(route)) => Some(PendingRoute {
            route,
            source: HandoffSource::Session,
        }),
        (None, None) => None,
    }
}

/// Only same-site absolute paths are accepted.
fn validate_route(route: &str) -> Result<&str, SiteError> {
    let route = route.trim();
    let bad = !route.starts_with('/')
        || route.starts_with("//")
        || route.starts_with("/\\")
        || route.chars().any(char::is_control);
    if bad {
        return Err(SiteError::Decode(route.to_string()));
    }
    Ok(route)
}

/// Build the address the history entry should be rewritten to.
///
/// Query parameters other than the handoff one and the landing fragment are
/// carried over unless the restored route brings its own.
pub fn rewrite_target(url: &Url, base: BasePath, route: &str) -> Result<String, SiteError> {
    let route = validate_route(route)?;
    let canonical = base.clean_path(route);
    let mut next = url.join(&base.format_path(&canonical))?;
    if next.origin() != url.origin() {
        return Err(SiteError::Decode(route.to_string()));
    }

    if next.query().is_none() {
        let rest = url
            .query_pairs()
            .filter(|(k, _)| k != ROUTE_PARAM)
            .collect::<Vec<_>>();
        if !rest.is_empty() {
            next.query_pairs_mut().extend_pairs(rest);
        }
    }
    if next.fragment().is_none() {
        next.set_fragment(url.fragment());
    }

    Ok(next[Position::BeforePath..].to_string())
}

fn restore<E: Environment>(env: &E, base: BasePath) -> Result<Option<String>, SiteError> {
    let url = env.current_url()?;
    let Some(pending) = take_pending_route(env, &url) else {
        return Ok(None);
    };
    let target = rewrite_target(&url, base, &pending.route)?;
    env.replace_history(&target)?;
    log::debug!("restored {:?} route {} as {}", pending.source, pending.route, target);
    Ok(Some(target))
}

/// Rewrite the address bar to the route handed over by the fallback page.
///
/// Returns the new address when a rewrite happened. Never fails: anything
/// that goes wrong is logged and the page mounts at whatever URL it has.
pub fn restore_pending_route<E: Environment>(env: &E, base: BasePath) -> Option<String> {
    restore(env, base).unwrap_or_else(|e| {
        log::warn!("ignoring pending route: {e}");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;

    const PAGES_ROOT: &str = "https://akashbroo007.github.io/my-portfolio/";

    #[test]
    fn test_query_handoff_rewrites_once() {
        let env = MemoryEnv::new(&format!("{PAGES_ROOT}?route=%2Fprojects"));
        let base = BasePath::SUBPATH;

        let first = restore_pending_route(&env, base);
        assert_eq!(first.as_deref(), Some("/my-portfolio/projects"));
        assert_eq!(env.href(), "https://akashbroo007.github.io/my-portfolio/projects");

        // marker consumed, nothing left to do
        assert_eq!(restore_pending_route(&env, base), None);
        assert_eq!(env.replaced.borrow().len(), 1);
    }

    #[test]
    fn test_root_base_path() {
        let env = MemoryEnv::new("http://127.0.0.1:3000/?route=%2Fabout%2F");
        let target = restore_pending_route(&env, BasePath::ROOT);
        assert_eq!(target.as_deref(), Some("/about/"));
    }

    #[test]
    fn test_session_handoff_is_cleared() {
        let env = MemoryEnv::new(PAGES_ROOT).with_session(PENDING_ROUTE_KEY, "/contact/");
        let target = restore_pending_route(&env, BasePath::SUBPATH);
        assert_eq!(target.as_deref(), Some("/my-portfolio/contact/"));
        assert!(!env.has_session(PENDING_ROUTE_KEY));
        assert_eq!(restore_pending_route(&env, BasePath::SUBPATH), None);
    }

    #[test]
    fn test_query_wins_over_session() {
        let env = MemoryEnv::new(&format!("{PAGES_ROOT}?route=%2Fabout%2F"))
            .with_session(PENDING_ROUTE_KEY, "/contact/");
        let target = restore_pending_route(&env, BasePath::SUBPATH);
        assert_eq!(target.as_deref(), Some("/my-portfolio/about/"));
        // the losing session entry is still consumed
        assert!(!env.has_session(PENDING_ROUTE_KEY));
    }

    #[test]
    fn test_prefixed_route_is_not_doubled() {
        let env = MemoryEnv::new(&format!("{PAGES_ROOT}?route=%2Fmy-portfolio%2Fabout%2F"));
        let target = restore_pending_route(&env, BasePath::SUBPATH);
        assert_eq!(target.as_deref(), Some("/my-portfolio/about/"));
    }

    #[test]
    fn test_other_query_and_fragment_are_kept() {
        let env = MemoryEnv::new(&format!("{PAGES_ROOT}?ref=cv&route=%2Fprojects%2F#upcoming"));
        let target = restore_pending_route(&env, BasePath::SUBPATH);
        assert_eq!(target.as_deref(), Some("/my-portfolio/projects/?ref=cv#upcoming"));
    }

    #[test]
    fn test_route_query_and_fragment_take_precedence() {
        let env = MemoryEnv::new(&format!(
            "{PAGES_ROOT}?ref=cv&route=%2Fprojects%2F%3Ftab%3D2%23top#old"
        ));
        let target = restore_pending_route(&env, BasePath::SUBPATH);
        assert_eq!(target.as_deref(), Some("/my-portfolio/projects/?tab=2#top"));
    }

    #[test]
    fn test_invalid_routes_are_ignored() {
        for bad in ["about", "%2F%2Fevil.example%2F", "https%3A%2F%2Fevil.example", "%2F%5Cevil.example"] {
            let env = MemoryEnv::new(&format!("{PAGES_ROOT}?route={bad}"));
            assert_eq!(restore_pending_route(&env, BasePath::SUBPATH), None, "{bad}");
            assert!(env.replaced.borrow().is_empty());
        }
    }

    #[test]
    fn test_no_marker_is_noop() {
        let env = MemoryEnv::new(&format!("{PAGES_ROOT}about/?ref=cv"));
        assert_eq!(restore_pending_route(&env, BasePath::SUBPATH), None);
        assert!(env.replaced.borrow().is_empty());
    }

    #[test]
    fn test_take_pending_route_sources() {
        let url = Url::parse(&format!("{PAGES_ROOT}?route=%2Fabout%2F")).unwrap();
        let env = MemoryEnv::new(PAGES_ROOT);
        assert_eq!(
            take_pending_route(&env, &url),
            Some(PendingRoute {
                route: "/about/".to_string(),
                source: HandoffSource::Query
            })
        );

        let url = Url::parse(PAGES_ROOT).unwrap();
        let env = MemoryEnv::new(PAGES_ROOT).with_session(PENDING_ROUTE_KEY, "/contact/");
        let pending = take_pending_route(&env, &url).unwrap();
        assert_eq!(pending.source, HandoffSource::Session);
        assert_eq!(take_pending_route(&env, &url), None);
    }
}
