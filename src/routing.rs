use url::{Host, Url};

use crate::config::{BuildMode, PAGES_DOMAIN, SUBPATH};
use crate::env::Environment;

/// Prefix applied to every internal path for the current page load.
///
/// Resolved once per load from the hostname and the build mode; the value is
/// either empty (served from the root) or [`SUBPATH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasePath(&'static str);

impl BasePath {
    pub const ROOT: Self = Self("");
    pub const SUBPATH: Self = Self(SUBPATH);

    pub fn resolve(url: Option<&Url>, mode: BuildMode) -> Self {
        match url.and_then(Url::host) {
            Some(Host::Domain(domain)) if is_pages_domain(domain) => return Self::SUBPATH,
            // IP previews are never served from the subpath
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => return Self::ROOT,
            _ => {}
        }
        if mode.is_production() {
            Self::SUBPATH
        } else {
            Self::ROOT
        }
    }

    /// Resolve against the environment's current URL, falling back to the
    /// build-mode default when the URL can't be read (e.g. during SSR).
    pub fn detect<E: Environment>(env: &E, mode: BuildMode) -> Self {
        match env.current_url() {
            Ok(url) => Self::resolve(Some(&url), mode),
            Err(e) => {
                log::debug!("base path from build mode only: {e}");
                Self::resolve(None, mode)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix an internal path with the base path. External URLs are returned untouched.
    pub fn format_path(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.is_empty() || path == "/" {
            return format!("{}/", self.0);
        }
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// Strip the base path to get the path the client router works with.
    ///
    /// The prefix is only removed at a segment boundary, so `/my-portfolio-old`
    /// is left alone.
    pub fn clean_path(&self, path: &str) -> String {
        self.strip(path).unwrap_or_else(|| path.to_string())
    }

    /// Like [`clean_path`](Self::clean_path), but `None` when the path lies
    /// outside the base path.
    pub fn strip(&self, path: &str) -> Option<String> {
        if self.is_root() {
            return Some(path.to_string());
        }
        match path.strip_prefix(self.0)? {
            "" => Some("/".to_string()),
            rest if rest.starts_with('/') => Some(rest.to_string()),
            rest if rest.starts_with('?') || rest.starts_with('#') => Some(format!("/{rest}")),
            _ => None,
        }
    }
}

fn is_pages_domain(domain: &str) -> bool {
    domain == PAGES_DOMAIN
        || domain
            .strip_suffix(PAGES_DOMAIN)
            .is_some_and(|sub| sub.ends_with('.'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about/",
            Self::Projects => "/projects/",
            Self::Contact => "/contact/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Exact match against the allow-list.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Whether the router's current pathname points at this route, with or
    /// without the trailing slash.
    pub fn is_active(self, pathname: &str) -> bool {
        let want = self.path().trim_end_matches('/');
        pathname.trim_end_matches('/') == want
    }
}

pub fn is_valid_route(path: &str) -> bool {
    Route::from_path(path).is_some()
}
