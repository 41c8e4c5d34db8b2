//! Access to the ambient browser state the routing code depends on.
//!
//! Everything that touches `window.location`, `window.history` or
//! `window.sessionStorage` goes through [`Environment`], so the redirect,
//! navigation and loading logic can run against [`MemoryEnv`] in tests.

use url::Url;

use crate::error::SiteError;

pub trait Environment {
    /// Full URL of the current document.
    fn current_url(&self) -> Result<Url, SiteError>;

    fn session_get(&self, key: &str) -> Option<String>;

    fn session_set(&self, key: &str, value: &str) -> Result<(), SiteError>;

    fn session_remove(&self, key: &str);

    /// Rewrite the address bar without navigating.
    fn replace_history(&self, url: &str) -> Result<(), SiteError>;

    /// Full page navigation.
    fn assign_location(&self, url: &str) -> Result<(), SiteError>;

    /// Read a session value and clear it in the same step.
    fn session_take(&self, key: &str) -> Option<String> {
        let value = self.session_get(key)?;
        self.session_remove(key);
        Some(value)
    }
}

/// No browser attached, as when rendering on the server. Reads come back
/// empty and writes fail with [`SiteError::NoWindow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedEnv;

impl Environment for DetachedEnv {
    fn current_url(&self) -> Result<Url, SiteError> {
        Err(SiteError::NoWindow)
    }

    fn session_get(&self, _key: &str) -> Option<String> {
        None
    }

    fn session_set(&self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }

    fn session_remove(&self, _key: &str) {}

    fn replace_history(&self, _url: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }

    fn assign_location(&self, _url: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }
}

/// The request being rendered on the server. Only the URL is known; there is
/// no session and nothing can be navigated.
///
/// Lets the server apply the same hostname rules the browser applies after
/// hydration.
#[derive(Debug, Clone, Default)]
pub struct RequestEnv {
    url: Option<Url>,
}

impl RequestEnv {
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        let host = parts
            .headers
            .get(http::header::HOST)
            .and_then(|h| h.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()));
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok())
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http");
        let path = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());

        let url = host.and_then(|host| match Url::parse(&format!("{scheme}://{host}{path}")) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("couldn't rebuild request URL for host {host:?}: {e}");
                None
            }
        });
        Self { url }
    }
}

impl Environment for RequestEnv {
    fn current_url(&self) -> Result<Url, SiteError> {
        self.url
            .clone()
            .ok_or_else(|| SiteError::Location("request has no host".to_string()))
    }

    fn session_get(&self, _key: &str) -> Option<String> {
        None
    }

    fn session_set(&self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }

    fn session_remove(&self, _key: &str) {}

    fn replace_history(&self, _url: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }

    fn assign_location(&self, _url: &str) -> Result<(), SiteError> {
        Err(SiteError::NoWindow)
    }
}

/// The environment the page is running in.
#[cfg(any(feature = "hydrate", feature = "csr"))]
pub fn ambient() -> BrowserEnv {
    BrowserEnv
}

#[cfg(not(any(feature = "hydrate", feature = "csr")))]
pub fn ambient() -> DetachedEnv {
    DetachedEnv
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
pub use browser::BrowserEnv;

#[cfg(any(feature = "hydrate", feature = "csr"))]
mod browser {
    use url::Url;
    use wasm_bindgen::JsValue;

    use super::Environment;
    use crate::error::SiteError;

    fn js_err(v: JsValue) -> String {
        v.as_string().unwrap_or_else(|| format!("{v:?}"))
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserEnv;

    impl BrowserEnv {
        fn window(&self) -> Result<web_sys::Window, SiteError> {
            web_sys::window().ok_or(SiteError::NoWindow)
        }

        fn storage(&self) -> Result<web_sys::Storage, SiteError> {
            self.window()?
                .session_storage()
                .map_err(|e| SiteError::Storage(js_err(e)))?
                .ok_or_else(|| SiteError::Storage("sessionStorage is disabled".to_string()))
        }
    }

    impl Environment for BrowserEnv {
        fn current_url(&self) -> Result<Url, SiteError> {
            let href = self
                .window()?
                .location()
                .href()
                .map_err(|e| SiteError::Location(js_err(e)))?;
            Ok(Url::parse(&href)?)
        }

        fn session_get(&self, key: &str) -> Option<String> {
            self.storage().ok()?.get_item(key).ok().flatten()
        }

        fn session_set(&self, key: &str, value: &str) -> Result<(), SiteError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(js_err(e)))
        }

        fn session_remove(&self, key: &str) {
            if let Ok(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }

        fn replace_history(&self, url: &str) -> Result<(), SiteError> {
            self.window()?
                .history()
                .map_err(|e| SiteError::History(js_err(e)))?
                .replace_state_with_url(&JsValue::NULL, "", Some(url))
                .map_err(|e| SiteError::History(js_err(e)))
        }

        fn assign_location(&self, url: &str) -> Result<(), SiteError> {
            self.window()?
                .location()
                .assign(url)
                .map_err(|e| SiteError::Location(js_err(e)))
        }
    }
}

#[cfg(test)]
pub use memory::MemoryEnv;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_take_clears_value() {
        let env = MemoryEnv::new("https://example.github.io/my-portfolio/")
            .with_session("key", "value");
        assert_eq!(env.session_take("key").as_deref(), Some("value"));
        assert!(!env.has_session("key"));
        assert_eq!(env.session_take("key"), None);
    }

    #[test]
    fn test_detached_env_fails_open() {
        let env = DetachedEnv;
        assert_eq!(env.current_url(), Err(SiteError::NoWindow));
        assert_eq!(env.session_take("anything"), None);
        assert!(env.session_set("k", "v").is_err());
        assert!(env.replace_history("/").is_err());
    }

    #[test]
    fn test_replace_history_keeps_origin() {
        let env = MemoryEnv::new("https://example.github.io/my-portfolio/?route=%2Fabout");
        env.replace_history("/my-portfolio/about").unwrap();
        assert_eq!(env.href(), "https://example.github.io/my-portfolio/about");
        assert!(env.replace_history("https://evil.example/").is_err());
        assert_eq!(env.replaced.borrow().len(), 1);
    }

    fn request(uri: &str, host: Option<&str>) -> http::request::Parts {
        let mut builder = http::Request::builder().uri(uri);
        if let Some(host) = host {
            builder = builder.header(http::header::HOST, host);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_request_env_rebuilds_url_from_host() {
        let env = RequestEnv::from_parts(&request("/my-portfolio/about/?x=1", Some("127.0.0.1:3000")));
        assert_eq!(
            env.current_url().unwrap().as_str(),
            "http://127.0.0.1:3000/my-portfolio/about/?x=1"
        );
        assert_eq!(env.session_take("anything"), None);
        assert!(env.replace_history("/").is_err());
    }

    #[test]
    fn test_request_env_honours_forwarded_proto() {
        let mut parts = request("/", Some("akashbroo007.github.io"));
        parts
            .headers
            .insert("x-forwarded-proto", http::HeaderValue::from_static("https"));
        let env = RequestEnv::from_parts(&parts);
        assert_eq!(
            env.current_url().unwrap().as_str(),
            "https://akashbroo007.github.io/"
        );
    }

    #[test]
    fn test_request_env_without_host() {
        let env = RequestEnv::from_parts(&request("/about/", None));
        assert!(env.current_url().is_err());

        // absolute-form request targets carry their own authority
        let env = RequestEnv::from_parts(&request("http://[::1]:3000/", None));
        assert_eq!(env.current_url().unwrap().as_str(), "http://[::1]:3000/");
    }
}
