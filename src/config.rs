use std::str::FromStr;

use crate::error::SiteError;

/// Subpath the production build is served from on the static host.
pub const SUBPATH: &str = "/my-portfolio";
/// Hostnames ending in this domain are always served from [`SUBPATH`].
pub const PAGES_DOMAIN: &str = "github.io";
/// Query parameter the static host's fallback page uses to hand over the requested route.
pub const ROUTE_PARAM: &str = "route";
/// Session storage key holding a route stashed by the fallback page.
pub const PENDING_ROUTE_KEY: &str = "portfolio:pending-route";
/// Session storage key set once the loading screen has run this session.
pub const LOADING_SHOWN_KEY: &str = "portfolio:loading-shown";

pub const BUILD_TIME: &str = env!("BUILD_TIME");
const SITE_BUILD_MODE: &str = env!("SITE_BUILD_MODE");

pub const GITHUB_URL: &str = "https://github.com/akashbroo007";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/akash-prabhakaran";
pub const INSTAGRAM_URL: &str = "https://instagram.com/akashbroo007";
pub const EMAIL: &str = "akashfgz80@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Build mode baked in by `build.rs`. Unknown values are served from the root.
    pub fn current() -> Self {
        SITE_BUILD_MODE.parse().unwrap_or_else(|e| {
            log::warn!("{e}, falling back to development");
            Self::Development
        })
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for BuildMode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(SiteError::BuildMode(other.to_string())),
        }
    }
}
