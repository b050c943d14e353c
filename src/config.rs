//! API endpoint configuration.
//!
//! The base URL is resolved once at startup and handed to the client.

use std::fmt::{Display, Formatter};

/// Environment variable naming the API base URL, read both at runtime and at build time.
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

/// Local development API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Value embedded when the binary was compiled, if any.
const BUILD_TIME_API_URL: Option<&str> = option_env!("DASHBOARD_API_URL");

/// Where the base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    /// Injected at runtime (`--api-url` or the environment).
    Runtime,
    /// Embedded at build time.
    BuildTime,
    /// Hardcoded local-development default.
    Default,
}

impl Display for BaseUrlSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseUrlSource::Runtime => write!(f, "runtime"),
            BaseUrlSource::BuildTime => write!(f, "build"),
            BaseUrlSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    source: BaseUrlSource,
}

impl ApiConfig {
    /// Resolves the base URL: runtime value, then the build-time value, then the default.
    pub fn resolve(runtime: Option<&str>) -> Self {
        Self::resolve_with(runtime, BUILD_TIME_API_URL)
    }

    /// Resolution with an explicit build-time value. Blank values count as absent.
    pub fn resolve_with(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let (url, source) = if let Some(url) = present(runtime) {
            (url, BaseUrlSource::Runtime)
        } else if let Some(url) = present(build_time) {
            (url, BaseUrlSource::BuildTime)
        } else {
            (DEFAULT_API_URL, BaseUrlSource::Default)
        };

        Self {
            base_url: url.trim_end_matches('/').to_string(),
            source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> BaseUrlSource {
        self.source
    }

    /// Joins a path (which may carry a query string) onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Display for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.base_url, self.source)
    }
}
