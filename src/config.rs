//! Service configuration.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Slide indices that hold the table template by default.
pub const DEFAULT_TEMPLATE_SLIDES: [usize; 4] = [3, 4, 5, 6];

/// Default Slides API endpoint.
pub const DEFAULT_API_BASE: &str = "https://slides.googleapis.com";

/// Options for locating template cells.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorOptions {
    /// 1-based indices of slides that may contain the table template
    pub template_slides: BTreeSet<usize>,

    /// Maximum y distance (EMU) between elements of the same row
    pub row_tolerance: f64,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            template_slides: DEFAULT_TEMPLATE_SLIDES.into_iter().collect(),
            row_tolerance: 1.0,
        }
    }
}

impl LocatorOptions {
    /// Create default locator options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template slide indices.
    pub fn with_template_slides(mut self, slides: impl IntoIterator<Item = usize>) -> Self {
        self.template_slides = slides.into_iter().collect();
        self
    }

    /// Set the row clustering tolerance. Zero means exact equality.
    pub fn with_row_tolerance(mut self, tolerance: f64) -> Self {
        self.row_tolerance = tolerance.max(0.0);
        self
    }

    /// Whether the given slide is a template slide.
    pub fn is_template(&self, slide_index: usize) -> bool {
        self.template_slides.contains(&slide_index)
    }
}

/// Runtime configuration for the server and the Slides client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service account key file
    pub credentials_file: PathBuf,

    /// Address to bind
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Timeout applied to every remote call
    pub timeout: Duration,

    /// Slides API base URL
    pub api_base: String,

    /// Template detection options
    pub locator: LocatorOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_file: PathBuf::from("service-account.json"),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            timeout: Duration::from_secs(30),
            api_base: DEFAULT_API_BASE.to_string(),
            locator: LocatorOptions::default(),
        }
    }
}

impl Config {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("GOOGLE_SERVICE_ACCOUNT_FILE") {
            config.credentials_file = PathBuf::from(path);
        }
        if let Some(host) = lookup("HOST") {
            config.host = parse_var("HOST", &host)?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(secs) = lookup("SLIDES_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_var("SLIDES_TIMEOUT_SECS", &secs)?);
        }
        if let Some(base) = lookup("SLIDES_API_BASE") {
            config.api_base = base;
        }
        if let Some(list) = lookup("SLIDES_TEMPLATE_SLIDES") {
            config.locator.template_slides = parse_slide_list(&list)?;
        }
        if let Some(tolerance) = lookup("SLIDES_ROW_TOLERANCE") {
            let tolerance: f64 = parse_var("SLIDES_ROW_TOLERANCE", &tolerance)?;
            config.locator = config.locator.with_row_tolerance(tolerance);
        }

        Ok(config)
    }

    /// Set the service account key file.
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = path.into();
        self
    }

    /// Set the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind address.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Set the remote call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the Slides API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Set template detection options.
    pub fn with_locator(mut self, locator: LocatorOptions) -> Self {
        self.locator = locator;
        self
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Configuration(format!("{}={:?}: {}", name, value, e)))
}

/// Parse a comma separated list of 1-based slide indices, e.g. `"3,4,5,6"`.
pub fn parse_slide_list(list: &str) -> Result<BTreeSet<usize>> {
    let mut slides = BTreeSet::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let index: usize = parse_var("SLIDES_TEMPLATE_SLIDES", part)?;
        if index == 0 {
            return Err(Error::Configuration(
                "slide indices are 1-based, got 0".to_string(),
            ));
        }
        slides.insert(index);
    }
    Ok(slides)
}
