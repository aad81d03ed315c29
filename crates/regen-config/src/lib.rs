//! Configuration management for Regen.
//!
//! Parses `regen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `business.url`
//! - `business.logo`
//! - `business.telephone`
//! - `business.email`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regen_schema::{BusinessProfile, SchemaSynthesizer, Segmenter, SiteProfile};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site origin.
    pub site_url: Option<String>,
    /// Override the root-path breadcrumb flag.
    pub show_on_home: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "regen.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public identity of the site.
    pub site: SiteProfile,
    /// Business facts used for `Organization` and `LocalBusiness`.
    pub business: BusinessProfile,
    /// Breadcrumb derivation settings.
    pub breadcrumbs: BreadcrumbsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Breadcrumb configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Emit a `Home`-only trail on the root path.
    pub show_on_home: bool,
    /// Labels for raw path segments, layered over the built-in table.
    pub labels: BTreeMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`business.email`").
        field: String,
        /// Error message (e.g., "${`FARM_EMAIL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a path prefix to be root-relative.
fn require_root_relative(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with /"
        )));
    }
    Ok(())
}

/// Require a `HH:MM` time of day.
fn require_time_of_day(value: &str, field: &str) -> Result<(), ConfigError> {
    let valid = value.split_once(':').is_some_and(|(h, m)| {
        h.len() == 2
            && m.len() == 2
            && h.parse::<u8>().is_ok_and(|h| h < 24)
            && m.parse::<u8>().is_ok_and(|m| m < 60)
    });
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a time in HH:MM format, got '{value}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `regen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Breadcrumb segmenter with the configured labels.
    #[must_use]
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new().with_labels(
            self.breadcrumbs
                .labels
                .iter()
                .map(|(segment, label)| (segment.clone(), label.clone())),
        )
    }

    /// Schema synthesizer for the configured profiles.
    #[must_use]
    pub fn synthesizer(&self) -> SchemaSynthesizer {
        SchemaSynthesizer::new(self.site.clone(), self.business.clone())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site_url) = &settings.site_url {
            self.site.url.clone_from(site_url);
        }
        if let Some(show_on_home) = settings.show_on_home {
            self.breadcrumbs.show_on_home = show_on_home;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and expansion
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_business()?;
        self.validate_breadcrumbs()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        // Empty url is allowed: urls then stay root-relative
        if !self.site.url.is_empty() {
            require_http_url(&self.site.url, "site.url")?;
        }
        require_root_relative(&self.site.blog_path, "site.blog_path")?;
        require_root_relative(&self.site.recipes_path, "site.recipes_path")?;
        Ok(())
    }

    /// Validate business configuration.
    fn validate_business(&self) -> Result<(), ConfigError> {
        let business = &self.business;

        if !business.url.is_empty() {
            require_http_url(&business.url, "business.url")?;
        }
        if let Some(logo) = &business.logo {
            require_non_empty(logo, "business.logo")?;
        }
        for (i, url) in business.same_as.iter().enumerate() {
            require_http_url(url, &format!("business.same_as[{i}]"))?;
        }

        if let Some(geo) = business.geo {
            if !(-90.0..=90.0).contains(&geo.latitude) {
                return Err(ConfigError::Validation(
                    "business.geo.latitude must be between -90 and 90".to_owned(),
                ));
            }
            if !(-180.0..=180.0).contains(&geo.longitude) {
                return Err(ConfigError::Validation(
                    "business.geo.longitude must be between -180 and 180".to_owned(),
                ));
            }
        }

        for (i, hours) in business.opening_hours.iter().enumerate() {
            let field = format!("business.opening_hours[{i}]");
            if hours.days.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field}.days cannot be empty"
                )));
            }
            require_time_of_day(&hours.opens, &format!("{field}.opens"))?;
            require_time_of_day(&hours.closes, &format!("{field}.closes"))?;
        }

        Ok(())
    }

    /// Validate breadcrumb configuration.
    fn validate_breadcrumbs(&self) -> Result<(), ConfigError> {
        for (segment, label) in &self.breadcrumbs.labels {
            if segment.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "breadcrumbs.labels key '{segment}' must be a single path segment"
                )));
            }
            require_non_empty(label, &format!("breadcrumbs.labels.{segment}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;

        let business = &mut self.business;
        business.url = expand::expand_env(&business.url, "business.url")?;
        expand::expand_opt(&mut business.logo, "business.logo")?;
        expand::expand_opt(&mut business.telephone, "business.telephone")?;
        expand::expand_opt(&mut business.email, "business.email")?;

        Ok(())
    }
}
