//! Page-layer configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any page is
//! built.
//!
//! ## Optional Variables
//!
//! - `SITE_DOMAIN` - Domain rendered into every page (default: `localhost`)
//! - `DEFAULT_LANGUAGE` - Page language when none is requested (default: `en`)
//! - `SUPPORTED_LANGUAGES` - Comma-separated language codes (default: `en,cy`)
//! - `FEEDBACK_URL` - Feedback link on version pages; empty disables it
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Page-layer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub site_domain: String,
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// Root-relative or absolute link; empty when feedback is disabled.
    pub feedback_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_domain: "localhost".to_string(),
            default_language: "en".to_string(),
            supported_languages: vec!["en".to_string(), "cy".to_string()],
            feedback_url: String::new(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let site_domain = env::var("SITE_DOMAIN").unwrap_or(defaults.site_domain);
        let default_language = env::var("DEFAULT_LANGUAGE")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or(defaults.default_language);

        let supported_languages = env::var("SUPPORTED_LANGUAGES")
            .map(|v| parse_languages(&v))
            .unwrap_or(defaults.supported_languages);

        let feedback_url = env::var("FEEDBACK_URL").unwrap_or_default();
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            site_domain,
            default_language,
            supported_languages,
            feedback_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `site_domain` is empty
    /// - `supported_languages` is empty or lacks `default_language`
    /// - `log_format` is not `text` or `json`
    /// - `feedback_url` is neither root-relative nor an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.site_domain.trim().is_empty() {
            anyhow::bail!("SITE_DOMAIN must not be empty");
        }

        if self.supported_languages.is_empty() {
            anyhow::bail!("SUPPORTED_LANGUAGES must list at least one language");
        }

        if !self.supports_language(&self.default_language) {
            anyhow::bail!(
                "DEFAULT_LANGUAGE '{}' is not in SUPPORTED_LANGUAGES ({})",
                self.default_language,
                self.supported_languages.join(",")
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.feedback_url.is_empty()
            && !self.feedback_url.starts_with('/')
            && !self.feedback_url.starts_with("http://")
            && !self.feedback_url.starts_with("https://")
        {
            anyhow::bail!(
                "FEEDBACK_URL must start with '/', 'http://' or 'https://', got '{}'",
                self.feedback_url
            );
        }

        Ok(())
    }

    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    /// Returns whether version pages carry a feedback link.
    pub fn is_feedback_enabled(&self) -> bool {
        !self.feedback_url.is_empty()
    }

    /// Logs the loaded configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site domain: {}", self.site_domain);
        tracing::info!(
            "  Languages: {} (default: {})",
            self.supported_languages.join(","),
            self.default_language
        );

        if self.is_feedback_enabled() {
            tracing::info!("  Feedback link: {}", self.feedback_url);
        } else {
            tracing::info!("  Feedback link: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated language list, dropping blanks and lowercasing.
fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|l| l.trim().to_ascii_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
