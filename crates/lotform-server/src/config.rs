//! Server configuration from the environment
//!
//! All knobs are environment variables (loaded through `dotenvy` in the
//! binary). Only the two mandatory backend URLs have no default.

use lotform_core::logging_facility::Profile;
use lotform_core::{EmptyValuePolicy, LotformError, Result, UsageJoinStrategy};
use lotform_core_types::LanguageTag;

const DEFAULT_PORT: u16 = 3000;

/// Startup configuration for the lotform server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Base URL of the inspection-data source
    pub inspection_base_url: String,
    /// Base URL of the decision-code-text source
    pub decision_codes_base_url: String,
    /// Base URL of the material-description source; unset disables the
    /// description lookup
    pub product_base_url: Option<String>,
    /// Language tag for text lookups
    pub language: LanguageTag,
    /// Default empty-value policy for composed documents
    pub policy: EmptyValuePolicy,
    /// Usage-value join strategy
    pub usage_join: UsageJoinStrategy,
    /// Logging profile
    pub logging_profile: Profile,
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `Config` when a mandatory variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an explicit variable lookup
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("LOTFORM_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| LotformError::Config {
                message: format!("LOTFORM_PORT is not a valid port: {}", raw),
            })?,
            None => DEFAULT_PORT,
        };

        let inspection_base_url = require(&lookup, "LOTFORM_INSPECTION_URL")?;
        let decision_codes_base_url = require(&lookup, "LOTFORM_DECISION_CODES_URL")?;
        let product_base_url = lookup("LOTFORM_PRODUCT_URL").filter(|url| !url.is_empty());

        let language = lookup("LOTFORM_LANGUAGE")
            .map(LanguageTag::new)
            .unwrap_or_default();
        let policy = parse_or_default(&lookup, "LOTFORM_EMPTY_VALUE_POLICY")?;
        let usage_join = parse_or_default(&lookup, "LOTFORM_USAGE_JOIN")?;
        let logging_profile = match lookup("LOTFORM_LOG_PROFILE") {
            Some(raw) => raw.parse::<Profile>().map_err(|message| {
                LotformError::Config { message }
            })?,
            None => Profile::Development,
        };

        Ok(Self {
            port,
            inspection_base_url,
            decision_codes_base_url,
            product_base_url,
            language,
            policy,
            usage_join,
            logging_profile,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LotformError::Config {
            message: format!("{} must be set", key),
        })
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<T>
where
    T: Default + std::str::FromStr<Err = String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|message| LotformError::Config { message }),
        None => Ok(T::default()),
    }
}
