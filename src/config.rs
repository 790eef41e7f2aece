//! Runtime configuration, read from the environment (and `.env` if present).

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::ai::ollama::{OllamaGenerator, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL};
use crate::booking::session::{SessionConfig, DEFAULT_CONFIRM_TIMEOUT};
use crate::booking::validation::ValidationPolicy;
use crate::contact::DEFAULT_SUBMIT_DELAY;
use crate::directory::{HttpDirectory, PropertyDirectory, StaticCatalog};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub confirm_timeout: Duration,
    pub phone_digits: Option<usize>,
    pub require_address: bool,
    pub directory_url: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub contact_submit_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
            phone_digits: None,
            require_address: true,
            directory_url: None,
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout: Duration::from_secs(60),
            contact_submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            confirm_timeout: Duration::from_secs(parse_or(
                &non_empty,
                "BOOKING_CONFIRM_TIMEOUT_SECS",
                defaults.confirm_timeout.as_secs(),
            )),
            phone_digits: non_empty("BOOKING_PHONE_DIGITS").and_then(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| warn!("Ignoring BOOKING_PHONE_DIGITS={:?}", raw))
                    .ok()
            }),
            require_address: parse_or(
                &non_empty,
                "BOOKING_REQUIRE_ADDRESS",
                defaults.require_address,
            ),
            directory_url: non_empty("DIRECTORY_URL"),
            llm_base_url: non_empty("LLM_BASE_URL").unwrap_or(defaults.llm_base_url),
            llm_model: non_empty("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout: Duration::from_secs(parse_or(
                &non_empty,
                "LLM_TIMEOUT_SECS",
                defaults.llm_timeout.as_secs(),
            )),
            contact_submit_delay: Duration::from_millis(parse_or(
                &non_empty,
                "CONTACT_SUBMIT_DELAY_MS",
                defaults.contact_submit_delay.as_millis() as u64,
            )),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            policy: ValidationPolicy {
                require_postal_address: self.require_address,
                phone_digits: self.phone_digits,
            },
            confirm_timeout: self.confirm_timeout,
        }
    }

    pub fn generator(&self) -> OllamaGenerator {
        OllamaGenerator::new(&self.llm_base_url, &self.llm_model, self.llm_timeout)
    }

    /// Remote catalog when `DIRECTORY_URL` is set, the built-in one otherwise
    pub fn directory(&self) -> Result<Box<dyn PropertyDirectory>> {
        match &self.directory_url {
            Some(url) => Ok(Box::new(HttpDirectory::new(url.clone())?)),
            None => Ok(Box::new(StaticCatalog::new())),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
