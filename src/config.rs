use crate::constants::{
    BASE_URL, DEFAULT_LOG_FILE, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_QUESTION_DELAY_SECS,
    DEFAULT_RETRY_DELAY_SECS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use std::{env, path::PathBuf, time::Duration};

/// Everything the executor needs to talk to one chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub timeout: Duration,
    /// Retry a 200 whose body lacks `choices[0].message.content` instead of failing at once.
    pub retry_malformed: bool,
    pub show_spinner: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_malformed: false,
            show_spinner: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub executor: ExecutorConfig,
    pub question_delay: Duration,
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = ExecutorConfig::default();
        let executor = ExecutorConfig {
            base_url: get("GAIA_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: get("GAIA_MODEL").unwrap_or(defaults.model),
            max_retries: parse_number("GAIA_MAX_RETRIES", get("GAIA_MAX_RETRIES"))?
                .unwrap_or(defaults.max_retries),
            retry_delay: parse_secs("GAIA_RETRY_DELAY_SECS", get("GAIA_RETRY_DELAY_SECS"))?
                .unwrap_or(defaults.retry_delay),
            timeout: parse_secs("GAIA_TIMEOUT_SECS", get("GAIA_TIMEOUT_SECS"))?
                .unwrap_or(defaults.timeout),
            retry_malformed: parse_bool("GAIA_RETRY_MALFORMED", get("GAIA_RETRY_MALFORMED"))?
                .unwrap_or(defaults.retry_malformed),
            ..defaults
        };

        let question_delay =
            parse_secs("GAIA_QUESTION_DELAY_SECS", get("GAIA_QUESTION_DELAY_SECS"))?
                .unwrap_or(Duration::from_secs(DEFAULT_QUESTION_DELAY_SECS));

        let log_file = get("GAIA_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            executor,
            question_delay,
            log_file,
        })
    }
}

fn parse_number(name: &'static str, value: Option<String>) -> Result<Option<u32>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}

fn parse_secs(name: &'static str, value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    Ok(parse_number(name, value)?.map(|secs| Duration::from_secs(u64::from(secs))))
}

fn parse_bool(name: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(Some(true)),
        "0" | "false" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { name, value: raw }),
    }
}
