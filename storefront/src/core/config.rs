use nile_client::ClientConfig;
use nile_client::config::DEFAULT_BASE_URL;
use rust_decimal::Decimal;

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | NILE_API_URL | https://restaurant-template.runasp.net | Backend base URL |
/// | NILE_API_TOKEN | (none) | Bearer token sent with every request |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout in seconds |
/// | LOG_LEVEL | info | Log filter when `RUST_LOG` is unset |
/// | LOG_DIR | (none) | Write logs to a daily file in this directory |
/// | DELIVERY_FEE | 15 | Flat delivery fee applied at checkout |
/// | CURRENCY_LABEL | EGP | Suffix of displayed amounts |
///
/// # Example
///
/// ```ignore
/// NILE_API_TOKEN=... LOG_LEVEL=debug storefront report --from 2024-05-01 --to 2024-05-31
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub delivery_fee: Decimal,
    pub currency: String,
}

impl Config {
    /// Load from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty("NILE_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_token: non_empty("NILE_API_TOKEN"),
            request_timeout_secs: non_empty("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(30),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            delivery_fee: non_empty("DELIVERY_FEE")
                .and_then(|v| v.trim().parse::<Decimal>().ok())
                .filter(|fee| !fee.is_sign_negative())
                .unwrap_or_else(|| Decimal::from(15)),
            currency: non_empty("CURRENCY_LABEL").unwrap_or_else(|| "EGP".into()),
        }
    }

    /// Settings for the backend client
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
