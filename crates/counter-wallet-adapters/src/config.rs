use alloy::primitives::Address;
use thiserror::Error;

use counter_wallet_core::{chain_name_for_id, explorer_base_url, SubmitterConfig};

pub const ENV_PROFILE: &str = "COUNTER_WALLET_PROFILE";
pub const ENV_PROXY_URL: &str = "COUNTER_WALLET_PROXY_URL";
pub const ENV_PROXY_TIMEOUT_MS: &str = "COUNTER_WALLET_PROXY_TIMEOUT_MS";
pub const ENV_COUNTER_ADDRESS: &str = "COUNTER_WALLET_COUNTER_ADDRESS";
pub const ENV_EXPLORER_TX_URL: &str = "COUNTER_WALLET_EXPLORER_TX_URL";
pub const ENV_CHAIN_ID: &str = "COUNTER_WALLET_CHAIN_ID";
pub const ENV_CHAIN_NAME: &str = "COUNTER_WALLET_CHAIN_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeProfile {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub profile: RuntimeProfile,
    /// JSON-RPC endpoint of the wallet bridge. `None` selects the
    /// deterministic wallet in development.
    pub wallet_proxy_url: Option<String>,
    pub proxy_timeout_ms: u64,
    pub deterministic_account: Address,
    pub submitter: SubmitterConfig,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            profile: RuntimeProfile::Development,
            wallet_proxy_url: None,
            proxy_timeout_ms: 120_000,
            deterministic_account: Address::repeat_byte(0x11),
            submitter: SubmitterConfig::default(),
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the
    /// `COUNTER_WALLET_*` keys. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(raw) = get(ENV_PROFILE) {
            cfg.profile = match raw.to_ascii_lowercase().as_str() {
                "development" | "dev" => RuntimeProfile::Development,
                "production" | "prod" => RuntimeProfile::Production,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_PROFILE,
                        reason: format!("unknown profile '{other}'"),
                    })
                }
            };
        }
        cfg.wallet_proxy_url = get(ENV_PROXY_URL);
        if let Some(raw) = get(ENV_PROXY_TIMEOUT_MS) {
            cfg.proxy_timeout_ms = raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: ENV_PROXY_TIMEOUT_MS,
                reason: format!("{e}"),
            })?;
        }
        if let Some(raw) = get(ENV_COUNTER_ADDRESS) {
            cfg.submitter.counter_address =
                raw.parse().map_err(|e| ConfigError::InvalidValue {
                    key: ENV_COUNTER_ADDRESS,
                    reason: format!("{e}"),
                })?;
        }
        if let Some(raw) = get(ENV_CHAIN_ID) {
            let chain_id = raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: ENV_CHAIN_ID,
                reason: format!("{e}"),
            })?;
            cfg.submitter.chain_id = chain_id;
            cfg.submitter.chain_name = chain_name_for_id(chain_id)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("chain-{chain_id}"));
        }
        if let Some(raw) = get(ENV_CHAIN_NAME) {
            cfg.submitter.chain_name = raw;
        }

        // The explorer follows the chain unless set explicitly.
        if let Some(raw) = get(ENV_EXPLORER_TX_URL) {
            cfg.submitter.explorer_tx_url_template = raw;
        } else if let Some(base) = explorer_base_url(&cfg.submitter.chain_name) {
            cfg.submitter.explorer_tx_url_template = format!("{base}/tx/{{hash}}");
        }
        Ok(cfg)
    }

    pub fn strict_runtime_required(&self) -> bool {
        self.profile == RuntimeProfile::Production
    }
}
