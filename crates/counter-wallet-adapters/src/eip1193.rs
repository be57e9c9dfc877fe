use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{keccak256, Address, B256};
use async_trait::async_trait;
use serde_json::Value;

use counter_wallet_core::{
    ContractCallRequest, PortError, SendReceipt, SessionPort, WalletHandle, WalletPort,
};

use crate::{AbiAdapter, AdapterConfig};

/// Wallet capability speaking EIP-1193 JSON-RPC.
///
/// In development without a bridge URL it falls back to a deterministic
/// in-process wallet; in production that fallback is refused and every call
/// fails with a policy error instead.
#[derive(Debug, Clone)]
pub struct Eip1193Adapter {
    mode: ProviderMode,
    abi: AbiAdapter,
    state: Arc<Mutex<ProviderState>>,
}

#[derive(Debug, Clone)]
enum ProviderMode {
    Disabled(String),
    Deterministic(DeterministicRuntime),
    Proxy(ProxyRuntime),
}

#[derive(Debug, Clone)]
struct DeterministicRuntime {
    account: Address,
    chain_id: u64,
}

#[derive(Debug, Clone)]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Default)]
struct ProviderState {
    session: Option<WalletHandle>,
    sent: u64,
    rpc_id: u64,
}

impl Default for Eip1193Adapter {
    fn default() -> Self {
        Self::with_config(AdapterConfig::default())
    }
}

impl Eip1193Adapter {
    pub fn with_config(config: AdapterConfig) -> Self {
        let mode = if let Some(ref base_url) = config.wallet_proxy_url {
            let timeout = Duration::from_millis(config.proxy_timeout_ms);
            match reqwest::Client::builder().timeout(timeout).build() {
                Ok(client) => ProviderMode::Proxy(ProxyRuntime {
                    base_url: base_url.clone(),
                    client,
                }),
                Err(e) => ProviderMode::Disabled(format!(
                    "failed to initialize wallet proxy client: {e}"
                )),
            }
        } else if config.strict_runtime_required() {
            ProviderMode::Disabled(
                "wallet proxy URL not configured in production runtime profile".to_owned(),
            )
        } else {
            ProviderMode::Deterministic(DeterministicRuntime {
                account: config.deterministic_account,
                chain_id: config.submitter.chain_id,
            })
        };

        match &mode {
            ProviderMode::Disabled(reason) => tracing::warn!(%reason, "wallet adapter disabled"),
            ProviderMode::Deterministic(_) => tracing::info!("using deterministic wallet"),
            ProviderMode::Proxy(proxy) => {
                tracing::info!(url = %proxy.base_url, "using wallet proxy")
            }
        }

        Self {
            mode,
            abi: AbiAdapter,
            state: Arc::new(Mutex::new(ProviderState::default())),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self.mode {
            ProviderMode::Disabled(_) => "disabled",
            ProviderMode::Deterministic(_) => "deterministic",
            ProviderMode::Proxy(_) => "proxy",
        }
    }

    fn check_mode(&self) -> Result<(), PortError> {
        if let ProviderMode::Disabled(reason) = &self.mode {
            return Err(PortError::Policy(reason.clone()));
        }
        Ok(())
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, ProviderState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("provider lock poisoned: {e}")))
    }

    async fn proxy_call(
        &self,
        proxy: &ProxyRuntime,
        method: &str,
        params: Value,
    ) -> Result<Value, PortError> {
        let id = {
            let mut g = self.lock_state()?;
            g.rpc_id = g.rpc_id.saturating_add(1);
            g.rpc_id
        };
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(%method, id, "wallet proxy request");

        let response = proxy
            .client
            .post(&proxy.base_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PortError::Transport(format!("wallet proxy request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| PortError::Transport(format!("wallet proxy json decode failed: {e}")))?;
        if let Some(err) = body.get("error") {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string());
            return Err(PortError::Rejected(message));
        }
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "wallet proxy status {}: {}",
                status, body
            )));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("wallet proxy missing result".to_owned()))
    }

    async fn proxy_connect(&self, proxy: &ProxyRuntime) -> Result<WalletHandle, PortError> {
        let result = self
            .proxy_call(proxy, "eth_requestAccounts", serde_json::json!([]))
            .await?;
        let raw = result
            .as_array()
            .ok_or_else(|| PortError::Transport("eth_requestAccounts: array expected".to_owned()))?
            .first()
            .and_then(Value::as_str)
            .ok_or(PortError::NotConnected)?;
        let address: Address = raw
            .parse()
            .map_err(|e| PortError::Validation(format!("invalid account address: {e}")))?;

        let chain = self
            .proxy_call(proxy, "eth_chainId", serde_json::json!([]))
            .await?;
        let chain_id = json_chain_id_to_u64(&chain)?;
        Ok(WalletHandle { address, chain_id })
    }

    /// Stand-in for a real wallet: the hash commits to the call and a
    /// per-adapter sequence number so repeated sends differ.
    fn deterministic_hash(
        &self,
        wallet: &WalletHandle,
        request: &ContractCallRequest,
        calldata: &[u8],
    ) -> Result<B256, PortError> {
        let seq = {
            let mut g = self.lock_state()?;
            g.sent = g.sent.saturating_add(1);
            g.sent
        };
        let mut seed = Vec::with_capacity(8 + 20 + 20 + calldata.len() + 8);
        seed.extend_from_slice(&wallet.chain_id.to_be_bytes());
        seed.extend_from_slice(wallet.address.as_slice());
        seed.extend_from_slice(request.to.as_slice());
        seed.extend_from_slice(calldata);
        seed.extend_from_slice(&seq.to_be_bytes());
        Ok(keccak256(seed))
    }
}

#[async_trait]
impl WalletPort for Eip1193Adapter {
    async fn send_transaction(
        &self,
        wallet: &WalletHandle,
        request: &ContractCallRequest,
    ) -> Result<SendReceipt, PortError> {
        self.check_mode()?;
        let calldata = self.abi.encode_call(request)?;

        let hash = match &self.mode {
            ProviderMode::Proxy(proxy) => {
                let tx = serde_json::json!({
                    "from": wallet.address.to_string(),
                    "to": request.to.to_string(),
                    "data": calldata.to_string(),
                    "value": "0x0",
                });
                let result = self
                    .proxy_call(proxy, "eth_sendTransaction", serde_json::json!([tx]))
                    .await?;
                let raw = result.as_str().ok_or_else(|| {
                    PortError::Transport("eth_sendTransaction must return hash".to_owned())
                })?;
                raw.parse::<B256>()
                    .map_err(|e| PortError::Validation(format!("invalid tx hash: {e}")))?
            }
            ProviderMode::Deterministic(_) => self.deterministic_hash(wallet, request, &calldata)?,
            ProviderMode::Disabled(reason) => return Err(PortError::Policy(reason.clone())),
        };

        Ok(SendReceipt {
            transaction_hash: Some(hash.to_string()),
            explorer_link: None,
        })
    }
}

#[async_trait]
impl SessionPort for Eip1193Adapter {
    async fn connect(&self) -> Result<WalletHandle, PortError> {
        self.check_mode()?;
        let handle = match &self.mode {
            ProviderMode::Proxy(proxy) => self.proxy_connect(proxy).await?,
            ProviderMode::Deterministic(rt) => WalletHandle {
                address: rt.account,
                chain_id: rt.chain_id,
            },
            ProviderMode::Disabled(reason) => return Err(PortError::Policy(reason.clone())),
        };
        self.lock_state()?.session = Some(handle.clone());
        tracing::info!(account = %handle.address, chain_id = handle.chain_id, "wallet connected");
        Ok(handle)
    }

    fn current(&self) -> Option<WalletHandle> {
        self.state.lock().ok().and_then(|g| g.session.clone())
    }

    fn disconnect(&self) {
        if let Ok(mut g) = self.state.lock() {
            if g.session.take().is_some() {
                tracing::info!("wallet disconnected");
            }
        }
    }
}

fn json_chain_id_to_u64(value: &Value) -> Result<u64, PortError> {
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    let s = value
        .as_str()
        .ok_or_else(|| PortError::Validation("chain id must be string or number".to_owned()))?;
    parse_chain_id_str(s)
}

fn parse_chain_id_str(raw: &str) -> Result<u64, PortError> {
    if raw.starts_with("0x") || raw.starts_with("0X") {
        u64::from_str_radix(raw.trim_start_matches("0x").trim_start_matches("0X"), 16)
            .map_err(|e| PortError::Validation(format!("invalid hex chain id: {e}")))
    } else {
        raw.parse()
            .map_err(|e| PortError::Validation(format!("invalid chain id: {e}")))
    }
}
