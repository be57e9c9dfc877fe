#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::Address;
use async_trait::async_trait;

use counter_wallet_core::{
    ContractCallRequest, PortError, SendReceipt, SubmitterConfig, TransactionSubmitter,
    WalletHandle, WalletPort,
};

/// Scripted wallet: replays the queued outcomes in order and counts calls.
#[derive(Debug, Default)]
pub struct ScriptedWallet {
    calls: AtomicUsize,
    outcomes: Mutex<Vec<Result<SendReceipt, String>>>,
    last_request: Mutex<Option<ContractCallRequest>>,
}

impl ScriptedWallet {
    pub fn resolving(hash: &str, explorer_link: Option<&str>) -> Self {
        Self::with_outcomes(vec![Ok(SendReceipt {
            transaction_hash: Some(hash.to_owned()),
            explorer_link: explorer_link.map(str::to_owned),
        })])
    }

    pub fn rejecting(message: &str) -> Self {
        Self::with_outcomes(vec![Err(message.to_owned())])
    }

    pub fn with_outcomes(outcomes: Vec<Result<SendReceipt, String>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcomes: Mutex::new(outcomes),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ContractCallRequest> {
        self.last_request.lock().expect("request lock").clone()
    }
}

#[async_trait]
impl WalletPort for ScriptedWallet {
    async fn send_transaction(
        &self,
        _wallet: &WalletHandle,
        request: &ContractCallRequest,
    ) -> Result<SendReceipt, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("request lock") = Some(request.clone());
        let mut outcomes = self.outcomes.lock().expect("outcomes lock");
        if outcomes.is_empty() {
            return Err(PortError::Transport("no scripted outcome left".to_owned()));
        }
        outcomes.remove(0).map_err(PortError::Rejected)
    }
}

pub fn wallet_handle() -> WalletHandle {
    WalletHandle {
        address: account_address(),
        chain_id: 84_532,
    }
}

pub fn account_address() -> Address {
    "0x1000000000000000000000000000000000000001"
        .parse()
        .expect("valid account address")
}

pub fn new_submitter(wallet: ScriptedWallet) -> TransactionSubmitter<ScriptedWallet> {
    TransactionSubmitter::new(wallet, SubmitterConfig::default())
}
