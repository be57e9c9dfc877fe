use alloy::json_abi::{Function, StateMutability};
use alloy::primitives::Address;

use crate::config::SubmitterConfig;
use crate::domain::{
    ContractCallRequest, SendReceipt, SubmissionError, SubmissionResult, SubmissionState,
    WalletHandle,
};
use crate::ports::{PortError, WalletPort};
use crate::state_machine::{submission_transition, SubmissionAction};

pub const INCREMENT_FUNCTION: &str = "increment";

/// The counter's zero-argument, state-mutating `increment()` call.
pub fn increment_request(counter_address: Address) -> ContractCallRequest {
    ContractCallRequest {
        to: counter_address,
        abi: vec![Function {
            name: INCREMENT_FUNCTION.to_owned(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            state_mutability: StateMutability::NonPayable,
        }],
        function_name: INCREMENT_FUNCTION.to_owned(),
        args: Vec::new(),
    }
}

/// Drives one request/response cycle against the wallet capability and keeps
/// the tri-state result for the screen that owns it.
///
/// The `Pending` state doubles as the in-flight marker: while it is set,
/// [`begin`](Self::begin) refuses to hand out another request.
pub struct TransactionSubmitter<W: WalletPort> {
    wallet: W,
    config: SubmitterConfig,
    state: SubmissionState,
}

impl<W: WalletPort> TransactionSubmitter<W> {
    pub fn new(wallet: W, config: SubmitterConfig) -> Self {
        Self {
            wallet,
            config,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Submit `increment()` through the wallet and wait for it to settle.
    ///
    /// Without a wallet, or with a submission already pending, nothing is
    /// sent and the current state is returned unchanged. Wallet errors end in
    /// [`SubmissionState::Failed`]; they are never returned to the caller.
    pub async fn submit(&mut self, wallet: Option<&WalletHandle>) -> &SubmissionState {
        let Some(handle) = wallet else {
            return &self.state;
        };
        let Some(request) = self.begin(Some(handle)) else {
            return &self.state;
        };
        let outcome = self.wallet.send_transaction(handle, &request).await;
        self.settle(outcome)
    }

    /// Guard and `Pending` transition. Returns the request to send, or `None`
    /// when no call may be issued.
    pub fn begin(&mut self, wallet: Option<&WalletHandle>) -> Option<ContractCallRequest> {
        let handle = wallet?;
        if self.state.is_pending() {
            tracing::debug!("submission already in flight; ignoring trigger");
            return None;
        }
        self.apply(SubmissionAction::Start);

        let request = increment_request(self.config.counter_address);
        tracing::info!(
            account = %handle.address,
            chain_id = handle.chain_id,
            to = %request.to,
            function = %request.function_name,
            "submitting contract call"
        );
        Some(request)
    }

    /// Resolve a pending submission with the wallet's outcome.
    pub fn settle(&mut self, outcome: Result<SendReceipt, PortError>) -> &SubmissionState {
        if !self.state.is_pending() {
            tracing::warn!(
                state = self.state.label(),
                "wallet outcome arrived with no submission pending"
            );
            return &self.state;
        }

        let action = match outcome {
            Ok(receipt) => self.resolve(receipt),
            Err(err) => {
                tracing::error!(error = %err, "contract call failed");
                SubmissionAction::Reject(SubmissionError::from(err))
            }
        };
        self.apply(action);
        &self.state
    }

    /// Clear a shown result or failure.
    pub fn dismiss(&mut self) {
        if self.state.is_pending() {
            return;
        }
        self.apply(SubmissionAction::Dismiss);
    }

    fn resolve(&self, receipt: SendReceipt) -> SubmissionAction {
        let hash = receipt
            .transaction_hash
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty());
        let Some(transaction_hash) = hash else {
            tracing::warn!("wallet resolved without a transaction hash");
            return SubmissionAction::ResolveEmpty;
        };

        let explorer_url = receipt
            .explorer_link
            .filter(|link| !link.trim().is_empty())
            .unwrap_or_else(|| self.config.explorer_tx_url(&transaction_hash));
        tracing::info!(%transaction_hash, %explorer_url, "contract call accepted");
        SubmissionAction::Resolve(SubmissionResult {
            transaction_hash,
            explorer_url,
        })
    }

    fn apply(&mut self, action: SubmissionAction) {
        match submission_transition(&self.state, action) {
            Ok(next) => self.state = next,
            Err(err) => tracing::warn!(error = %err, "submission transition rejected"),
        }
    }
}
