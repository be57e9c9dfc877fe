//! Bridge between the egui shell and the wallet workspace crates.
//!
//! Wallet calls run on a tokio runtime owned by the bridge. Each call writes
//! its outcome into a single-slot mailbox that the UI drains once per frame.

use std::future::Future;
use std::sync::{Arc, Mutex};

use counter_wallet_adapters::{AdapterConfig, Eip1193Adapter};
use counter_wallet_core::{
    PortError, SendReceipt, SessionPort, SubmissionState, SubmitterConfig, TransactionSubmitter,
    WalletHandle, WalletPort,
};

type Wallet = Arc<Eip1193Adapter>;
type Slot<T> = Arc<Mutex<Option<Result<T, PortError>>>>;

/// Result of draining the connect mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(WalletHandle),
    Failed(String),
}

pub struct WalletBridge {
    runtime: tokio::runtime::Runtime,
    wallet: Wallet,
    submitter: TransactionSubmitter<Wallet>,
    connect_result: Slot<WalletHandle>,
    submit_result: Slot<SendReceipt>,
    connecting: bool,
}

impl WalletBridge {
    pub fn new(config: AdapterConfig) -> eyre::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let submitter_config = config.submitter.clone();
        let wallet = Arc::new(Eip1193Adapter::with_config(config));
        Ok(Self {
            runtime,
            submitter: TransactionSubmitter::new(Arc::clone(&wallet), submitter_config),
            wallet,
            connect_result: Arc::new(Mutex::new(None)),
            submit_result: Arc::new(Mutex::new(None)),
            connecting: false,
        })
    }

    pub fn session(&self) -> Option<WalletHandle> {
        self.wallet.current()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.submitter.state()
    }

    pub fn submitter_config(&self) -> &SubmitterConfig {
        self.submitter.config()
    }

    pub fn wallet_mode(&self) -> &'static str {
        self.wallet.mode_name()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn trigger_connect(&mut self, ctx: &egui::Context) {
        if self.connecting {
            return;
        }
        self.connecting = true;
        let wallet = Arc::clone(&self.wallet);
        self.spawn(Arc::clone(&self.connect_result), ctx, async move {
            wallet.connect().await
        });
    }

    /// Start an `increment()` submission for the connected wallet. Does
    /// nothing without a session or while one is already pending.
    pub fn trigger_submit(&mut self, ctx: &egui::Context) {
        let Some(handle) = self.session() else {
            return;
        };
        let Some(request) = self.submitter.begin(Some(&handle)) else {
            return;
        };
        let wallet = Arc::clone(self.submitter.wallet());
        self.spawn(Arc::clone(&self.submit_result), ctx, async move {
            wallet.send_transaction(&handle, &request).await
        });
    }

    /// Apply finished wallet calls. Returns the connect outcome if one
    /// arrived this frame.
    pub fn poll(&mut self) -> Option<ConnectOutcome> {
        if let Some(outcome) = take_slot(&self.submit_result) {
            self.submitter.settle(outcome);
        }

        let outcome = take_slot(&self.connect_result)?;
        self.connecting = false;
        Some(match outcome {
            Ok(handle) => ConnectOutcome::Connected(handle),
            Err(e) => {
                tracing::warn!(error = %e, "wallet connect failed");
                ConnectOutcome::Failed(e.to_string())
            }
        })
    }

    pub fn dismiss(&mut self) {
        self.submitter.dismiss();
    }

    /// Drop the session and clear any shown result. Refused while a
    /// submission is pending so its outcome cannot outlive the session.
    pub fn disconnect(&mut self) -> bool {
        if self.submitter.state().is_pending() {
            tracing::debug!("disconnect ignored while a submission is pending");
            return false;
        }
        self.wallet.disconnect();
        self.submitter.dismiss();
        true
    }

    fn spawn<T, F>(&self, slot: Slot<T>, ctx: &egui::Context, fut: F)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, PortError>> + Send + 'static,
    {
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = fut.await;
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(outcome);
            }
            ctx.request_repaint();
        });
    }
}

fn take_slot<T>(slot: &Slot<T>) -> Option<Result<T, PortError>> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}
