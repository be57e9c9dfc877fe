use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContractCallRequest, SendReceipt, WalletHandle};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("no wallet connected")]
    NotConnected,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rejected by wallet: {0}")]
    Rejected(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("policy error: {0}")]
    Policy(String),
}

/// The external wallet capability. Signing, broadcasting and confirmation
/// all happen behind this call.
#[async_trait]
pub trait WalletPort: Send + Sync {
    async fn send_transaction(
        &self,
        wallet: &WalletHandle,
        request: &ContractCallRequest,
    ) -> Result<SendReceipt, PortError>;
}

/// Supplies the currently connected wallet, if any.
#[async_trait]
pub trait SessionPort: Send + Sync {
    async fn connect(&self) -> Result<WalletHandle, PortError>;
    fn current(&self) -> Option<WalletHandle>;
    fn disconnect(&self);
}

#[async_trait]
impl<T: WalletPort + ?Sized> WalletPort for std::sync::Arc<T> {
    async fn send_transaction(
        &self,
        wallet: &WalletHandle,
        request: &ContractCallRequest,
    ) -> Result<SendReceipt, PortError> {
        (**self).send_transaction(wallet, request).await
    }
}
