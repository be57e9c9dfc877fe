use std::fmt;

use alloy::json_abi::Function;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::ports::PortError;

/// A connected account as reported by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletHandle {
    pub address: Address,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCallRequest {
    pub to: Address,
    pub abi: Vec<Function>,
    pub function_name: String,
    pub args: Vec<String>,
}

/// What the wallet capability resolves with. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub transaction_hash: Option<String>,
    pub explorer_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub transaction_hash: String,
    pub explorer_url: String,
}

/// The single user-facing failure kind. Carries the textual form of whatever
/// the wallet capability rejected with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SubmissionError {}

impl From<PortError> for SubmissionError {
    fn from(err: PortError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(SubmissionResult),
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Pending => "Pending",
            SubmissionState::Succeeded(_) => "Succeeded",
            SubmissionState::Failed(_) => "Failed",
        }
    }
}
