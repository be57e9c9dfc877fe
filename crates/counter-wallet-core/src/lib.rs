pub mod config;
pub mod domain;
pub mod ports;
pub mod state_machine;
pub mod submitter;

pub use config::{chain_name_for_id, explorer_base_url, SubmitterConfig};
pub use domain::{
    ContractCallRequest, SendReceipt, SubmissionError, SubmissionResult, SubmissionState,
    WalletHandle,
};
pub use ports::{PortError, SessionPort, WalletPort};
pub use state_machine::{submission_transition, SubmissionAction, TransitionError};
pub use submitter::{increment_request, TransactionSubmitter};
