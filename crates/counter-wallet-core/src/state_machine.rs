use thiserror::Error;

use crate::domain::{SubmissionError, SubmissionResult, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAction {
    Start,
    Resolve(SubmissionResult),
    /// The wallet resolved without a transaction hash.
    ResolveEmpty,
    Reject(SubmissionError),
    Dismiss,
}

impl SubmissionAction {
    fn label(&self) -> &'static str {
        match self {
            SubmissionAction::Start => "Start",
            SubmissionAction::Resolve(_) => "Resolve",
            SubmissionAction::ResolveEmpty => "ResolveEmpty",
            SubmissionAction::Reject(_) => "Reject",
            SubmissionAction::Dismiss => "Dismiss",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal submission transition: {from} -> {action}")]
pub struct TransitionError {
    pub from: &'static str,
    pub action: &'static str,
}

pub fn submission_transition(
    from: &SubmissionState,
    action: SubmissionAction,
) -> Result<SubmissionState, TransitionError> {
    use SubmissionAction as A;
    use SubmissionState as S;

    match (from, action) {
        (S::Idle | S::Succeeded(_) | S::Failed(_), A::Start) => Ok(S::Pending),
        (S::Pending, A::Resolve(result)) => Ok(S::Succeeded(result)),
        (S::Pending, A::ResolveEmpty) => Ok(S::Idle),
        (S::Pending, A::Reject(err)) => Ok(S::Failed(err)),
        (S::Succeeded(_) | S::Failed(_) | S::Idle, A::Dismiss) => Ok(S::Idle),
        (from, action) => Err(TransitionError {
            from: from.label(),
            action: action.label(),
        }),
    }
}
