use counter_wallet_core::{
    submission_transition, SubmissionAction, SubmissionError, SubmissionResult, SubmissionState,
};

fn sample_result() -> SubmissionResult {
    SubmissionResult {
        transaction_hash: "0xabc".to_owned(),
        explorer_url: "https://sepolia.basescan.org/tx/0xabc".to_owned(),
    }
}

#[test]
fn happy_path_transitions() {
    let s1 = submission_transition(&SubmissionState::Idle, SubmissionAction::Start)
        .expect("idle -> pending");
    assert_eq!(s1, SubmissionState::Pending);
    let s2 = submission_transition(&s1, SubmissionAction::Resolve(sample_result()))
        .expect("pending -> succeeded");
    assert_eq!(s2, SubmissionState::Succeeded(sample_result()));
    let s3 = submission_transition(&s2, SubmissionAction::Dismiss).expect("succeeded -> idle");
    assert_eq!(s3, SubmissionState::Idle);
}

#[test]
fn rejection_path_transitions() {
    let err = SubmissionError::new("execution reverted");
    let s1 = submission_transition(&SubmissionState::Pending, SubmissionAction::Reject(err.clone()))
        .expect("pending -> failed");
    assert_eq!(s1, SubmissionState::Failed(err));
    let s2 = submission_transition(&s1, SubmissionAction::Start).expect("failed -> pending");
    assert_eq!(s2, SubmissionState::Pending);
}

#[test]
fn empty_resolution_returns_to_idle() {
    let s = submission_transition(&SubmissionState::Pending, SubmissionAction::ResolveEmpty)
        .expect("pending -> idle");
    assert_eq!(s, SubmissionState::Idle);
}

#[test]
fn start_while_pending_is_rejected() {
    let err = submission_transition(&SubmissionState::Pending, SubmissionAction::Start)
        .expect_err("must fail");
    assert!(err
        .to_string()
        .contains("illegal submission transition: Pending -> Start"));
}

#[test]
fn dismiss_while_pending_is_rejected() {
    let err = submission_transition(&SubmissionState::Pending, SubmissionAction::Dismiss)
        .expect_err("must fail");
    assert!(err.to_string().contains("illegal submission transition"));
}

#[test]
fn resolve_without_pending_is_rejected() {
    let err = submission_transition(
        &SubmissionState::Idle,
        SubmissionAction::Resolve(sample_result()),
    )
    .expect_err("must fail");
    assert_eq!(err.from, "Idle");
    assert_eq!(err.action, "Resolve");
}
