//! Screen state for the navigation shell.

use counter_wallet_core::{SubmissionState, WalletHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Connect,
    Wallet,
}

impl Screen {
    /// The wallet screen is only reachable with a connected account.
    pub fn for_session(session: Option<&WalletHandle>) -> Self {
        match session {
            Some(_) => Screen::Wallet,
            None => Screen::Connect,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub screen: Screen,
    pub connect_error: Option<String>,
    pub last_info: Option<String>,
}

impl ShellState {
    pub fn set_connect_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.connect_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.connect_error = None;
        self.last_info = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.connect_error = None;
        self.last_info = None;
    }
}

/// What the result area of the wallet screen shows for a submission state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    Hidden,
    Spinner,
    Success { hash: &'a str, explorer_url: &'a str },
    FailureModal { message: &'a str },
}

impl<'a> ResultView<'a> {
    pub fn from_state(state: &'a SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => ResultView::Hidden,
            SubmissionState::Pending => ResultView::Spinner,
            SubmissionState::Succeeded(result) => ResultView::Success {
                hash: &result.transaction_hash,
                explorer_url: &result.explorer_url,
            },
            SubmissionState::Failed(err) => ResultView::FailureModal {
                message: &err.message,
            },
        }
    }
}

/// The trigger is disabled while a submission is in flight.
pub fn increment_enabled(state: &SubmissionState) -> bool {
    !state.is_pending()
}

#[cfg(test)]
mod tests {
    use super::{increment_enabled, ResultView, Screen, ShellState};
    use counter_wallet_core::{
        SubmissionError, SubmissionResult, SubmissionState, WalletHandle,
    };

    #[test]
    fn screen_follows_session() {
        assert_eq!(Screen::for_session(None), Screen::Connect);
        let handle = WalletHandle {
            address: alloy::primitives::Address::repeat_byte(0x11),
            chain_id: 84_532,
        };
        assert_eq!(Screen::for_session(Some(&handle)), Screen::Wallet);
    }

    #[test]
    fn setting_error_clears_info_and_vice_versa() {
        let mut state = ShellState::default();
        state.set_info("connected");
        assert_eq!(state.last_info.as_deref(), Some("connected"));
        state.set_connect_error("no wallet");
        assert_eq!(state.connect_error.as_deref(), Some("no wallet"));
        assert!(state.last_info.is_none());
        state.clear_notice();
        assert!(state.connect_error.is_none());
    }

    #[test]
    fn result_view_matches_submission_state() {
        assert_eq!(ResultView::from_state(&SubmissionState::Idle), ResultView::Hidden);
        assert_eq!(ResultView::from_state(&SubmissionState::Pending), ResultView::Spinner);

        let succeeded = SubmissionState::Succeeded(SubmissionResult {
            transaction_hash: "0xabc".to_owned(),
            explorer_url: "https://sepolia.basescan.org/tx/0xabc".to_owned(),
        });
        assert_eq!(
            ResultView::from_state(&succeeded),
            ResultView::Success {
                hash: "0xabc",
                explorer_url: "https://sepolia.basescan.org/tx/0xabc",
            }
        );

        let failed = SubmissionState::Failed(SubmissionError::new("user rejected"));
        assert_eq!(
            ResultView::from_state(&failed),
            ResultView::FailureModal {
                message: "user rejected"
            }
        );
    }

    #[test]
    fn increment_disabled_only_while_pending() {
        assert!(increment_enabled(&SubmissionState::Idle));
        assert!(!increment_enabled(&SubmissionState::Pending));
        assert!(increment_enabled(&SubmissionState::Failed(SubmissionError::new("x"))));
    }
}
