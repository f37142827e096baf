//! Pure state transition function

use super::{Effect, Event, Phase, SessionState};
use crate::client::ChatRequest;
use thiserror::Error;

/// Shown in place of any transport or protocol failure
pub const ERROR_TURN_TEXT: &str = "Oops! Something went wrong. Please try again later.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Please enter a product name or question.")]
    EmptyMessage,
    #[error("A message is already being sent, wait for the reply")]
    SessionBusy,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
pub fn transition(state: &SessionState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state.phase, event) {
        // Idle + UserSubmit -> Sending
        (Phase::Idle, Event::UserSubmit { text, cards }) => {
            let message = text.trim();
            if message.is_empty() {
                return Err(TransitionError::EmptyMessage);
            }

            let request = ChatRequest {
                message: message.to_string(),
                cards,
                session_id: state.session_id.clone(),
            };

            let clear_welcome = (!state.welcome_cleared).then_some(Effect::ClearWelcome);

            Ok(TransitionResult::new(SessionState {
                phase: Phase::Sending,
                session_id: state.session_id.clone(),
                welcome_cleared: true,
            })
            .with_effects(clear_welcome)
            .with_effect(Effect::append_user(message))
            .with_effect(Effect::NotifyPending(true))
            .with_effect(Effect::SendRequest(request)))
        }

        // Only one request in flight at a time
        (Phase::Sending, Event::UserSubmit { .. }) => Err(TransitionError::SessionBusy),

        // Sending + ReplyReceived -> Idle
        (Phase::Sending, Event::ReplyReceived { reply }) => Ok(TransitionResult::new(SessionState {
            phase: Phase::Idle,
            session_id: Some(reply.session_id),
            welcome_cleared: state.welcome_cleared,
        })
        .with_effect(Effect::append_agent(reply.response))
        .with_effect(Effect::NotifyPending(false))),

        // Sending + RequestFailed -> Idle, the user turn stays
        (Phase::Sending, Event::RequestFailed { error }) => Ok(TransitionResult::new(SessionState {
            phase: Phase::Idle,
            ..state.clone()
        })
        .with_effect(Effect::LogFailure {
            kind: error.kind,
            detail: error.message,
        })
        .with_effect(Effect::append_error(ERROR_TURN_TEXT))
        .with_effect(Effect::NotifyPending(false))),

        (Phase::Idle, Event::ReplyReceived { .. } | Event::RequestFailed { .. }) => Err(
            TransitionError::InvalidTransition("completion received with no request in flight".to_string()),
        ),
    }
}
