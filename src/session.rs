//! Conversation session
//!
//! Owns the submission state and the turn history, executes effects produced
//! by the state machine, and publishes `SessionEvent`s for the renderer.
//!
//! A submission is split at its suspend point: `begin_submit` validates and
//! returns the request to send, `complete` consumes its result. Callers that
//! do not need to interleave other work can use `submit`.

use crate::client::{AssistantClient, ChatReply, ChatRequest, ClientError};
use crate::selector::SelectionSet;
use crate::state_machine::{transition, Effect, Event, SessionState, Turn, TransitionError};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notifications for whatever displays the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    WelcomeCleared,
    TurnAppended(Turn),
    PendingChanged(bool),
}

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

pub struct ChatSession {
    state: SessionState,
    turns: Vec<Turn>,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: SessionState::default(),
            turns: Vec::new(),
            events_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.state.session_id.as_deref()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Accept a submission and return the request to send.
    ///
    /// The selection is copied now; later selector changes do not affect
    /// this request.
    pub fn begin_submit(
        &mut self,
        text: &str,
        selection: &SelectionSet,
    ) -> Result<ChatRequest, TransitionError> {
        let event = Event::UserSubmit {
            text: text.to_string(),
            cards: selection.to_request_cards(),
        };

        let request = self.process(event)?;
        request.ok_or_else(|| {
            TransitionError::InvalidTransition("submission produced no request".to_string())
        })
    }

    /// Record the result of the request issued by `begin_submit`
    pub fn complete(
        &mut self,
        result: Result<ChatReply, ClientError>,
    ) -> Result<SubmitOutcome, TransitionError> {
        let (event, outcome) = match result {
            Ok(reply) => (Event::ReplyReceived { reply }, SubmitOutcome::Succeeded),
            Err(error) => (Event::RequestFailed { error }, SubmitOutcome::Failed),
        };
        self.process(event)?;
        Ok(outcome)
    }

    /// Submit and wait for the reply
    pub async fn submit<C>(
        &mut self,
        client: &C,
        text: &str,
        selection: &SelectionSet,
    ) -> Result<SubmitOutcome, TransitionError>
    where
        C: AssistantClient + ?Sized,
    {
        let request = self.begin_submit(text, selection)?;
        let result = client.chat(&request).await;
        self.complete(result)
    }

    /// Run one transition and its effects. Returns the request to send, if any.
    fn process(&mut self, event: Event) -> Result<Option<ChatRequest>, TransitionError> {
        let result = match transition(&self.state, event) {
            Ok(r) => r,
            Err(e @ TransitionError::EmptyMessage) => {
                tracing::debug!("Rejected empty submission");
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected session event");
                return Err(e);
            }
        };

        self.state = result.new_state;

        let mut request = None;
        for effect in result.effects {
            if let Some(r) = self.execute_effect(effect) {
                request = Some(r);
            }
        }
        Ok(request)
    }

    fn execute_effect(&mut self, effect: Effect) -> Option<ChatRequest> {
        match effect {
            Effect::ClearWelcome => {
                self.publish(SessionEvent::WelcomeCleared);
                None
            }
            Effect::AppendTurn(turn) => {
                self.turns.push(turn.clone());
                self.publish(SessionEvent::TurnAppended(turn));
                None
            }
            Effect::NotifyPending(pending) => {
                self.publish(SessionEvent::PendingChanged(pending));
                None
            }
            Effect::SendRequest(request) => {
                tracing::debug!(
                    session_id = ?request.session_id,
                    cards = request.cards.as_ref().map_or(0, Vec::len),
                    "Sending chat request"
                );
                Some(request)
            }
            Effect::LogFailure { kind, detail } => {
                tracing::error!(kind = kind.as_str(), error = %detail, "Chat request failed");
                None
            }
        }
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }
}
