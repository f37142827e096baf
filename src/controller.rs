//! Widget controller
//!
//! Single owner of the selector, the session, the transcript and the input
//! draft. Front ends feed it typed `UiEvent`s and read views back.

use crate::client::{AssistantClient, ChatReply, ChatRequest, ClientError};
use crate::render::{ScrollRequest, Transcript};
use crate::selector::{CardSelector, PanelChange, SelectorAction};
use crate::session::{ChatSession, SessionEvent, SubmitOutcome};
use crate::state_machine::TransitionError;
use tokio::sync::broadcast::{self, error::TryRecvError};

pub const SUBMIT_LABEL: &str = "Find best card";

/// User interactions the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The selected-cards area was clicked
    SelectorClicked,
    /// Text typed into the card search box
    SearchInput(String),
    /// A card row or a tag's remove button
    Selector(SelectorAction),
    /// Click anywhere outside the selector
    OutsideClick,
    /// Text typed into the message input
    InputChanged(String),
}

/// What the front end needs to redraw after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Nothing,
    Panel(PanelChange),
    /// Selection tags and card list
    Selector,
    /// Card list only
    CardList,
}

/// State of the send button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub loading: bool,
    pub label: &'static str,
}

pub struct WidgetController {
    selector: CardSelector,
    session: ChatSession,
    transcript: Transcript,
    draft: String,
    events_rx: broadcast::Receiver<SessionEvent>,
}

impl Default for WidgetController {
    fn default() -> Self {
        Self::new(CardSelector::new(), Transcript::default())
    }
}

impl WidgetController {
    pub fn new(selector: CardSelector, transcript: Transcript) -> Self {
        let session = ChatSession::new();
        let events_rx = session.subscribe();
        Self {
            selector,
            session,
            transcript,
            draft: String::new(),
            events_rx,
        }
    }

    pub fn selector(&self) -> &CardSelector {
        &self.selector
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn submit_control(&self) -> SubmitControl {
        let pending = self.session.is_pending();
        SubmitControl {
            disabled: pending,
            loading: pending,
            label: SUBMIT_LABEL,
        }
    }

    /// Handle a selector or input interaction. Allowed while a send is
    /// outstanding.
    pub fn handle(&mut self, event: UiEvent) -> Refresh {
        match event {
            UiEvent::SelectorClicked => Refresh::Panel(self.selector.toggle_panel()),
            UiEvent::OutsideClick => match self.selector.interaction_outside() {
                PanelChange::Unchanged => Refresh::Nothing,
                change => Refresh::Panel(change),
            },
            UiEvent::SearchInput(query) => {
                self.selector.set_query(query);
                Refresh::CardList
            }
            UiEvent::Selector(action) => {
                if self.selector.apply(&action) {
                    Refresh::Selector
                } else {
                    Refresh::Nothing
                }
            }
            UiEvent::InputChanged(text) => {
                self.draft = text;
                Refresh::Nothing
            }
        }
    }

    /// Submit the current draft. On acceptance the draft is cleared and the
    /// returned request must be sent, then passed back to `finish`.
    pub fn submit(&mut self) -> Result<(ChatRequest, Vec<ScrollRequest>), TransitionError> {
        let request = self
            .session
            .begin_submit(&self.draft, self.selector.selection())?;
        self.draft.clear();
        Ok((request, self.sync_transcript()))
    }

    /// Record the reply (or failure) of the outstanding request
    pub fn finish(
        &mut self,
        result: Result<ChatReply, ClientError>,
    ) -> Result<(SubmitOutcome, Vec<ScrollRequest>), TransitionError> {
        let outcome = self.session.complete(result)?;
        Ok((outcome, self.sync_transcript()))
    }

    /// Submit the draft and wait for the reply
    pub async fn send<C>(&mut self, client: &C) -> Result<SubmitOutcome, TransitionError>
    where
        C: AssistantClient + ?Sized,
    {
        let (request, _) = self.submit()?;
        let result = client.chat(&request).await;
        self.finish(result).map(|(outcome, _)| outcome)
    }

    fn sync_transcript(&mut self) -> Vec<ScrollRequest> {
        let mut scrolls = Vec::new();
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => scrolls.extend(self.transcript.apply(&event)),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Transcript fell behind session events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        scrolls
    }
}
