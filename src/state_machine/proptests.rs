//! Property-based tests for the state machine
//!
//! Events are fed through `transition` and effects applied to a small model
//! of the history so invariants can be checked across arbitrary sequences.

use super::*;
use crate::client::{ChatReply, ChatRequest, ClientError};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Default)]
struct Model {
    state: SessionState,
    turns: Vec<Turn>,
    requests: Vec<ChatRequest>,
    welcome_clears: usize,
}

impl Model {
    fn step(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = transition(&self.state, event)?;
        self.state = result.new_state;
        for effect in result.effects {
            match effect {
                Effect::ClearWelcome => self.welcome_clears += 1,
                Effect::AppendTurn(turn) => self.turns.push(turn),
                Effect::SendRequest(request) => self.requests.push(request),
                Effect::NotifyPending(_) | Effect::LogFailure { .. } => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z ]{0,20}",
        1 => Just(String::new()),
        1 => "[ \t\n]{1,4}",
    ]
}

fn arb_cards() -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::of(proptest::collection::vec("[A-Z][a-z]{2,8}", 1..4))
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (arb_text(), arb_cards()).prop_map(|(text, cards)| Event::UserSubmit { text, cards }),
        ("s[0-9]{1,3}", "[a-zA-Z*# ]{0,30}").prop_map(|(session_id, response)| {
            Event::ReplyReceived {
                reply: ChatReply {
                    session_id,
                    response,
                },
            }
        }),
        "[a-z ]{1,20}".prop_map(|message| Event::RequestFailed {
            error: ClientError::network(message),
        }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn accepted_submit_appends_trimmed_user_turn_before_request(
        text in "[ ]{0,3}[a-zA-Z]{1,10}[ ]{0,3}",
        cards in arb_cards(),
    ) {
        let result = transition(
            &SessionState::default(),
            Event::UserSubmit { text: text.clone(), cards: cards.clone() },
        ).unwrap();

        let user_pos = result.effects.iter().position(|e| matches!(e, Effect::AppendTurn(t) if t.role == Role::User));
        let send_pos = result.effects.iter().position(|e| matches!(e, Effect::SendRequest(_)));
        prop_assert!(user_pos.unwrap() < send_pos.unwrap());

        let user_turns: Vec<_> = result.effects.iter().filter(|e| matches!(e, Effect::AppendTurn(_))).collect();
        prop_assert_eq!(user_turns.len(), 1);
        prop_assert_eq!(user_turns[0], &Effect::append_user(text.trim()));

        let Some(Effect::SendRequest(request)) = result.effects.last() else {
            panic!("expected SendRequest");
        };
        prop_assert_eq!(&request.message, text.trim());
        prop_assert_eq!(&request.cards, &cards);
    }

    #[test]
    fn blank_text_never_changes_anything(text in "[ \t\n]{0,6}", session in proptest::option::of("s[0-9]")) {
        let state = SessionState { phase: Phase::Idle, session_id: session, welcome_cleared: false };
        let result = transition(&state, Event::UserSubmit { text, cards: None });
        prop_assert_eq!(result.unwrap_err(), TransitionError::EmptyMessage);
    }

    #[test]
    fn invariants_hold_over_event_sequences(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut model = Model::default();
        let mut last_session: Option<String> = None;

        for event in events {
            let was_pending = model.state.is_pending();
            let turns_before = model.turns.len();
            let requests_before = model.requests.len();
            let is_failure = matches!(event, Event::RequestFailed { .. });

            if model.step(event).is_err() {
                // Rejected events have no side effects
                prop_assert_eq!(model.turns.len(), turns_before);
                prop_assert_eq!(model.requests.len(), requests_before);
                continue;
            }

            if model.requests.len() > requests_before {
                // At most one request in flight
                prop_assert!(!was_pending);
                prop_assert!(model.state.is_pending());
                // Session id from the last reply is echoed
                prop_assert_eq!(&model.requests.last().unwrap().session_id, &last_session);
            }

            if was_pending && !model.state.is_pending() {
                last_session.clone_from(&model.state.session_id);
                if is_failure {
                    // Exactly one error turn, the user turn before it is kept
                    prop_assert_eq!(model.turns.len(), turns_before + 1);
                    prop_assert_eq!(model.turns.last().unwrap(), &Turn::error(ERROR_TURN_TEXT));
                    prop_assert_eq!(model.turns[turns_before - 1].role, Role::User);
                }
            }
        }

        prop_assert!(model.welcome_clears <= 1);
        prop_assert_eq!(model.welcome_clears, usize::from(!model.requests.is_empty()));
    }
}
