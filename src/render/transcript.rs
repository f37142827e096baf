//! Displayed transcript

use super::RenderedBlock;
use crate::session::SessionEvent;
use crate::state_machine::Turn;

pub const WELCOME_TEXT: &str =
    "Tell me what you are planning to buy, pick the cards you own, and I'll find the best way to pay.";

/// Bring the trailing edge of the transcript into view, animated where the
/// host supports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Index of the block to reveal
    pub block: usize,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    welcome: Option<String>,
    blocks: Vec<RenderedBlock>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(WELCOME_TEXT)
    }
}

impl Transcript {
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            welcome: Some(welcome.into()),
            blocks: Vec::new(),
        }
    }

    pub fn welcome(&self) -> Option<&str> {
        self.welcome.as_deref()
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Remove the welcome placeholder. Returns whether one was present.
    pub fn clear_welcome(&mut self) -> bool {
        self.welcome.take().is_some()
    }

    pub fn append(&mut self, turn: &Turn) -> ScrollRequest {
        self.blocks.push(RenderedBlock::from_turn(turn));
        ScrollRequest {
            block: self.blocks.len() - 1,
        }
    }

    /// Apply a session notification. Returns a scroll request when a block
    /// was added.
    pub fn apply(&mut self, event: &SessionEvent) -> Option<ScrollRequest> {
        match event {
            SessionEvent::WelcomeCleared => {
                self.clear_welcome();
                None
            }
            SessionEvent::TurnAppended(turn) => Some(self.append(turn)),
            SessionEvent::PendingChanged(_) => None,
        }
    }
}
