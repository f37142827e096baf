//! Events that drive the session

use crate::client::{ChatReply, ClientError};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// User pressed send. `cards` is a snapshot of the selection taken at
    /// this moment, `None` when nothing is selected.
    UserSubmit {
        text: String,
        cards: Option<Vec<String>>,
    },

    /// The assistant answered
    ReplyReceived { reply: ChatReply },

    /// Transport or protocol failure
    RequestFailed { error: ClientError },
}
