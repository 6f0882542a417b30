//! Assistant transcript
//!
//! The assistant is scripted: it greets, and answers every message with the
//! same configured reply after a delay. The caller owns the timer and calls
//! [`Transcript::deliver_reply`] when it fires.

use serde::Serialize;

use crate::config::AssistantConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    reply: String,
    /// Replies owed for messages sent but not yet answered
    owed: usize,
    open: bool,
}

impl Transcript {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: config.greeting.clone(),
            }],
            reply: config.reply.clone(),
            owed: 0,
            open: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Append a user message. Blank input is ignored and returns false.
    pub fn send(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: input.to_string(),
        });
        self.owed += 1;
        tracing::debug!(owed = self.owed, "assistant message queued");
        true
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.owed > 0
    }

    /// Append one owed reply. Returns false if nothing was owed.
    pub fn deliver_reply(&mut self) -> bool {
        if self.owed == 0 {
            return false;
        }
        self.owed -= 1;
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: self.reply.clone(),
        });
        true
    }
}
