use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::matcher::KeywordMatcher;
use super::transcript::{Sender, Transcript};

/// A bot reply that has been decided but not shown yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    /// Id of the user message being answered.
    pub reply_to: u64,
    pub content: String,
}

/// One visitor's conversation with the scripted assistant.
#[derive(Clone, Debug)]
pub struct ChatSession {
    matcher: Rc<KeywordMatcher>,
    transcript: Transcript,
    awaiting: usize,
}

impl ChatSession {
    pub fn new(matcher: Rc<KeywordMatcher>, now: DateTime<Utc>) -> Self {
        Self {
            matcher,
            transcript: Transcript::with_greeting(now),
            awaiting: 0,
        }
    }

    /// Records the visitor's message and decides the answer right away. The
    /// caller shows the answer later via [`ChatSession::deliver`]. Blank input
    /// is ignored.
    pub fn submit(&mut self, input: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        let content = self.matcher.respond(input).to_string();
        let reply_to = self.transcript.append(Sender::User, input, now).id;
        self.awaiting += 1;
        Some(PendingReply { reply_to, content })
    }

    pub fn deliver(&mut self, reply: PendingReply, now: DateTime<Utc>) {
        self.awaiting = self.awaiting.saturating_sub(1);
        self.transcript.append(Sender::Bot, reply.content, now);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting > 0
    }
}
