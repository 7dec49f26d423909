//! Scripted assistant: a keyword table lookup feeding an append-only
//! transcript.

pub mod matcher;
pub mod pending;
pub mod session;
pub mod transcript;

pub use matcher::{KeywordMatcher, ResponseTable, FALLBACK_RESPONSE};
pub use pending::PendingReplies;
pub use session::{ChatSession, PendingReply};
pub use transcript::{MessageEntry, Sender, Transcript};
