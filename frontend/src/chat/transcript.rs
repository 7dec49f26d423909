use chrono::{DateTime, Utc};

pub const GREETING: &str = "Hello! I'm the SoftSell assistant. How can I help you today?";
pub const GREETING_HINT: &str = "You can ask me questions about selling your software licenses, our process, payment methods, or anything else you'd like to know!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Append-only chat log. Ids come from a per-transcript sequence and
/// timestamps never go backwards, so the log stays ordered by both.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    entries: Vec<MessageEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Transcript seeded with the two welcome messages.
    pub fn with_greeting(now: DateTime<Utc>) -> Self {
        let mut transcript = Self::new();
        transcript.append(Sender::Bot, GREETING, now);
        transcript.append(Sender::Bot, GREETING_HINT, now);
        transcript
    }

    pub fn append(
        &mut self,
        sender: Sender,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> &MessageEntry {
        // Clock adjustments must not reorder the log.
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > timestamp => last.timestamp,
            _ => timestamp,
        };
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(MessageEntry {
            id,
            content: content.into(),
            sender,
            timestamp,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MessageEntry> {
        self.entries.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn test_greeting_seeds_two_bot_messages() {
        let transcript = Transcript::with_greeting(at(0));
        assert_eq!(transcript.len(), 2);
        assert!(transcript.entries().iter().all(|e| e.sender == Sender::Bot));
        assert_eq!(transcript.entries()[0].content, GREETING);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.append(Sender::User, format!("message {}", i), at(i));
        }
        let ids: Vec<u64> = transcript.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_earlier_timestamp_is_clamped() {
        let mut transcript = Transcript::new();
        transcript.append(Sender::User, "first", at(10));
        let entry = transcript.append(Sender::Bot, "second", at(10) - Duration::seconds(3));
        assert_eq!(entry.timestamp, at(10));
    }

    #[test]
    fn test_append_leaves_existing_entries_untouched() {
        let mut transcript = Transcript::with_greeting(at(0));
        let before = transcript.entries().to_vec();
        transcript.append(Sender::User, "hi", at(1));
        assert_eq!(&transcript.entries()[..2], before.as_slice());
        assert_eq!(transcript.last().map(|e| e.content.as_str()), Some("hi"));
    }
}
