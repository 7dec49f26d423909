use std::rc::Rc;

use chrono::{Duration, TimeZone, Utc};
use frontend::chat::{ChatSession, KeywordMatcher, ResponseTable, Sender, FALLBACK_RESPONSE};

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_each_exchange_adds_two_entries_in_order() {
    let mut session = ChatSession::new(Rc::new(KeywordMatcher::default()), start());
    let questions = ["Hi there", "What payment options?", "Is it secure?", "banana"];

    for (n, question) in questions.iter().enumerate() {
        let before: Vec<_> = session.transcript().entries().to_vec();
        let at = start() + Duration::seconds(n as i64 * 10);

        let reply = session.submit(question, at).expect("non-blank input gets a reply");
        assert!(session.is_awaiting_reply());
        session.deliver(reply, at + Duration::seconds(1));
        assert!(!session.is_awaiting_reply());

        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 2 * (n + 1) + 2);
        assert_eq!(&entries[..before.len()], &before[..]);

        let user = &entries[entries.len() - 2];
        let bot = &entries[entries.len() - 1];
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.content, *question);
        assert_eq!(bot.sender, Sender::Bot);
    }

    let entries = session.transcript().entries();
    assert!(entries.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
    assert!(entries.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(entries.last().map(|e| e.content.as_str()), Some(FALLBACK_RESPONSE));
}

#[test]
fn test_overlapping_replies_keep_user_messages_first() {
    let mut session = ChatSession::new(Rc::new(KeywordMatcher::default()), start());
    let first = session.submit("hello", start()).expect("reply");
    let second = session.submit("price?", start()).expect("reply");
    assert_eq!(session.transcript().len(), 4);

    session.deliver(first, start());
    assert!(session.is_awaiting_reply());
    session.deliver(second, start());
    assert!(!session.is_awaiting_reply());

    let senders: Vec<_> = session.transcript().entries().iter().map(|e| e.sender).collect();
    assert_eq!(
        senders,
        [Sender::Bot, Sender::Bot, Sender::User, Sender::User, Sender::Bot, Sender::Bot]
    );
}

#[test]
fn test_custom_table_from_json() {
    let table = ResponseTable::from_json(
        r#"[{"keyword": "Refund", "response": "Refunds take 5 days."}]"#,
    )
    .expect("valid table");
    let matcher = KeywordMatcher::new(table).with_fallback("Ask about refunds.");
    let mut session = ChatSession::new(Rc::new(matcher), start());

    let reply = session.submit("How do REFUNDS work?", start()).expect("reply");
    assert_eq!(reply.content, "Refunds take 5 days.");
    let reply = session.submit("hello", start()).expect("reply");
    assert_eq!(reply.content, "Ask about refunds.");
}

#[test]
fn test_whitespace_only_input_leaves_transcript_alone() {
    let mut session = ChatSession::new(Rc::new(KeywordMatcher::default()), start());
    assert!(session.submit(" \n\t ", start()).is_none());
    assert_eq!(session.transcript().len(), 2);
    assert!(!session.is_awaiting_reply());
}
