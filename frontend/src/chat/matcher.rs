use serde::{Deserialize, Serialize};

use crate::error::ContentError;

pub const FALLBACK_RESPONSE: &str = "I'm not sure I understand. Could you please rephrase your question or ask about our license selling process, payment methods, or valuation?";

pub const DEFAULT_RESPONSES: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you today?"),
    ("hi", "Hi there! How can I assist you with selling your software licenses?"),
    ("how", "To sell your licenses with SoftSell, simply upload your license details, get a valuation, and then get paid within 48 hours!"),
    ("sell", "You can easily sell your software licenses by uploading the details through our platform. We'll provide an instant valuation based on market conditions."),
    ("payment", "We offer multiple payment methods including bank transfer, PayPal, and cryptocurrency. Payments are typically processed within 48 hours of accepting our offer."),
    ("price", "Our pricing is transparent and competitive. We analyze current market trends to offer you the best possible value for your software licenses."),
    ("license", "We accept most major software licenses including Microsoft, Adobe, Oracle, IBM, SAP, and many more. If you're unsure, just ask us!"),
    ("support", "Our support team is available Monday to Friday, 9 AM to 6 PM EST. You can reach us via chat, email, or phone."),
    ("secure", "Security is our top priority. We use bank-level encryption to protect your data and ensure all transactions are completely secure."),
    ("valuation", "Our AI-powered system analyzes current market conditions and historical data to provide the most accurate valuation for your software licenses."),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseRule {
    pub keyword: String,
    pub response: String,
}

/// Ordered keyword table. Order matters: the first keyword contained in a
/// message decides the reply, regardless of where it sits in the message.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseTable {
    rules: Vec<ResponseRule>,
}

impl ResponseTable {
    pub fn new<K, R>(rules: impl IntoIterator<Item = (K, R)>) -> Self
    where
        K: Into<String>,
        R: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(keyword, response)| ResponseRule {
                keyword: keyword.into().to_lowercase(),
                response: response.into(),
            })
            .collect();
        Self { rules }
    }

    /// Loads a table from a JSON array of `{"keyword", "response"}` objects,
    /// keeping the array order.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let rules: Vec<ResponseRule> = serde_json::from_str(json)?;
        if let Some(index) = rules.iter().position(|rule| rule.keyword.trim().is_empty()) {
            return Err(ContentError::EmptyKeyword(index));
        }
        Ok(Self::new(
            rules.into_iter().map(|rule| (rule.keyword, rule.response)),
        ))
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSES.iter().copied())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeywordMatcher {
    table: ResponseTable,
    fallback: String,
}

impl KeywordMatcher {
    pub fn new(table: ResponseTable) -> Self {
        Self {
            table,
            fallback: FALLBACK_RESPONSE.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// First rule whose keyword occurs in the lowercased input.
    pub fn matched_rule(&self, input: &str) -> Option<&ResponseRule> {
        let normalized = input.to_lowercase();
        self.table
            .rules
            .iter()
            .find(|rule| normalized.contains(rule.keyword.as_str()))
    }

    pub fn respond(&self, input: &str) -> &str {
        self.matched_rule(input)
            .map_or(self.fallback.as_str(), |rule| rule.response.as_str())
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(ResponseTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_for(keyword: &str) -> &'static str {
        DEFAULT_RESPONSES
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, r)| *r)
            .expect("keyword in default table")
    }

    #[test]
    fn test_earliest_table_keyword_wins() {
        let matcher = KeywordMatcher::default();
        assert_eq!(matcher.respond("Hello, how do I sell?"), response_for("hello"));
        // "sell" appears before "how" in the message, "how" is earlier in the table
        assert_eq!(matcher.respond("sell? how?"), response_for("how"));
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let matcher = KeywordMatcher::default();
        assert_eq!(matcher.respond("xyzzy"), FALLBACK_RESPONSE);
        assert_eq!(matcher.respond(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matcher = KeywordMatcher::default();
        assert_eq!(matcher.respond("PAYMENT options"), response_for("payment"));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let matcher = KeywordMatcher::default();
        // "shipping" contains "hi", which outranks "price"
        assert_eq!(matcher.respond("price of shipping"), response_for("hi"));
        assert_eq!(matcher.respond("Is it SECURE?"), response_for("secure"));
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let matcher = KeywordMatcher::new(ResponseTable::new([("e-mail", "Write to us.")]));
        assert_eq!(matcher.respond("Your E-Mail?"), "Write to us.");
        assert_eq!(matcher.respond("your email?"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_same_input_same_answer() {
        let matcher = KeywordMatcher::default();
        let first = matcher.respond("what about valuation").to_string();
        for _ in 0..10 {
            assert_eq!(matcher.respond("what about valuation"), first);
        }
    }

    #[test]
    fn test_injected_table_and_fallback() {
        let matcher = KeywordMatcher::new(ResponseTable::new([("Refund", "No refunds.")]))
            .with_fallback("Ask about refunds.");
        assert_eq!(matcher.table().rules()[0].keyword, "refund");
        assert_eq!(matcher.respond("refund please"), "No refunds.");
        assert_eq!(matcher.respond("hello"), "Ask about refunds.");
    }

    #[test]
    fn test_table_from_json_keeps_order() {
        let json = r#"[
            {"keyword": "zeta", "response": "last letter"},
            {"keyword": "alpha", "response": "first letter"}
        ]"#;
        let table = ResponseTable::from_json(json).expect("valid table");
        assert_eq!(table.len(), 2);
        let matcher = KeywordMatcher::new(table);
        assert_eq!(matcher.respond("alpha and zeta"), "last letter");
    }

    #[test]
    fn test_table_from_json_rejects_bad_input() {
        assert!(matches!(
            ResponseTable::from_json("{\"hello\": \"hi\"}"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            ResponseTable::from_json(r#"[{"keyword": " ", "response": "x"}]"#),
            Err(ContentError::EmptyKeyword(0))
        ));
    }

    #[test]
    fn test_default_table_order() {
        let table = ResponseTable::default();
        let keywords: Vec<&str> = table
            .rules()
            .iter()
            .map(|rule| rule.keyword.as_str())
            .collect();
        assert_eq!(
            keywords,
            ["hello", "hi", "how", "sell", "payment", "price", "license", "support", "secure", "valuation"]
        );
    }
}
