use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assistant::responses::{CHAT_FALLBACK, CHAT_REPLIES, CHAT_SUGGESTIONS};

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<String>,
}

/// First keyword group found in the lower-cased message picks the reply.
pub fn reply_to(message: &str, now: DateTime<Utc>) -> ChatReply {
    let lowered = message.to_lowercase();
    let response = CHAT_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(CHAT_FALLBACK);

    ChatReply {
        response: response.to_string(),
        timestamp: now,
        suggestions: CHAT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let reply = reply_to("How do I BEGIN?", Utc::now());
        assert!(reply.response.starts_with("Great!"));
    }

    #[test]
    fn test_earlier_group_wins() {
        // "job" (career group) is checked before "hard"
        let reply = reply_to("is finding a job hard", Utc::now());
        assert!(reply.response.starts_with("The tech industry"));
    }

    #[test]
    fn test_substring_match() {
        // "long" inside "belonging"
        let reply = reply_to("belonging", Utc::now());
        assert!(reply.response.starts_with("Most modules take"));
    }

    #[test]
    fn test_empty_message_falls_through() {
        let reply = reply_to("", Utc::now());
        assert_eq!(reply.response, CHAT_FALLBACK);
        assert_eq!(reply.suggestions.len(), 4);
    }
}
