//! Conversation transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResultTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Present only on assistant turns whose query returned rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultTable>,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            results: None,
            at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            results: None,
            at: Utc::now(),
        }
    }

    pub fn with_results(mut self, results: ResultTable) -> Self {
        self.results = Some(results);
        self
    }

    /// The `role: content` line replayed to the model.
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.role, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn transcript_line_format() {
        let turn = Turn::user("How many albums are there?");
        assert_eq!(turn.transcript_line(), "user: How many albums are there?");
        let turn = Turn::assistant("I found 1 results. Displaying them above.");
        assert_eq!(
            turn.transcript_line(),
            "assistant: I found 1 results. Displaying them above."
        );
    }

    #[test]
    fn results_attach_only_when_given() {
        let turn = Turn::assistant("no data");
        assert!(turn.results.is_none());
        let json = serde_json::to_string(&turn).unwrap();
        assert!(!json.contains("results"));

        let turn = Turn::assistant("data").with_results(ResultTable::new(vec!["a".into()]));
        assert!(turn.results.is_some());
    }
}
