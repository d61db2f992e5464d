//! Session struct and transcript management.

use chrono::{DateTime, Utc};
use querycraft_common::{Role, SessionId, Turn};
use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::TokenUsage;

/// An append-only transcript plus per-session usage accounting.
pub struct Session {
    id: SessionId,
    started_at: DateTime<Utc>,
    turns: Vec<Turn>,
    tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        let id = SessionId::new();
        debug!(session = id.short(), "session started");
        Self {
            id,
            started_at: Utc::now(),
            turns: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append the user's question.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    /// Append an assistant reply, with its result table if it has one.
    pub fn push_assistant(&mut self, turn: Turn) {
        debug_assert_eq!(turn.role, Role::Assistant);
        self.turns.push(turn);
    }

    /// Every turn so far, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The transcript as replayed to the model: one `role: content` line per turn.
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(Turn::transcript_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn record_usage(&mut self, provider: &str, usage: &TokenUsage) {
        self.tracker.record(provider, usage);
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// End this session and begin a fresh one with a new id.
    pub fn clear(&mut self) {
        debug!(session = self.id.short(), turns = self.turns.len(), "session cleared");
        *self = Self::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
