//! Natural-language to SQL generation.
//!
//! Composes the fixed instruction prompt from the schema description and the
//! transcript, calls the completion client under the retry policy, and
//! extracts the bare SQL statement from the reply.

use tracing::{debug, info};

use crate::retry::{RetryError, RetryPolicy};
use crate::{AiClient, AiError, Message, TokenUsage};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Client(#[source] AiError),
    #[error("rate limited on all {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
    #[error("completion contained no SQL")]
    EmptyResponse,
}

impl From<RetryError> for GenerationError {
    fn from(e: RetryError) -> Self {
        match e {
            RetryError::Exhausted { attempts } => GenerationError::RetriesExhausted { attempts },
            RetryError::Fatal(e) => GenerationError::Client(e),
        }
    }
}

/// SQL produced for one turn.
#[derive(Debug, Clone)]
pub struct GeneratedQuery {
    pub sql: String,
    pub usage: TokenUsage,
    /// Attempts used, including rate-limited ones.
    pub attempts: u32,
}

pub struct QueryGenerator {
    client: Box<dyn AiClient>,
    retry: RetryPolicy,
}

impl QueryGenerator {
    pub fn new(client: Box<dyn AiClient>, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    pub fn provider(&self) -> &str {
        self.client.provider()
    }

    /// Generate one SQL statement for the latest question in `transcript`.
    pub async fn generate(
        &self,
        schema: &str,
        transcript: &str,
    ) -> Result<GeneratedQuery, GenerationError> {
        let messages = [Message::user(build_prompt(schema, transcript))];
        let messages = &messages[..];
        let client = self.client.as_ref();

        let (response, attempts) = self
            .retry
            .run(move |attempt| async move {
                debug!(attempt, provider = client.provider(), "requesting SQL");
                client
                    .send_message(messages)
                    .await
                    .map(|response| (response, attempt))
            })
            .await?;

        let sql = clean_sql(&response.content);
        if sql.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        info!(attempts, chars = sql.len(), "generated SQL");
        Ok(GeneratedQuery {
            sql,
            usage: response.usage,
            attempts,
        })
    }
}

/// Build the instruction prompt sent to the completion endpoint.
pub fn build_prompt(schema: &str, transcript: &str) -> String {
    format!(
        "You are an expert SQL assistant. Given the conversation history and the database \
         schema, write a concise, correct, and executable SQL query to answer the user's \
         latest question.\n\
         Only output the SQL query and nothing else.\n\
         \n\
         ### Database Schema:\n\
         {schema}\n\
         \n\
         ### Conversation History:\n\
         {transcript}\n"
    )
}

/// Strip whitespace and a surrounding markdown code fence from a completion.
///
/// If the reply holds prose around a fenced block, the first block's body is
/// returned. An optional `sql`/`sqlite` language tag right after the opening
/// fence is dropped, even when the statement follows it without a space.
pub fn clean_sql(raw: &str) -> String {
    let trimmed = raw.trim();
    let body = match trimmed.find("```") {
        Some(start) => {
            let after = strip_language_tag(&trimmed[start + 3..]);
            match after.find("```") {
                Some(end) => &after[..end],
                None => after,
            }
        }
        None => trimmed,
    };
    body.trim().to_string()
}

fn strip_language_tag(s: &str) -> &str {
    for tag in ["sqlite", "sql"] {
        if let Some(head) = s.get(..tag.len()) {
            if head.eq_ignore_ascii_case(tag) {
                return &s[tag.len()..];
            }
        }
    }
    s
}
