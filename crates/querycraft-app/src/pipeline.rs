//! The per-turn pipeline: introspect, generate, execute, record.
//!
//! Every turn appends exactly one user entry and one assistant entry to the
//! session, whichever stage fails.

use std::path::Path;

use querycraft_ai::{GenerationError, QueryGenerator, Session};
use querycraft_common::{ResultTable, Turn};
use querycraft_db::{execute, introspect, DbError, ExecutionError};
use tracing::{info, warn};

/// How a turn ended.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Rows came back; the table is attached to the session's last turn.
    Rows { sql: String, row_count: usize },
    /// The statement ran and matched nothing.
    NoRows { sql: String },
    ExecutionFailed { sql: String, error: ExecutionError },
    GenerationFailed(GenerationError),
    SchemaFailed(DbError),
}

impl TurnOutcome {
    /// The generated statement, when generation got that far.
    pub fn sql(&self) -> Option<&str> {
        match self {
            TurnOutcome::Rows { sql, .. }
            | TurnOutcome::NoRows { sql }
            | TurnOutcome::ExecutionFailed { sql, .. } => Some(sql),
            TurnOutcome::GenerationFailed(_) | TurnOutcome::SchemaFailed(_) => None,
        }
    }

    /// The assistant's reply as recorded in the transcript.
    pub fn summary(&self) -> String {
        match self {
            TurnOutcome::Rows { row_count, .. } => {
                format!("I found {row_count} results. Displaying them above.")
            }
            TurnOutcome::NoRows { .. } => "I ran the query, but it returned no results.".into(),
            TurnOutcome::ExecutionFailed { error, .. } => {
                format!("I encountered an error: {error}")
            }
            TurnOutcome::GenerationFailed(_) => {
                "Sorry, I couldn't generate a SQL query for that.".into()
            }
            TurnOutcome::SchemaFailed(e) => format!("I couldn't read the database schema: {e}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TurnOutcome::ExecutionFailed { .. }
                | TurnOutcome::GenerationFailed(_)
                | TurnOutcome::SchemaFailed(_)
        )
    }
}

pub struct Pipeline {
    generator: QueryGenerator,
}

impl Pipeline {
    pub fn new(generator: QueryGenerator) -> Self {
        Self { generator }
    }

    pub fn provider(&self) -> &str {
        self.generator.provider()
    }

    /// Run one full turn for `question` against the database at `db`.
    pub async fn run_turn(&self, session: &mut Session, db: &Path, question: &str) -> TurnOutcome {
        session.push_user(question);

        let (outcome, results) = self.process(session, db).await;

        let mut reply = Turn::assistant(outcome.summary());
        if let Some(table) = results {
            reply = reply.with_results(table);
        }
        session.push_assistant(reply);

        info!(
            session = session.id().short(),
            turns = session.len(),
            failed = outcome.is_failure(),
            "turn finished"
        );
        outcome
    }

    async fn process(
        &self,
        session: &mut Session,
        db: &Path,
    ) -> (TurnOutcome, Option<ResultTable>) {
        let schema = match introspect(db) {
            Ok(schema) => schema,
            Err(e) => {
                warn!(error = %e, "schema read failed");
                return (TurnOutcome::SchemaFailed(e), None);
            }
        };

        let query = match self
            .generator
            .generate(&schema.to_string(), &session.transcript())
            .await
        {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "SQL generation failed");
                return (TurnOutcome::GenerationFailed(e), None);
            }
        };
        session.record_usage(self.generator.provider(), &query.usage);

        let sql = query.sql;
        match execute(db, &sql) {
            Ok(table) if table.is_empty() => (TurnOutcome::NoRows { sql }, None),
            Ok(table) => (
                TurnOutcome::Rows {
                    sql,
                    row_count: table.row_count(),
                },
                Some(table),
            ),
            Err(error) => {
                warn!(error = %error.message, "statement failed");
                (TurnOutcome::ExecutionFailed { sql, error }, None)
            }
        }
    }
}
