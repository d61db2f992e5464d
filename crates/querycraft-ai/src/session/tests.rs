//! Tests for transcript ordering and session lifecycle.

use super::*;
use crate::TokenUsage;
use querycraft_common::{ResultTable, Role, Turn};

#[test]
fn new_session_is_empty() {
    let session = Session::new();
    assert!(session.is_empty());
    assert_eq!(session.transcript(), "");
    assert!(session.last().is_none());
}

#[test]
fn transcript_preserves_submission_order() {
    let mut session = Session::new();
    session.push_user("How many artists?");
    session.push_assistant(Turn::assistant("I found 1 results. Displaying them above."));
    session.push_user("And albums?");
    session.push_assistant(Turn::assistant("Sorry, I couldn't generate a SQL query for that."));

    assert_eq!(
        session.transcript(),
        "user: How many artists?\n\
         assistant: I found 1 results. Displaying them above.\n\
         user: And albums?\n\
         assistant: Sorry, I couldn't generate a SQL query for that."
    );
    let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        [Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
}

#[test]
fn duplicate_turns_are_kept() {
    let mut session = Session::new();
    session.push_user("same");
    session.push_user("same");
    assert_eq!(session.len(), 2);
}

#[test]
fn result_table_stays_with_its_turn() {
    let mut session = Session::new();
    session.push_user("q");
    session.push_assistant(
        Turn::assistant("I found 0 results.").with_results(ResultTable::new(vec!["c".into()])),
    );
    assert!(session.turns()[0].results.is_none());
    assert!(session.last().unwrap().results.is_some());
}

#[test]
fn clear_starts_a_new_session() {
    let mut session = Session::new();
    let old_id = session.id().clone();
    session.push_user("q");
    session.record_usage(
        "gemini",
        &TokenUsage {
            input_tokens: 5,
            output_tokens: 1,
        },
    );

    session.clear();

    assert!(session.is_empty());
    assert_ne!(session.id(), &old_id);
    assert_eq!(session.tracker().call_count(), 0);
}

#[test]
fn usage_accumulates() {
    let mut session = Session::new();
    let usage = TokenUsage {
        input_tokens: 100,
        output_tokens: 20,
    };
    session.record_usage("gemini", &usage);
    session.record_usage("gemini", &usage);
    assert_eq!(session.tracker().total_tokens(), 240);
    assert_eq!(session.tracker().call_count(), 2);
}
