//! Conversation session management.
//!
//! A `Session` owns the transcript of one chat: every user question and
//! assistant reply, in submission order. It is created when the chat starts
//! and cleared when the chat ends. Turns hold an exclusive `&mut Session`,
//! so only one can run at a time.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::Session;
