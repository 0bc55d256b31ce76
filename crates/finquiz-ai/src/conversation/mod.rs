//! Conversation transcript management.
//!
//! A `Conversation` holds the append-only message history and replays it
//! on every call so the model sees all prior turns.

mod chat;
mod manager;


pub use manager::Conversation;
