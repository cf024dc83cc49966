//! Conversation logic for MindCare.
//!
//! This crate owns everything behind the screens: the append-only message
//! log, the chatbot and expert sessions, the scripted response tables, the
//! deferred reply scheduler, and the screen router. Within the workspace it
//! depends only on `mindcare-types`, and never on terminal or filesystem crates.

pub mod chat;
pub mod reply;
pub mod router;
pub mod script;
