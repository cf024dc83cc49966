//! Shared domain types for MindCare.
//!
//! This crate contains the domain types used across the MindCare workspace:
//! messages, screens, quick-reply scripts, configuration, and errors.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod screen;
pub mod script;
