//! Line-mode chat on a plain terminal.
//!
//! The same router and sessions as the full-screen interface, driven by an
//! async readline prompt. Quick replies are slash commands (`/feel`,
//! `/option`) and scripted replies are printed above the prompt as they
//! fire. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
