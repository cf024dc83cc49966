//! CLI command definitions for the `mindcare` binary.
//!
//! Uses clap derive macros for argument parsing. With no subcommand the
//! full-screen interface starts.

pub mod chat;
pub mod scripts;
pub mod tui;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use mindcare_observe::tracing_setup::LogFormat;
use mindcare_types::screen::Screen;

/// A supportive mental-health companion for the terminal.
#[derive(Parser)]
#[command(name = "mindcare", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for verbose, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Seed for the expert's reply picker (reproducible conversations).
    #[arg(long, global = true, env = "MINDCARE_SEED")]
    pub seed: Option<u64>,

    /// Deliver scripted replies immediately instead of after a delay.
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Open the full-screen interface (default).
    Tui,

    /// Chat on a plain terminal, one line at a time.
    Chat {
        /// Who to talk to.
        #[arg(value_enum, default_value_t = ChatTarget::Bot)]
        target: ChatTarget,
    },

    /// List every scripted response.
    Scripts,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChatTarget {
    /// The scripted chatbot.
    Bot,
    /// The simulated expert.
    Expert,
}

impl From<ChatTarget> for Screen {
    fn from(target: ChatTarget) -> Self {
        match target {
            ChatTarget::Bot => Screen::Chatbot,
            ChatTarget::Expert => Screen::ExpertChat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
