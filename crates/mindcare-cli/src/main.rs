//! MindCare terminal entry point.
//!
//! Binary name: `mindcare`
//!
//! Parses CLI arguments, sets up logging, loads the configuration, then runs
//! the full-screen interface, a line-mode chat, or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use mindcare_infra::filesystem::{log_path, resolve_data_dir};
use mindcare_observe::tracing_setup::{init_tracing, TracingOptions};

use cli::{Cli, Commands};
use state::{AppState, Overrides};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Tui);

    // Shell completions don't need logging or config
    if let Commands::Completions { shell } = command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(shell, &mut cmd, "mindcare", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();

    // The full-screen interface owns the terminal, so its logs go to a file
    let file = matches!(command, Commands::Tui).then(|| log_path(&data_dir));
    init_tracing(TracingOptions {
        verbosity: cli.verbose,
        quiet: cli.quiet,
        format: cli.log_format.into(),
        file,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    if let Commands::Scripts = command {
        return cli::scripts::list_scripts(cli.json);
    }

    let state = AppState::init(
        data_dir,
        Overrides {
            seed: cli.seed,
            no_delay: cli.no_delay,
        },
    )
    .await?;

    match command {
        Commands::Tui => cli::tui::run(&state).await?,
        Commands::Chat { target } => {
            cli::chat::loop_runner::run_chat_loop(&state, target.into(), cli.quiet).await?;
        }
        Commands::Scripts | Commands::Completions { .. } => {}
    }

    Ok(())
}
