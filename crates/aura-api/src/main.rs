//! Aura CLI entry point.
//!
//! Binary name: `aura`
//!
//! Parses CLI arguments, opens local storage, then dispatches to the page
//! or command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::auth::AuthView;
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,aura=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "aura", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Login { email } => {
            cli::auth::login(&state, AuthView::SignIn, None, email, cli.json).await?;
        }

        Commands::Signup { name, email } => {
            cli::auth::login(&state, AuthView::SignUp, name, email, cli.json).await?;
        }

        Commands::Logout => {
            cli::auth::logout(&state, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Ask { text } => {
            cli::history::ask(&state, &text.join(" "), cli.json).await?;
        }

        Commands::History { last } => {
            cli::history::history(&state, last, cli.json).await?;
        }

        Commands::Reset => {
            cli::history::reset(&state, cli.json).await?;
        }

        Commands::Browse => {
            cli::browse::run_browser(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
