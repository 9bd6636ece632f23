//! CLI command definitions for the `aura` binary.
//!
//! Uses clap derive macros for argument parsing. Each command that shows a
//! "page" goes through the session gate first.

pub mod auth;
pub mod browse;
pub mod chat;
pub mod history;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Offline fitness companion: exercise browser and rule-based coach.
#[derive(Parser)]
#[command(name = "aura", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in (no credentials are checked or stored).
    #[command(alias = "signin")]
    Login {
        /// Email to show in the greeting (skips the form).
        #[arg(long)]
        email: Option<String>,
    },

    /// Create an account (cosmetic; same effect as login).
    Signup {
        /// Display name (skips the form together with --email).
        #[arg(long)]
        name: Option<String>,

        /// Email (skips the form).
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and return to the login page.
    Logout,

    /// Dashboard: date, session, history size, exercise catalog.
    #[command(alias = "dashboard")]
    Status,

    /// Interactive chat with the offline coach.
    Chat,

    /// Ask the coach a single question.
    Ask {
        /// The question.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show the stored chat history.
    History {
        /// Only show the last N messages.
        #[arg(long)]
        last: Option<usize>,
    },

    /// Clear the stored chat history.
    Reset,

    /// Browse the exercise carousel.
    #[command(alias = "workouts")]
    Browse,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
