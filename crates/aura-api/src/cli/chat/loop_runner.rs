//! Main chat loop orchestration.
//!
//! Gate check, banner, history replay, then the input loop: slash commands
//! are handled locally, everything else goes to the coach behind a
//! "thinking" spinner.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use aura_core::chat::engine::Reply;
use aura_types::message::ChatMessage;
use aura_types::session::Page;

use crate::cli::auth;
use crate::cli::status::today;
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Spinner shown while the coach "thinks".
pub fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Write the outcome of one turn.
pub fn print_reply(
    out: &mut impl Write,
    renderer: &ChatRenderer,
    reply: &Reply,
    log: &[ChatMessage],
) -> std::io::Result<()> {
    if reply.is_reset() {
        writeln!(out, "  {}", style(reply.text()).yellow())?;
        writeln!(out)?;
        return renderer.print_transcript(out, log);
    }
    renderer.print_message(out, &ChatMessage::ai(reply.text()))
}

/// Run the interactive coach.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    if !auth::enter(state, Page::Coach, false).await {
        return Ok(());
    }

    let mut service = state.chat_service().await?;
    let renderer = ChatRenderer::new();

    {
        let mut stdout = std::io::stdout();
        print_welcome_banner(
            &mut stdout,
            &today(),
            service.log().len(),
            service.log().limit(),
        )?;
        renderer.print_transcript(&mut stdout, service.log().messages())?;
    }
    info!(messages = service.log().len(), "chat session started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                writeln!(out, "\n  {}", style("Session ended.").dim())?;
                break;
            }
            InputEvent::Interrupted => {
                writeln!(
                    out,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                )?;
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(&mut out)?,
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            writeln!(out, "\n  {}", style("Session ended.").dim())?;
                            break;
                        }
                        ChatCommand::History => {
                            writeln!(out)?;
                            renderer.print_transcript(&mut out, service.log().messages())?;
                        }
                        ChatCommand::Unknown(name) => {
                            writeln!(
                                out,
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            )?;
                        }
                    }
                    continue;
                }

                let spinner = thinking_spinner();
                let result = service.send(&text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(Some(reply)) => {
                        writeln!(out)?;
                        print_reply(&mut out, &renderer, &reply, service.log().messages())?;
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, "failed to save chat history");
                        writeln!(
                            out,
                            "\n  {} Could not save history: {e}\n",
                            style("!").yellow().bold()
                        )?;
                    }
                }
            }
        }
    }

    chat_input.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::chat::engine::RESET_ACKNOWLEDGEMENT;
    use aura_types::config::DEFAULT_GREETING;
    use aura_types::rule::Topic;

    #[test]
    fn test_print_reply_rule() {
        let renderer = ChatRenderer::new();
        let reply = Reply::Rule {
            topic: Topic::Sleep,
            text: "Sleep 7-9 hours.".to_string(),
        };
        let mut buf = Vec::new();
        print_reply(&mut buf, &renderer, &reply, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Aura"));
        assert!(text.contains("Sleep 7-9 hours."));
    }

    #[test]
    fn test_print_reply_reset_replays_fresh_log() {
        let renderer = ChatRenderer::new();
        let reply = Reply::Reset(RESET_ACKNOWLEDGEMENT.to_string());
        let log = vec![ChatMessage::ai(DEFAULT_GREETING)];
        let mut buf = Vec::new();
        print_reply(&mut buf, &renderer, &reply, &log).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(RESET_ACKNOWLEDGEMENT));
        assert!(text.contains("System Online."));
    }
}
