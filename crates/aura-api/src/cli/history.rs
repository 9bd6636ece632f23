//! One-shot coach commands: `ask`, `history`, `reset`.

use anyhow::Result;
use console::style;

use aura_core::chat::engine::{RESET_ACKNOWLEDGEMENT, Reply};
use aura_types::message::ChatMessage;
use aura_types::session::Page;

use crate::state::AppState;

use super::auth;
use super::chat::loop_runner::{print_reply, thinking_spinner};
use super::chat::renderer::ChatRenderer;

/// The last `n` messages, or all of them.
pub fn tail(messages: &[ChatMessage], last: Option<usize>) -> &[ChatMessage] {
    match last {
        Some(n) if n < messages.len() => &messages[messages.len() - n..],
        _ => messages,
    }
}

fn reply_kind(reply: &Reply) -> &'static str {
    match reply {
        Reply::Rule { .. } => "rule",
        Reply::Fallback(_) => "fallback",
        Reply::Reset(_) => "reset",
    }
}

/// Send one message to the coach and print the reply.
pub async fn ask(state: &AppState, text: &str, json: bool) -> Result<()> {
    if !auth::enter(state, Page::Coach, json).await {
        return Ok(());
    }

    let mut service = state.chat_service().await?;

    let spinner = (!json).then(thinking_spinner);
    let result = service.send(text).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "failed to save chat history");
            eprintln!(
                "  {} Could not save history: {e}",
                style("!").yellow().bold()
            );
            return Ok(());
        }
    };

    let Some(reply) = reply else {
        return Ok(());
    };

    if json {
        let topic = match &reply {
            Reply::Rule { topic, .. } => Some(*topic),
            _ => None,
        };
        let result = serde_json::json!({
            "reply": reply.text(),
            "kind": reply_kind(&reply),
            "topic": topic,
            "group": topic.map(|t| t.group()),
            "messages": service.log().len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let renderer = ChatRenderer::new();
    let mut stdout = std::io::stdout();
    println!();
    print_reply(&mut stdout, &renderer, &reply, service.log().messages())?;
    Ok(())
}

/// Print the stored conversation.
pub async fn history(state: &AppState, last: Option<usize>, json: bool) -> Result<()> {
    if !auth::enter(state, Page::Coach, json).await {
        return Ok(());
    }

    let log = state.message_log().await;
    let messages = tail(log.messages(), last);

    if json {
        println!("{}", serde_json::to_string_pretty(messages)?);
        return Ok(());
    }

    let renderer = ChatRenderer::new();
    let mut stdout = std::io::stdout();
    println!();
    renderer.print_transcript(&mut stdout, messages)?;
    println!(
        "  {}",
        style(format!("{} of {} messages", log.len(), log.limit())).dim()
    );
    println!();
    Ok(())
}

/// Wipe the conversation and reseed the greeting.
pub async fn reset(state: &AppState, json: bool) -> Result<()> {
    if !auth::enter(state, Page::Coach, json).await {
        return Ok(());
    }

    let mut log = state.message_log().await;
    log.clear().await?;
    tracing::info!("chat history reset from the command line");

    if json {
        let result = serde_json::json!({
            "reset": true,
            "messages": log.messages(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!("  {}", style(RESET_ACKNOWLEDGEMENT).yellow());
        println!();
        ChatRenderer::new().print_transcript(&mut std::io::stdout(), log.messages())?;
    }
    Ok(())
}
