//! Slash command parsing and help for the chat loop.
//!
//! Commands start with `/`. The reset command is deliberately not parsed
//! here: it is sent to the coach like any other message so the engine can
//! handle it.

use std::io::Write;

use console::style;

use aura_core::chat::engine::RESET_COMMAND;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Replay the stored conversation.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/` or is the reset command.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    if trimmed.to_lowercase() == RESET_COMMAND {
        return None;
    }

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Write the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}     {}", style("/help").cyan(), "Show this help message")?;
    writeln!(out, "  {}    {}", style("/clear").cyan(), "Clear the screen")?;
    writeln!(out, "  {}  {}", style("/history").cyan(), "Show the conversation so far")?;
    writeln!(out, "  {}    {}", style("/reset").cyan(), "Wipe the conversation and start over")?;
    writeln!(out, "  {}     {}", style("/exit").cyan(), "End the chat")?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Ask about muscle groups, nutrition, or recovery. Ctrl+D to exit.").dim()
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear_and_history() {
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
        assert_eq!(parse(" /history "), Some(ChatCommand::History));
    }

    #[test]
    fn test_reset_goes_to_the_coach() {
        assert_eq!(parse("/reset"), None);
        assert_eq!(parse("/RESET"), None);
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo bar"), Some(ChatCommand::Unknown("/foo".to_string())));
    }

    #[test]
    fn test_help_mentions_reset() {
        let mut buf = Vec::new();
        print_help(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("/reset"));
    }
}
