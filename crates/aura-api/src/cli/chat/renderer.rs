//! Terminal rendering of coach messages.
//!
//! Replies use a small markup subset: `**bold**` and `<br>` line breaks.
//! `<br>` is turned into a newline and the rest goes through `termimad`.

use std::io::Write;

use console::style;
use termimad::MadSkin;

use aura_types::message::{ChatMessage, Sender};

/// Replace `<br>` variants with newlines.
pub fn normalize_markup(text: &str) -> String {
    text.replace("<br />", "\n")
        .replace("<br/>", "\n")
        .replace("<br>", "\n")
}

/// Terminal markdown renderer for the chat transcript.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Render message text as indented terminal markdown.
    pub fn render_text(&self, text: &str) -> String {
        let normalized = normalize_markup(text);
        let mut output = String::new();
        for line in normalized.lines() {
            let rendered = self.skin.term_text(line.trim());
            output.push_str("    ");
            output.push_str(rendered.to_string().trim_end());
            output.push('\n');
        }
        output
    }

    /// Write one message with its sender label.
    pub fn print_message(&self, out: &mut impl Write, message: &ChatMessage) -> std::io::Result<()> {
        let label = match message.sender {
            Sender::User => style("You").green().bold(),
            Sender::Ai => style("Aura").cyan().bold(),
        };
        writeln!(out, "  {label}")?;
        write!(out, "{}", self.render_text(&message.text))?;
        writeln!(out)
    }

    /// Write every message in order.
    pub fn print_transcript(
        &self,
        out: &mut impl Write,
        messages: &[ChatMessage],
    ) -> std::io::Result<()> {
        for message in messages {
            self.print_message(out, message)?;
        }
        Ok(())
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_markup_breaks() {
        assert_eq!(
            normalize_markup("For **Chest**: <br>1. Bench<br/>2. Flys<br />done"),
            "For **Chest**: \n1. Bench\n2. Flys\ndone"
        );
    }

    #[test]
    fn test_normalize_markup_plain_text_untouched() {
        assert_eq!(normalize_markup("Keep showing up!"), "Keep showing up!");
    }

    #[test]
    fn test_render_text_one_line_per_break() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render_text("a<br>b<br>c");
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_print_message_labels_sender() {
        let renderer = ChatRenderer::new();
        let mut buf = Vec::new();
        renderer
            .print_message(&mut buf, &ChatMessage::user("hello"))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("You"));
        assert!(text.contains("hello"));
    }
}
