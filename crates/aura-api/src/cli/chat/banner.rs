//! Welcome banner for the chat session.

use std::io::Write;

use console::style;

/// Write the banner shown when the coach opens.
pub fn print_welcome_banner(
    out: &mut impl Write,
    date: &str,
    messages: usize,
    limit: usize,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {} {}", style("~").cyan(), style("Aura Coach").cyan().bold())?;
    writeln!(out, "  {}", style("Offline fitness assistant").dim())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("Today:").bold(), style(date).dim())?;
    writeln!(
        out,
        "  {}  {}",
        style("History:").bold(),
        style(format!("{messages} of {limit} messages")).dim()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Type /help for commands, /reset to start over, Ctrl+D to exit").dim()
    )?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)
}
