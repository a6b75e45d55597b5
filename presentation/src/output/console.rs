//! Console output formatter for transcript messages

use chrono::Local;
use colored::Colorize;
use tutor_domain::{Message, Model, Role};

/// Formats transcript entries and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Chat banner with the model name.
    pub fn header(model: &Model) -> String {
        let line = "─".repeat(47);
        format!(
            "╭{}╮\n│{:^47}│\n│{:^47}│\n╰{}╯",
            line,
            "Thermo Tutor - AI Assistant".bold(),
            model.display_name().cyan(),
            line
        )
    }

    /// One message: role label with local time, then the indented body.
    pub fn format_message(message: &Message) -> String {
        let time = message
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
        let label = match message.role {
            Role::User => "You".green().bold(),
            Role::Assistant => "Tutor".cyan().bold(),
        };
        format!(
            "{} {}\n{}\n",
            label,
            time.dimmed(),
            Self::indent(&message.content, "  ")
        )
    }

    /// Whole transcript in order.
    pub fn format_transcript(messages: &[Message]) -> String {
        messages
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Shown while no credential is set.
    pub fn key_required_notice() -> String {
        format!(
            "{} {}",
            "API Key Required.".yellow().bold(),
            "Use /key to enter your Anthropic API key."
        )
    }

    pub fn notice(text: &str) -> String {
        format!("{} {}", "->".cyan(), text)
    }

    pub fn error(text: &str) -> String {
        format!("{} {}", "Error:".red().bold(), text)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::Transcript;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_message_labels_roles() {
        plain();
        let mut transcript = Transcript::new();
        let user = transcript.append(Role::User, "What is entropy?").clone();
        let reply = transcript
            .append(Role::Assistant, "A measure of\ndisorder.")
            .clone();

        let user_out = ConsoleFormatter::format_message(&user);
        assert!(user_out.starts_with("You "));
        assert!(user_out.contains("  What is entropy?"));

        let reply_out = ConsoleFormatter::format_message(&reply);
        assert!(reply_out.starts_with("Tutor "));
        assert!(reply_out.contains("  A measure of\n  disorder."));
    }

    #[test]
    fn test_format_transcript_keeps_order() {
        plain();
        let mut transcript = Transcript::new();
        transcript.append(Role::Assistant, "greeting");
        transcript.append(Role::User, "question");
        let out = ConsoleFormatter::format_transcript(transcript.messages());
        assert!(out.find("greeting").unwrap() < out.find("question").unwrap());
    }

    #[test]
    fn test_header_shows_model() {
        plain();
        let header = ConsoleFormatter::header(&Model::ClaudeSonnet35);
        assert!(header.contains("Claude Sonnet 3.5"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
