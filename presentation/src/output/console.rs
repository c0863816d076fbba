//! Console output formatter for conversations

use colored::Colorize;
use healthchat_application::is_error_reply;
use healthchat_domain::{ConversationHistory, Message, Role, SelfCareKind};

/// Formats conversation turns and self-care output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Label shown before a message of the given role
    pub fn role_label(role: Role) -> &'static str {
        match role {
            Role::User => "🧍 You",
            Role::Assistant => "🤖 AI",
        }
    }

    /// Format a single turn
    pub fn format_message(message: &Message) -> String {
        let label = format!("{}:", Self::role_label(message.role));
        let label = match message.role {
            Role::User => label.cyan().bold(),
            Role::Assistant if is_error_reply(&message.content) => label.red().bold(),
            Role::Assistant => label.green().bold(),
        };
        format!("{} {}", label, message.content)
    }

    /// Format an assistant reply that was just received
    pub fn format_reply(reply: &str) -> String {
        Self::format_message(&Message::assistant(reply))
    }

    /// Format the whole conversation, one turn per paragraph
    pub fn format_history(history: &ConversationHistory) -> String {
        if history.is_empty() {
            return "No messages yet.".dimmed().to_string();
        }
        history
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format the output of a self-care tool
    pub fn format_self_care(kind: SelfCareKind, text: &str) -> String {
        let icon = match kind {
            SelfCareKind::Affirmation => "💡",
            SelfCareKind::Meditation => "🌿",
        };
        let heading = format!("{} {}:", icon, kind.title());
        let heading = if is_error_reply(text) {
            heading.red().bold()
        } else {
            heading.yellow().bold()
        };
        format!("{} {}", heading, text)
    }

    /// Banner shown when the chat starts
    pub fn header(model: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│        🧠 Mental Health Support Agent        │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output
    }
}
