//! Slash commands understood by the chat REPL

use healthchat_domain::SelfCareKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    SelfCare(SelfCareKind),
    History,
    Clear,
    Model,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line as a slash command. Returns `None` for ordinary chat text,
    /// including lines escaped with a leading `//`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with("//") {
            return None;
        }
        let name = line.strip_prefix('/')?;
        let name = name.split_whitespace().next().unwrap_or("");

        Some(match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "history" => ReplCommand::History,
            "clear" => ReplCommand::Clear,
            "model" => ReplCommand::Model,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => match other.parse::<SelfCareKind>() {
                Ok(kind) => ReplCommand::SelfCare(kind),
                Err(_) => ReplCommand::Unknown(line.to_string()),
            },
        })
    }

    /// Text to send to the model for a non-command line: `//text` becomes `/text`.
    pub fn chat_text(line: &str) -> &str {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") {
            &trimmed[1..]
        } else {
            line
        }
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /affirmation     - 💖 Give me a positive affirmation
  /meditate        - 🧘 Guide me through meditation
  /history         - Show the conversation so far
  /clear           - Start a new conversation
  /model           - Show the current model
  /help, /h, /?    - Show this help
  /quit, /exit, /q - Exit chat

Start a message with // to send text that begins with /"
    }
}
