//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use healthchat_application::{ConversationSession, SelfCareTools};
use healthchat_domain::{SelfCareKind, UserInput};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Outcome of handling one line of input
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ConversationSession,
    tools: Arc<SelfCareTools>,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(session: ConversationSession, tools: Arc<SelfCareTools>) -> Self {
        Self {
            session,
            tools,
            show_progress: true,
            history_file: Self::default_history_path(),
        }
    }

    /// Set whether to show the thinking spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Keep line-editor history at `path` instead of the default location
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Neither load nor save line-editor history
    pub fn without_history(mut self) -> Self {
        self.history_file = None;
        self
    }

    fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("healthchat").join("history.txt"))
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("💬 ") {
                Ok(line) => {
                    // Blank input never reaches the session
                    let Some(input) = UserInput::try_new(line.trim()) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(input.content());

                    if self.handle_line(input).await == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Take care! 💙");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn handle_line(&mut self, input: UserInput) -> Flow {
        match ReplCommand::parse(input.content()) {
            Some(command) => self.handle_command(command).await,
            None => {
                self.process_message(ReplCommand::chat_text(input.content()))
                    .await;
                Flow::Continue
            }
        }
    }

    fn print_welcome(&self) {
        let model = self
            .session
            .model()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("{}", ConsoleFormatter::header(&model));
        println!("💬 How can I help you today? Ask anything about mental wellness...");
        println!();
        println!("{}", ReplCommand::help_text());
        println!();
    }

    async fn handle_command(&mut self, command: ReplCommand) -> Flow {
        debug!("REPL command: {:?}", command);
        match command {
            ReplCommand::Quit => {
                println!("Take care! 💙");
                return Flow::Exit;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                println!();
            }
            ReplCommand::SelfCare(kind) => self.run_self_care(kind).await,
            ReplCommand::History => {
                println!();
                println!("{}", ConsoleFormatter::format_history(self.session.history()));
                println!();
            }
            ReplCommand::Clear => {
                self.session.clear();
                println!("Started a new conversation.");
            }
            ReplCommand::Model => match self.session.model() {
                Some(model) => println!("Current model: {}", model),
                None => println!("Current model: unknown"),
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    async fn process_message(&mut self, text: &str) {
        println!();
        let spinner = Spinner::start("🧠 Thinking...", self.show_progress);
        let reply = self.session.send(text).await;
        spinner.finish();

        println!("{}", ConsoleFormatter::format_reply(&reply));
        println!();
    }

    async fn run_self_care(&self, kind: SelfCareKind) {
        println!();
        let spinner = Spinner::start(kind.pending_message(), self.show_progress);
        let text = self.tools.run(kind).await;
        spinner.finish();

        println!("{}", ConsoleFormatter::format_self_care(kind, &text));
        println!();
    }
}
