//! CLI entrypoint for healthchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Result, bail};
use clap::Parser;
use healthchat_application::{ConversationLogger, ConversationSession, SelfCareTools};
use healthchat_domain::UserInput;
use healthchat_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, build_provider};
use healthchat_presentation::{ChatRepl, Cli, ConsoleFormatter, Spinner};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = logging::init(
        cli.verbose,
        config.logging.file.as_deref().map(std::path::Path::new),
    )?;

    info!("Starting healthchat");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    // === Dependency Injection ===
    let provider = build_provider(&config)?;

    let conversation_logger: Option<Arc<dyn ConversationLogger>> = config
        .logging
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::new)
        .map(|logger| {
            info!("Writing conversation transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn ConversationLogger>
        });
    if config.logging.conversation_log.is_some() && conversation_logger.is_none() {
        warn!("Continuing without a conversation transcript");
    }

    let tools = Arc::new(SelfCareTools::with_prompts(
        provider.clone(),
        &config.self_care.to_prompts(),
    ));

    let mut session = ConversationSession::new(provider);
    if let Some(logger) = conversation_logger {
        session = session.with_conversation_logger(logger);
    }

    let show_progress = config.repl.show_progress && !cli.quiet;

    // Self-care tool mode
    if let Some(kind) = cli.self_care_tool() {
        let spinner = Spinner::start(kind.pending_message(), show_progress);
        let text = tools.run(kind).await;
        spinner.finish();
        println!("{}", ConsoleFormatter::format_self_care(kind, &text));
        return Ok(());
    }

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let Some(input) = UserInput::try_new(message) else {
            bail!("Message cannot be empty");
        };
        let spinner = Spinner::start("🧠 Thinking...", show_progress);
        let reply = session.send(input.content()).await;
        spinner.finish();
        println!("{}", ConsoleFormatter::format_reply(&reply));
        return Ok(());
    }

    // Chat mode
    let mut repl = ChatRepl::new(session, tools).with_progress(show_progress);
    if let Some(path) = &config.repl.history_file {
        repl = repl.with_history_file(PathBuf::from(path));
    }
    repl.run().await?;

    Ok(())
}

/// Command-line flags take precedence over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(url) = &cli.ollama_url {
        config.ollama.base_url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.behavior.timeout_seconds = Some(timeout);
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.display().to_string());
    }
}
