//! CLI command definitions

use clap::Parser;
use healthchat_domain::SelfCareKind;
use std::path::PathBuf;

/// CLI arguments for healthchat
#[derive(Parser, Debug)]
#[command(name = "healthchat")]
#[command(author, version, about = "Mental health support chat backed by a local language model")]
#[command(long_about = r#"
healthchat is a supportive chat companion that runs entirely against a
language model hosted on your own machine through Ollama.

Without arguments it starts an interactive chat. Inside the chat, type
/affirmation for a positive affirmation or /meditate for a short guided
meditation script.

Configuration files are loaded from (in priority order):
1. HEALTHCHAT_* environment variables (e.g. HEALTHCHAT_MODEL__NAME)
2. --config <path>          Explicit config file
3. ./healthchat.toml        Project-level config
4. ~/.config/healthchat/config.toml   Global config

Example:
  healthchat
  healthchat "I've been feeling anxious before exams"
  healthchat --affirmation
  healthchat -m llama3.2 --meditate
"#)]
pub struct Cli {
    /// Send a single message and print the reply (starts chat mode if omitted)
    pub message: Option<String>,

    /// Model to use (overrides config, default: tinyllama)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama server (overrides config)
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Print a positive affirmation and exit
    #[arg(long, conflicts_with_all = ["meditate", "message"])]
    pub affirmation: bool,

    /// Print a guided meditation script and exit
    #[arg(long, conflicts_with = "message")]
    pub meditate: bool,

    /// Give up on a model call after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the thinking spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The self-care tool requested on the command line, if any
    pub fn self_care_tool(&self) -> Option<SelfCareKind> {
        if self.affirmation {
            Some(SelfCareKind::Affirmation)
        } else if self.meditate {
            Some(SelfCareKind::Meditation)
        } else {
            None
        }
    }
}
