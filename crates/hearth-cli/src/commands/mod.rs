use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use hearth_config::{ConfigLoader, HearthConfig};
use hearth_core::ToolExecutor;
use hearth_memory::{LoadOutcome, MemoryStore};
use hearth_runtime::intent::normalize;
use hearth_runtime::{Agent, BuiltinTools, EvalOutcome, Evaluator};
use tracing::info;

mod chat;

/// 🏠 Hearth — pattern-matching home assistant agent
#[derive(Parser)]
#[command(name = "hearth", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to hearth.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Defaults to `chat` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat in the terminal
    Chat,
    /// Replay the scripted scenarios and save the transcripts
    Eval,
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit remembered facts
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },
    /// List the built-in tools
    Tools {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MemoryAction {
    /// Print every fact as JSON
    List,
    /// Print a single fact
    Get { key: String },
    /// Remember a fact
    Set { key: String, value: String },
}

impl Cli {
    pub async fn run(self) -> hearth_core::Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level
                .as_deref()
                .unwrap_or(config.logging.level.as_str())
        };
        init_tracing(&config.logging.format, log_level);
        info!(path = ?config_loader.path(), "configuration resolved");

        match self.command.unwrap_or(Commands::Chat) {
            Commands::Chat => chat::cmd_chat(config).await,
            Commands::Eval => Self::cmd_eval(config),
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Memory { action } => Self::cmd_memory(config, action),
            Commands::Tools { json } => Self::cmd_tools(json),
        }
    }

    fn cmd_eval(config: HearthConfig) -> hearth_core::Result<()> {
        let agent = open_agent(&config)?;
        let mut stdout = std::io::stdout().lock();
        match Evaluator::new(&agent, &config.evaluation).run(&mut stdout)? {
            EvalOutcome::MissingScenarios { .. } => {}
            EvalOutcome::Completed { scenarios, turns, .. } => {
                info!(scenarios, turns, "evaluation finished");
            }
        }
        Ok(())
    }

    fn cmd_config(config: HearthConfig, json: bool) -> hearth_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| hearth_core::HearthError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_memory(config: HearthConfig, action: MemoryAction) -> hearth_core::Result<()> {
        let store = open_store(&config)?;
        run_memory_action(&store, action, &mut std::io::stdout().lock())
    }

    fn cmd_tools(json: bool) -> hearth_core::Result<()> {
        let tools = BuiltinTools::new().tools();
        if json {
            println!("{}", serde_json::to_string_pretty(&tools)?);
            return Ok(());
        }
        for tool in &tools {
            let kind = if tool.is_mutating { "write" } else { "read" };
            println!("{:<16} [{kind}] {}", tool.name, tool.description);
        }
        Ok(())
    }
}

/// Keys go through the same normalization as chat input, so a fact set here
/// is the one a later "remember" overwrites.
fn run_memory_action(
    store: &MemoryStore,
    action: MemoryAction,
    out: &mut impl Write,
) -> hearth_core::Result<()> {
    match action {
        MemoryAction::List => {
            writeln!(out, "{}", serde_json::to_string_pretty(&store.snapshot())?)?;
        }
        MemoryAction::Get { key } => {
            let key = normalize(&key);
            match store.get(&key) {
                Some(serde_json::Value::String(s)) => writeln!(out, "{s}")?,
                Some(other) => writeln!(out, "{}", serde_json::to_string_pretty(&other)?)?,
                None => writeln!(out, "No fact stored for '{key}'.")?,
            }
        }
        MemoryAction::Set { key, value } => {
            let key = normalize(&key);
            let value = value.trim();
            store.set(key.as_str(), value)?;
            writeln!(out, "Saved '{key}' = '{value}'.")?;
        }
    }
    Ok(())
}

fn init_tracing(format: &str, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        "json" => builder.json().with_target(true).init(),
        "compact" => builder.compact().with_target(false).init(),
        _ => builder.with_target(false).init(),
    }
}

/// Open the memory store named by the config and report how it loaded.
fn open_store(config: &HearthConfig) -> hearth_core::Result<MemoryStore> {
    let store = MemoryStore::open(&config.memory.path)?;
    match store.load_outcome() {
        LoadOutcome::Fresh => info!(path = ?store.path(), "starting with an empty memory store"),
        LoadOutcome::Loaded { facts } => info!(facts, "memory store loaded"),
        // Already reported by the store itself
        LoadOutcome::Recovered { .. } => {}
    }
    Ok(store)
}

pub(crate) fn open_agent(config: &HearthConfig) -> hearth_core::Result<Agent> {
    Ok(Agent::new(Arc::new(open_store(config)?)))
}
