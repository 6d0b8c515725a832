//! Regret Minimizer command line entry point.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regret_minimizer::adapters::terminal::render;
use regret_minimizer::adapters::{FileHistoryStore, InMemoryHistoryStore, TerminalShell};
use regret_minimizer::application::{DecisionSession, HistoryRepository};
use regret_minimizer::config::AppConfig;
use regret_minimizer::domain::analysis::RegretEngine;
use regret_minimizer::domain::foundation::DecisionId;
use regret_minimizer::ports::HistoryStore;

#[derive(Parser)]
#[command(name = "regret-minimizer")]
#[command(about = "Weigh your options by the regret you are likely to feel", version)]
struct Cli {
    /// Directory holding saved decisions (overrides configuration)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Starting regret sensitivity (loss-aversion factor)
    #[arg(long, global = true)]
    factor: Option<f64>,

    /// Keep history in memory only; nothing is written to disk
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive decision wizard (default)
    Wizard,

    /// List past decisions, most recent first
    History,

    /// Re-rank a past decision
    Show {
        /// Decision id as printed by `history`
        id: DecisionId,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = dir;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    let factor_override = match cli
        .factor
        .map(|f| config.scoring.override_default_factor(f))
        .transpose()
    {
        Ok(factor) => factor,
        Err(e) => {
            eprintln!("error: invalid --factor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let store: Arc<dyn HistoryStore> = if cli.in_memory {
        Arc::new(InMemoryHistoryStore::new())
    } else {
        Arc::new(FileHistoryStore::new(&config.storage.data_dir))
    };
    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        in_memory = cli.in_memory,
        "Starting"
    );

    let result = match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => run_wizard(store, &config),
        Commands::History => list_history(store, &config),
        Commands::Show { id } => show_decision(store, &config, id, factor_override),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_wizard(store: Arc<dyn HistoryStore>, config: &AppConfig) -> io::Result<()> {
    let session = DecisionSession::open(store, config.session_config());
    let stdin = io::stdin();
    let stdout = io::stdout();

    writeln!(stdout.lock(), "Regret Minimizer. Type :help for commands.")?;
    let mut shell = TerminalShell::new(session, stdin.lock(), stdout.lock());
    shell.run()
}

fn list_history(store: Arc<dyn HistoryStore>, config: &AppConfig) -> io::Result<()> {
    let repository = HistoryRepository::new(store, config.storage.history_key.clone());
    let (history, warning) = repository.load_or_empty();
    if let Some(e) = warning {
        eprintln!("warning: past decisions could not be loaded: {}", e);
    }

    let mut out = io::stdout().lock();
    if history.is_empty() {
        writeln!(out, "No past decisions.")?;
    }
    for summary in history.summaries() {
        writeln!(out, "{}  {}  ({})", summary.id, summary.title, summary)?;
    }
    Ok(())
}

fn show_decision(
    store: Arc<dyn HistoryStore>,
    config: &AppConfig,
    id: DecisionId,
    factor_override: Option<f64>,
) -> io::Result<()> {
    let repository = HistoryRepository::new(store, config.storage.history_key.clone());
    let (history, warning) = repository.load_or_empty();
    if let Some(e) = warning {
        eprintln!("warning: past decisions could not be loaded: {}", e);
    }

    let Some(decision) = history.find(id) else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Decision not found: {}", id),
        ));
    };

    let policy = config.scoring.factor_policy();
    let factor = replay_factor(factor_override, decision.last_factor_used());
    let ranking = RegretEngine::rank(decision.options(), factor);
    render::results(&mut io::stdout().lock(), decision.title(), &ranking, factor, &policy)
}

/// Factor to re-rank a past decision at: the command-line value if given,
/// otherwise the one it was last scored at.
fn replay_factor(factor_override: Option<f64>, last_used: f64) -> f64 {
    factor_override.unwrap_or(last_used)
}
