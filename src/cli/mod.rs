//! Command-line interface for `ticketdesk`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ticket_lib::TicketStore;
use tracing::debug;

use crate::config::{Config, resolve_path};
use crate::logging;

/// `ticketdesk` (td) - support ticket store.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(
    author,
    version,
    about = "Support ticket store (JSONL)",
    long_about = None,
    after_help = "Data lives in .tickets/tickets.jsonl unless configured otherwise."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Ticket data file (overrides config and TD_DATA_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a ticket workspace
    Init(InitArgs),

    /// Create a new ticket (status starts as open)
    Create(CreateArgs),

    /// Show a ticket by id (alias: get)
    #[command(alias = "get")]
    Show(IdArgs),

    /// List all tickets in storage order
    List,

    /// Search tickets by name, status and type
    Search(SearchArgs),

    /// Update fields of an existing ticket
    Update(UpdateArgs),

    /// Delete a ticket
    Delete(IdArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Populate the store with sample tickets
    #[arg(long)]
    pub seed: bool,

    /// Overwrite an existing data file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Ticket name
    pub name: String,

    /// Ticket type (bug, feature, task, improvement, or any other text)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub ticket_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Ticket id
    pub id: u64,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive substring of the ticket name
    #[arg(long)]
    pub query: Option<String>,

    /// Exact status (case-insensitive)
    #[arg(long)]
    pub status: Option<String>,

    /// Exact type (case-insensitive)
    #[arg(long = "type", value_name = "TYPE")]
    pub ticket_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Ticket id
    pub id: u64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// New type
    #[arg(long = "type", value_name = "TYPE")]
    pub ticket_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = cli.command else {
        println!("td - support ticket store. Use --help for usage.");
        return Ok(());
    };

    match command {
        Commands::Version => {
            println!("td {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Completions(ref args) => {
            commands::completions::execute(args);
            return Ok(());
        }
        _ => {}
    }

    let root = std::env::current_dir().context("Failed to determine working directory")?;
    let mut config = Config::load(&root).context("Failed to load configuration")?;
    if let Some(path) = cli.data_file {
        config.data_file = resolve_path(&root, path);
    }
    config.json |= cli.json;
    debug!(command = command.name(), data_file = %config.data_file.display(), "dispatching");

    if let Commands::Init(ref args) = command {
        commands::init::execute(args, &config, &root)?;
        return Ok(());
    }

    let store = TicketStore::open(&config.data_file).with_context(|| {
        format!(
            "Failed to open ticket store at {}",
            config.data_file.display()
        )
    })?;

    match command {
        Commands::Create(args) => commands::create::execute(&args, &store, &config)?,
        Commands::Show(args) => commands::show::execute(args.id, &store, config.json)?,
        Commands::List => commands::list::execute(&store, config.json)?,
        Commands::Search(args) => commands::search::execute(&args, &store, config.json)?,
        Commands::Update(args) => commands::update::execute(&args, &store, config.json)?,
        Commands::Delete(args) => commands::delete::execute(args.id, &store, config.json)?,
        Commands::Init(_) | Commands::Completions(_) | Commands::Version => {}
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Create(_) => "create",
            Self::Show(_) => "show",
            Self::List => "list",
            Self::Search(_) => "search",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}
