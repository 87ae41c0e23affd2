use clap::{Parser, Subcommand};
use rolodex_cli::commands::{browse, duplicates, keys, list, search};
use rolodex_cli::render::Layout;
use rolodex_core::config::{DEFAULT_DATA_PATH, DEFAULT_PAGE_SIZE};
use rolodex_core::{LoadOutcome, RecordStore, StoreHandle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Rolodex - browse, search and de-duplicate client records", long_about = None)]
struct Cli {
    /// Path to the clients JSON file
    #[arg(long, short, global = true, env = "ROLODEX_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Records per page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE, value_parser = positive)]
    per_page: usize,

    /// Print one `key: value` line per record instead of a table
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no command is given)
    Browse,
    /// List the fields available for search
    Keys,
    /// List all clients
    List {
        /// Page number, starting at 1
        #[arg(long, short, default_value_t = 1, value_parser = positive)]
        page: usize,
    },
    /// Case-insensitive substring search on one field
    Search {
        field: String,
        query: String,

        /// Page number, starting at 1
        #[arg(long, short, default_value_t = 1, value_parser = positive)]
        page: usize,
    },
    /// Clients sharing an email address with another client
    Duplicates {
        /// Page number, starting at 1
        #[arg(long, short, default_value_t = 1, value_parser = positive)]
        page: usize,
    },
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{}'", s)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    if let Commands::Browse = command {
        println!(r#"
  ___     _         _
 | _ \___| |___  __| |_____ __
 |   / _ \ / _ \/ _` / -_) \ /
 |_|_\___/_\___/\__,_\___/_\_\
"#);
        let (handle, outcome) = StoreHandle::open(&cli.data);
        report_outcome(&cli.data, &outcome);
        let stdin = std::io::stdin();
        return browse::run(Arc::new(handle), stdin.lock(), std::io::stdout(), cli.per_page);
    }

    let (store, outcome) = RecordStore::load(&cli.data);
    report_outcome(&cli.data, &outcome);

    let layout = if cli.plain { Layout::Lines } else { Layout::Table };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Keys => keys::run(&mut out, &store),
        Commands::List { page } => list::run(&mut out, &store, page, cli.per_page, layout),
        Commands::Search { field, query, page } => {
            search::run(&mut out, &store, &field, &query, page, cli.per_page, layout)
        }
        Commands::Duplicates { page } => {
            duplicates::run(&mut out, &store, page, cli.per_page, layout)
        }
        Commands::Browse => Ok(()),
    }
}

/// Load problems are not fatal; the user gets an empty store and a notice.
fn report_outcome(path: &std::path::Path, outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Ok => {}
        LoadOutcome::NotFound => eprintln!("File not found: {}", path.display()),
        LoadOutcome::Malformed(detail) => eprintln!("Failed to load clients: {}", detail),
        LoadOutcome::Unreadable(detail) => {
            eprintln!("Failed to read {}: {}", path.display(), detail)
        }
    }
}
