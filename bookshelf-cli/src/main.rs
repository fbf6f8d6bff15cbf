//! Bookshelf CLI - browse a remote book collection from the terminal

mod commands;

use anyhow::{Context, Result};
use bookshelf_core::config::BASE_URL_ENV;
use bookshelf_core::{ClientConfig, Method};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base address of the books API (overrides BOOKSHELF_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books as cards
    List {
        /// Only show books whose name, author or genre contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Output the matching books as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch the books once, then filter them with search terms read from stdin
    Browse,

    /// Send a GET request and print the response body
    Get {
        /// Path relative to the base address
        path: String,

        /// Do not report success
        #[arg(short, long)]
        quiet: bool,
    },

    /// Send a POST request with a JSON body
    Post {
        /// Path relative to the base address
        path: String,

        /// JSON request body
        #[arg(short, long)]
        data: String,

        /// Do not report success
        #[arg(short, long)]
        quiet: bool,
    },

    /// Send a PUT request with a JSON body
    Put {
        /// Path relative to the base address
        path: String,

        /// JSON request body
        #[arg(short, long)]
        data: String,

        /// Do not report success
        #[arg(short, long)]
        quiet: bool,
    },

    /// Send a DELETE request
    Delete {
        /// Path relative to the base address
        path: String,

        /// Do not report success
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Read the environment, letting `--base-url` take precedence
fn load_config(base_url: Option<&str>) -> Result<ClientConfig> {
    ClientConfig::from_lookup(|key| match base_url {
        Some(url) if key == BASE_URL_ENV => Some(url.to_string()),
        _ => std::env::var(key).ok(),
    })
    .context("Invalid client configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.base_url.as_deref())?;
    tracing::debug!(base_url = %config.base_url(), "using books API");

    match cli.command {
        Commands::List { search, json } => commands::list(config, search.as_deref(), json).await,

        Commands::Browse => commands::browse(config).await,

        Commands::Get { path, quiet } => {
            commands::request(config, Method::Get, &path, None, quiet).await
        }

        Commands::Post { path, data, quiet } => {
            commands::request(config, Method::Post, &path, Some(&data), quiet).await
        }

        Commands::Put { path, data, quiet } => {
            commands::request(config, Method::Put, &path, Some(&data), quiet).await
        }

        Commands::Delete { path, quiet } => {
            commands::request(config, Method::Delete, &path, None, quiet).await
        }
    }
}
