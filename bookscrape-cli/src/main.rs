//! Bookscrape CLI - Command-line interface for book metadata lookup

mod commands;

use anyhow::Result;
use bookscrape_core::fetch::DEFAULT_ENDPOINT;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookscrape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Book code arguments; the ASIN wins when both are given
#[derive(Args)]
struct CodeArgs {
    /// Amazon ASIN (must start with B)
    #[arg(long, default_value = "")]
    asin: String,

    /// ISBN-10 or ISBN-13, hyphens allowed
    #[arg(long, default_value = "")]
    isbn: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a book code and print its canonical form
    Code {
        #[command(flatten)]
        code: CodeArgs,
    },

    /// Extract book metadata from a saved product page
    Extract {
        /// Saved HTML page
        input: String,

        #[command(flatten)]
        code: CodeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look a book up on amazon.com.br through Browserless
    Lookup {
        #[command(flatten)]
        code: CodeArgs,

        /// Browserless access token
        #[arg(long, env = "BROWSERLESS_TOKEN", hide_env_values = true)]
        token: String,

        /// Browserless content endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate EPUB package metadata (OPF) from a record JSON file
    Opf {
        /// Record JSON, as printed by `extract --json`
        input: String,

        /// Package version (2.0, 3.0)
        #[arg(long, default_value = "3.0")]
        package_version: String,

        /// Translator to credit (repeatable)
        #[arg(long)]
        translator: Vec<String>,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookscrape_cli=debug,bookscrape_core=debug"
    } else {
        "bookscrape_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Code { code } => commands::code(&code.asin, &code.isbn),

        Commands::Extract { input, code, json } => {
            commands::extract(&input, &code.asin, &code.isbn, json)
        }

        Commands::Lookup {
            code,
            token,
            endpoint,
            timeout,
            json,
        } => commands::lookup(&code.asin, &code.isbn, &token, &endpoint, timeout, json).await,

        Commands::Opf {
            input,
            package_version,
            translator,
            output,
        } => commands::opf(&input, &package_version, &translator, output.as_deref()),
    }
}
