//! CLI harness for the gastos expense bot core.
//!
//! Runs the same handler the chat transport would drive, but against a
//! file-backed store and a CSV stand-in for the spreadsheet mirror.

mod commands;
mod mirror;
mod recognizer;
mod store;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, message, receipt};

/// Expense logging from chat commands and receipt text
#[derive(Parser)]
#[command(name = "gastos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Handle one chat message and print the replies
    Message(message::MessageArgs),

    /// Interpret a receipt OCR text dump
    Receipt(receipt::ReceiptArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Message(args) => message::run(args, cli.config.as_deref()).await,
        Commands::Receipt(args) => receipt::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
