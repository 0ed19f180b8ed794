//! Receipt command - interpret a receipt OCR text dump.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;

use gastos_core::receipt::ReceiptParser;

use super::{build_handler, load_config};

/// Arguments for the receipt command.
#[derive(Args)]
pub struct ReceiptArgs {
    /// Input file with the recognized receipt text
    #[arg(required = true)]
    input: PathBuf,

    /// Parse and print the expense as JSON without storing it
    #[arg(long)]
    parse_only: bool,

    /// Expense store file
    #[arg(long)]
    data: Option<PathBuf>,

    /// CSV mirror file
    #[arg(long)]
    mirror: Option<PathBuf>,
}

pub async fn run(args: ReceiptArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let config = load_config(config_path)?;
    let today = Local::now().date_naive();

    if args.parse_only {
        let text = fs::read_to_string(&args.input)?;
        let parser = ReceiptParser::from_config(&config.extraction);
        let expense = parser.parse(&text, today)?;

        println!("{}", serde_json::to_string_pretty(&expense)?);
        println!(
            "{} Parsed without storing (use without --parse-only to save)",
            style("ℹ").blue()
        );
        return Ok(());
    }

    let payload = fs::read(&args.input)?;
    let handler = build_handler(&config, args.data, args.mirror);

    for reply in handler.handle_photo(&payload, today).await {
        println!("{reply}");
    }

    Ok(())
}
