//! Message command - run one chat message through the handler.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::debug;

use super::{build_handler, load_config};

/// Arguments for the message command.
#[derive(Args)]
pub struct MessageArgs {
    /// The chat message text (e.g. "gastei 50 mercado" or "/total")
    #[arg(required = true)]
    text: String,

    /// Expense store file
    #[arg(long)]
    data: Option<PathBuf>,

    /// CSV mirror file
    #[arg(long)]
    mirror: Option<PathBuf>,
}

pub async fn run(args: MessageArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let handler = build_handler(&config, args.data, args.mirror);

    let today = Local::now().date_naive();
    debug!("processing message on {today}");

    for reply in handler.handle_text(&args.text, today).await {
        println!("{reply}");
    }

    Ok(())
}
