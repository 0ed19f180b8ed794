//! CLI subcommands.

pub mod config;
pub mod message;
pub mod receipt;

use std::path::PathBuf;

use gastos_core::MessageHandler;
use gastos_core::models::BotConfig;
use gastos_core::receipt::ReceiptParser;

use crate::mirror::CsvMirror;
use crate::recognizer::PlainTextRecognizer;
use crate::store::JsonStore;

/// Default location of the expense store file.
pub(crate) fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gastos")
        .join("expenses.json")
}

/// Default location of the CSV mirror file.
pub(crate) fn default_mirror_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gastos")
        .join("gastos.csv")
}

/// Load configuration, falling back to defaults when no file is given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<BotConfig> {
    match config_path {
        Some(path) => Ok(BotConfig::from_file(std::path::Path::new(path))?),
        None => Ok(BotConfig::default()),
    }
}

/// Wire up the handler the way the bot process would at startup.
pub(crate) fn build_handler(
    config: &BotConfig,
    data: Option<PathBuf>,
    mirror: Option<PathBuf>,
) -> MessageHandler<PlainTextRecognizer, JsonStore, CsvMirror> {
    let store = JsonStore::new(data.unwrap_or_else(default_data_path));
    let mirror = CsvMirror::new(mirror.unwrap_or_else(default_mirror_path));

    MessageHandler::new(PlainTextRecognizer, store, mirror)
        .with_parser(ReceiptParser::from_config(&config.extraction))
}
