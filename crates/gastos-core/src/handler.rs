//! The message-handling boundary.
//!
//! One incoming message (text command or receipt photo) in, one or more
//! reply texts out. Every failure is converted into a friendly reply here;
//! nothing below this layer ever reaches the chat transport as an error.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::{ExpenseStore, QueryFilter, RecognitionService, SheetMirror};
use crate::commands::{Command, Period, sum_amounts, sum_by_category};
use crate::error::{CommandError, ExtractionError};
use crate::models::expense::Expense;
use crate::receipt::ReceiptParser;
use crate::receipt::rules::format_brl_amount;

const CANNOT_READ: &str = "❌ Não consegui ler o cupom. Tente uma foto mais nítida.";
const AMOUNT_NOT_FOUND: &str = "❌ Não consegui identificar o valor do cupom.";
const REGISTER_USAGE: &str = "Use: gastei <valor> <descrição>";
const STORE_FAILED: &str = "❌ Erro ao salvar o gasto. Tente novamente.";
const QUERY_FAILED: &str = "❌ Erro ao consultar os gastos. Tente novamente.";
const MIRROR_FAILED: &str = "⚠️ O gasto foi salvo, mas não consegui atualizar a planilha.";
const UNKNOWN: &str = "Não entendi. 🤔 Digite /ajuda para ver os comandos.";

const HELP: &str = "🤖 Comandos:\n\
    gastei <valor> <descrição> — registra um gasto\n\
    /total — total do mês atual\n\
    /total <mês> <ano> — total do período\n\
    /mes <mês> <ano> — total do mês informado\n\
    /listar — gastos do mês atual\n\
    /categorias — totais por categoria\n\
    /cat <categoria> [<mês> <ano>] — total por categoria\n\
    /ajuda — esta mensagem";

/// Handles one incoming message at a time against injected collaborators.
///
/// Stateless across messages; concurrent messages may be handled freely
/// since the only shared state lives behind the store.
pub struct MessageHandler<R, S, M> {
    recognizer: R,
    store: S,
    mirror: M,
    parser: ReceiptParser,
}

impl<R, S, M> MessageHandler<R, S, M>
where
    R: RecognitionService,
    S: ExpenseStore,
    M: SheetMirror,
{
    pub fn new(recognizer: R, store: S, mirror: M) -> Self {
        Self {
            recognizer,
            store,
            mirror,
            parser: ReceiptParser::new(),
        }
    }

    /// Replace the default receipt parser (e.g. one built from config).
    pub fn with_parser(mut self, parser: ReceiptParser) -> Self {
        self.parser = parser;
        self
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The injected mirror.
    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Handle a typed message. `today` is the processing date.
    pub async fn handle_text(&self, text: &str, today: NaiveDate) -> Vec<String> {
        debug!("handling text message: {:?}", text);

        match Command::parse(text) {
            Ok(command) => self.execute(command, today).await,
            Err(error) => vec![usage_reply(&error)],
        }
    }

    /// Handle a receipt photo payload.
    pub async fn handle_photo(&self, image: &[u8], today: NaiveDate) -> Vec<String> {
        debug!("handling photo message ({} bytes)", image.len());

        let text = match self.recognizer.recognize(image).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return vec![CANNOT_READ.to_string()],
            Err(error) => {
                warn!("recognition failed: {error}");
                return vec![CANNOT_READ.to_string()];
            }
        };

        match self.parser.parse(&text, today) {
            Ok(expense) => self.persist(expense).await,
            Err(ExtractionError::AmountNotFound) => vec![AMOUNT_NOT_FOUND.to_string()],
            Err(_) => vec![CANNOT_READ.to_string()],
        }
    }

    async fn execute(&self, command: Command, today: NaiveDate) -> Vec<String> {
        match command {
            Command::Register {
                amount,
                description,
            } => {
                let today_iso = today.format("%Y-%m-%d").to_string();
                match Expense::assemble(amount, &description, &today_iso, today) {
                    Ok(expense) => self.persist(expense).await,
                    Err(_) => vec![REGISTER_USAGE.to_string()],
                }
            }
            Command::Total { period } => self.total(period, today).await,
            Command::List => self.list(today).await,
            Command::Categories => self.categories(today).await,
            Command::CategoryTotal { category, period } => {
                self.category_total(&category, period, today).await
            }
            Command::Help => vec![HELP.to_string()],
            Command::Unknown => vec![UNKNOWN.to_string()],
        }
    }

    /// Store then mirror, in that order, with no rollback. A mirror failure
    /// after a successful store write is reported to the user as partial
    /// success, not hidden.
    async fn persist(&self, expense: Expense) -> Vec<String> {
        if let Err(error) = self.store.insert(&expense).await {
            warn!("store write failed: {error}");
            return vec![STORE_FAILED.to_string()];
        }

        let mut replies = vec![format!(
            "✅ Gasto registrado: {} — R$ {} ({})",
            expense.description,
            format_brl_amount(expense.amount),
            expense.category
        )];

        if let Err(error) = self.mirror.append(expense.sheet_row()).await {
            warn!("mirror append failed: {error}");
            replies.push(MIRROR_FAILED.to_string());
        }

        replies
    }

    async fn total(&self, period: Option<Period>, today: NaiveDate) -> Vec<String> {
        let period = period.unwrap_or_else(|| Period::current(today));
        let filter = QueryFilter::period(period.month, period.year);

        match self.store.query(&filter).await {
            Ok(rows) => vec![format!(
                "💰 Total de {}: R$ {}",
                period,
                format_brl_amount(sum_amounts(&rows))
            )],
            Err(error) => {
                warn!("total query failed: {error}");
                vec![QUERY_FAILED.to_string()]
            }
        }
    }

    async fn list(&self, today: NaiveDate) -> Vec<String> {
        let period = Period::current(today);
        let filter = QueryFilter::period(period.month, period.year);

        let rows = match self.store.query(&filter).await {
            Ok(rows) => rows,
            Err(error) => {
                warn!("list query failed: {error}");
                return vec![QUERY_FAILED.to_string()];
            }
        };

        if rows.is_empty() {
            return vec![format!("Nenhum gasto registrado em {period}.")];
        }

        let mut reply = format!("🧾 Gastos de {period}:");
        for expense in &rows {
            reply.push_str(&format!(
                "\n{} — {} — R$ {} ({})",
                expense.date.format("%d/%m"),
                expense.description,
                format_brl_amount(expense.amount),
                expense.category
            ));
        }
        vec![reply]
    }

    async fn categories(&self, today: NaiveDate) -> Vec<String> {
        let period = Period::current(today);
        let filter = QueryFilter::period(period.month, period.year);

        let rows = match self.store.query(&filter).await {
            Ok(rows) => rows,
            Err(error) => {
                warn!("categories query failed: {error}");
                return vec![QUERY_FAILED.to_string()];
            }
        };

        if rows.is_empty() {
            return vec![format!("Nenhum gasto registrado em {period}.")];
        }

        let mut reply = format!("📊 Gastos por categoria ({period}):");
        for (category, total) in sum_by_category(&rows) {
            reply.push_str(&format!(
                "\n• {}: R$ {}",
                category,
                format_brl_amount(total)
            ));
        }
        vec![reply]
    }

    async fn category_total(
        &self,
        category: &str,
        period: Option<Period>,
        today: NaiveDate,
    ) -> Vec<String> {
        let period = period.unwrap_or_else(|| Period::current(today));
        let filter = QueryFilter::period(period.month, period.year).with_category(category);

        match self.store.query(&filter).await {
            Ok(rows) => vec![format!(
                "💰 Total de {} em {}: R$ {}",
                category,
                period,
                format_brl_amount(sum_amounts(&rows))
            )],
            Err(error) => {
                warn!("category query failed: {error}");
                vec![QUERY_FAILED.to_string()]
            }
        }
    }
}

fn usage_reply(error: &CommandError) -> String {
    match error {
        CommandError::RegisterUsage => REGISTER_USAGE.to_string(),
        CommandError::PeriodUsage(command) => format!("Use: {command} <mês> <ano>"),
        CommandError::CategoryUsage => "Use: /cat <categoria> [<mês> <ano>]".to_string(),
    }
}
