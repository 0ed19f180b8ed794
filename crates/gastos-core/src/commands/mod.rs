//! Typed command routing.
//!
//! Every incoming text message is parsed into one [`Command`]; commands are
//! self-contained, so no conversation state survives between messages.

pub mod reports;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::CommandError;
use crate::receipt::rules::parse_decimal_amount;

pub use reports::{sum_amounts, sum_by_category};

/// A month/year pair for report filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// The period `today` falls in.
    pub fn current(today: NaiveDate) -> Self {
        Self {
            month: today.month(),
            year: today.year(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// The closed set of commands the bot understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `gastei <amount> <description...>`: manual expense entry.
    Register {
        amount: Decimal,
        description: String,
    },
    /// `/total` or `/total <month> <year>` or `/mes <month> <year>`.
    Total { period: Option<Period> },
    /// `/listar`: this month's expenses, date ascending.
    List,
    /// `/categorias`: this month's totals grouped by category.
    Categories,
    /// `/cat <category> [<month> <year>]`.
    CategoryTotal {
        category: String,
        period: Option<Period>,
    },
    /// `/ajuda` or `ajuda`.
    Help,
    /// Anything unrecognized; answered with a usage hint, never an error.
    Unknown,
}

impl Command {
    /// Parse one message into a command.
    ///
    /// Matching is case-insensitive on whitespace-delimited tokens. Only
    /// commands with malformed arguments produce an error; text that is not
    /// a command at all is [`Command::Unknown`].
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Ok(Command::Unknown);
        };

        match first.to_lowercase().as_str() {
            "gastei" => {
                let amount = tokens
                    .get(1)
                    .and_then(|t| parse_decimal_amount(t))
                    .ok_or(CommandError::RegisterUsage)?;
                let description = tokens[2..].join(" ");
                if description.is_empty() {
                    return Err(CommandError::RegisterUsage);
                }
                Ok(Command::Register {
                    amount,
                    description,
                })
            }
            "/total" => match tokens.len() {
                1 => Ok(Command::Total { period: None }),
                3 => {
                    let period = parse_period(tokens[1], tokens[2])
                        .ok_or(CommandError::PeriodUsage("/total"))?;
                    Ok(Command::Total {
                        period: Some(period),
                    })
                }
                _ => Err(CommandError::PeriodUsage("/total")),
            },
            "/mes" | "/mês" => {
                if tokens.len() != 3 {
                    return Err(CommandError::PeriodUsage("/mes"));
                }
                let period = parse_period(tokens[1], tokens[2])
                    .ok_or(CommandError::PeriodUsage("/mes"))?;
                Ok(Command::Total {
                    period: Some(period),
                })
            }
            "/listar" => Ok(Command::List),
            "/categorias" => Ok(Command::Categories),
            "/cat" => {
                let category = tokens
                    .get(1)
                    .ok_or(CommandError::CategoryUsage)?
                    .to_string();
                let period = match tokens.len() {
                    2 => None,
                    4 => Some(
                        parse_period(tokens[2], tokens[3]).ok_or(CommandError::CategoryUsage)?,
                    ),
                    _ => return Err(CommandError::CategoryUsage),
                };
                Ok(Command::CategoryTotal { category, period })
            }
            "/ajuda" | "ajuda" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

fn parse_period(month: &str, year: &str) -> Option<Period> {
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(Period { month, year })
}
