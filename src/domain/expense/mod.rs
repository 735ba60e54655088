use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Largest accepted amount magnitude, in whole units.
const MAX_WHOLE_AMOUNT: i64 = 1_000_000_000_000_000;

/// Number of leading `date` characters that make up the month key (`YYYY-MM`).
const MONTH_KEY_LEN: usize = 7;

/// A single recorded expense.
///
/// Field order matches the column order of the storage file. `date` is kept
/// as entered, conventionally `YYYY-MM-DD`, and is never checked against the
/// calendar.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ExpenseRecord {
    pub date: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        date: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// The `YYYY-MM` prefix of the date, or the whole date when it is shorter.
    pub fn month(&self) -> String {
        self.date.chars().take(MONTH_KEY_LEN).collect()
    }
}

/// Parse user supplied amount text.
///
/// Plain decimals (`100.50`, `-5`) and scientific notation (`1e3`) are
/// accepted; surrounding whitespace is ignored. Amounts beyond one
/// quadrillion either way are refused.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::InvalidAmount {
            input: input.to_string(),
        })?;

    if amount.abs() > Decimal::from(MAX_WHOLE_AMOUNT) {
        return Err(Error::AmountTooLarge {
            input: input.to_string(),
        });
    }
    Ok(amount)
}
