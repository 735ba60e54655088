use std::io::{BufRead, Write};

use chrono::NaiveDate;
use log::info;

use crate::{
    domain::expense::{parse_amount, ExpenseRecord},
    error::Result,
    prompt::prompt_string,
    store::Store,
};

/// Format of dates filled in for a blank date answer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Interactively collect one expense, append it and persist the ledger.
///
/// A blank date becomes `today`. An amount that does not parse aborts the
/// whole operation with [`crate::error::Error::BusinessError`] before the
/// remaining questions are asked; the ledger and the storage file are left
/// as they were.
pub fn add(
    records: &mut Vec<ExpenseRecord>,
    store: &Store,
    today: NaiveDate,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "=== Add New Expense ===")?;

    let date = prompt_string(
        input,
        output,
        "Enter the date (YYYY-MM-DD) or press Enter for today: ",
    )?;
    let date = if date.is_empty() {
        today.format(DATE_FORMAT).to_string()
    } else {
        date
    };

    let amount = prompt_string(input, output, "Enter the amount (e.g., 100.50): ")?;
    let amount = parse_amount(&amount)?;

    let category = prompt_string(
        input,
        output,
        "Enter the category (e.g., Food, Rent, Entertainment): ",
    )?;
    let description = prompt_string(input, output, "Enter a brief description: ")?;

    let record = ExpenseRecord::new(date, amount, category, description);
    info!("recording expense {record:?}");
    records.push(record);
    store.save(records)?;

    writeln!(output, "Expense added successfully!")?;
    Ok(())
}
