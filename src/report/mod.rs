use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    domain::{error::Result as SummaryResult, expense::ExpenseRecord, summary::Summary},
    error::Result,
};

const NOTHING_TO_LIST: &str = "No expenses recorded yet. Start adding some!";
const NOTHING_TO_ANALYZE: &str = "No expenses recorded yet to analyze.";

/// Render an amount as dollars with exactly two decimals, e.g. `$80.00`.
///
/// The fraction is padded as text so that values too wide to carry a scale of
/// two within 28 digits still print with cents.
pub fn dollars(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_string();

    match rounded.split_once('.') {
        Some((whole, cents)) => format!("${whole}.{cents:0<2}"),
        None => format!("${rounded}.00"),
    }
}

/// One numbered line per record, in ledger order.
pub fn list_all(records: &[ExpenseRecord], out: &mut impl Write) -> io::Result<()> {
    write_heading(out, "All Recorded Expenses")?;
    if records.is_empty() {
        return writeln!(out, "{NOTHING_TO_LIST}");
    }

    for (index, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {} - {} - {}",
            index + 1,
            record.date,
            record.category,
            record.description,
            dollars(record.amount)
        )?;
    }
    writeln!(out)
}

/// Totals per category, or [`crate::error::Error::BusinessError`] when a
/// total does not fit in a decimal. Nothing past the heading is written then.
pub fn summary_by_category(records: &[ExpenseRecord], out: &mut impl Write) -> Result<()> {
    write_summary(out, "Summary by Category", records, Summary::by_category)
}

pub fn summary_by_month(records: &[ExpenseRecord], out: &mut impl Write) -> Result<()> {
    write_summary(out, "Monthly Expense Summary", records, Summary::by_month)
}

fn write_summary(
    out: &mut impl Write,
    title: &str,
    records: &[ExpenseRecord],
    summarize: impl FnOnce(&[ExpenseRecord]) -> SummaryResult<Summary>,
) -> Result<()> {
    write_heading(out, title)?;
    if records.is_empty() {
        writeln!(out, "{NOTHING_TO_ANALYZE}")?;
        return Ok(());
    }

    for (group, total) in summarize(records)?.iter() {
        writeln!(out, "{group}: {}", dollars(total))?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {title} ===")
}
