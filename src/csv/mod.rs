use std::io::{Read, Write};

use csv::{Reader, Result, WriterBuilder};

use crate::domain::expense::ExpenseRecord;

/// Column names of the storage file, in serialization order.
pub const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// Parse [`ExpenseRecord`]s from a reader.
///
/// The first row must be the header; columns are matched by name, so their
/// order is free. Rows keep the order they have in the input.
pub fn read(reader: impl Read) -> Result<Vec<ExpenseRecord>> {
    Reader::from_reader(reader).into_deserialize().collect()
}

/// Write the header followed by one row per record.
///
/// The header is written explicitly so that an empty ledger still produces a
/// well formed file.
pub fn write(records: &[ExpenseRecord], writer: impl Write) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_ledger_writes_only_the_header() {
        let mut out = Vec::new();
        write(&[], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "date,amount,category,description\n");
    }

    #[test]
    fn amounts_keep_their_decimal_text_and_fields_are_quoted() {
        let records = vec![
            ExpenseRecord::new("2024-01-10", dec!(100.50), "Food", "lunch, with \"friends\""),
            ExpenseRecord::new("2024-01-11", dec!(3), "", ""),
        ];

        let mut out = Vec::new();
        write(&records, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,amount,category,description\n\
             2024-01-10,100.50,Food,\"lunch, with \"\"friends\"\"\"\n\
             2024-01-11,3,,\n"
        );
    }

    #[test]
    fn written_rows_read_back_in_order() {
        let records = vec![
            ExpenseRecord::new("2024-01-10", dec!(50), "Food", "lunch"),
            ExpenseRecord::new("2024-01-20", dec!(30.25), "Food", "dinner, late"),
            ExpenseRecord::new("2024-02", dec!(-4), "Refund", ""),
        ];

        let mut out = Vec::new();
        write(&records, &mut out).unwrap();

        assert_eq!(read(out.as_slice()).unwrap(), records);
    }

    #[test]
    fn reads_columns_by_name_and_float_style_amounts() {
        let input = "category,description,date,amount\nFood,lunch,2024-01-10,50.0\n";

        let records = read(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![ExpenseRecord::new("2024-01-10", dec!(50), "Food", "lunch")]
        );
    }

    #[test]
    fn rejects_non_numeric_stored_amounts() {
        let input = "date,amount,category,description\n2024-01-10,lots,Food,lunch\n";

        assert!(read(input.as_bytes()).is_err());
    }
}
