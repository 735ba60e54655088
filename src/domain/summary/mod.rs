use rust_decimal::Decimal;

use super::{
    error::{Error, Result},
    expense::ExpenseRecord,
};

/// Totals of expense amounts grouped by a key.
///
/// Groups are kept in the order their key first appears in the ledger, not
/// sorted by key or by total.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Summary {
    totals: Vec<(String, Decimal)>,
}

impl Summary {
    pub fn by_category(records: &[ExpenseRecord]) -> Result<Self> {
        Self::group_by(records, |record| record.category.clone())
    }

    pub fn by_month(records: &[ExpenseRecord]) -> Result<Self> {
        Self::group_by(records, ExpenseRecord::month)
    }

    fn group_by(
        records: &[ExpenseRecord],
        key: impl Fn(&ExpenseRecord) -> String,
    ) -> Result<Self> {
        let totals = records.iter().try_fold(
            Vec::<(String, Decimal)>::new(),
            |mut totals, record| -> Result<_> {
                let group = key(record);

                match totals.iter().position(|(seen, _)| *seen == group) {
                    Some(index) => {
                        let total = &mut totals[index].1;
                        *total = total
                            .checked_add(record.amount)
                            .ok_or(Error::TotalOverflow { group })?;
                    }
                    None => totals.push((group, record.amount)),
                }

                Ok(totals)
            },
        )?;

        Ok(Self { totals })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals
            .iter()
            .map(|(group, total)| (group.as_str(), *total))
    }
}
