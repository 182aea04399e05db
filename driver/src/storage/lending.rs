use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use kernel::prelude::collection::LendingLedger;
use kernel::prelude::entity::{
    BookNumber, DestructLendingRecord, LendingRecord, MembershipNumber, ReturnDate,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::storage) struct LendingRow {
    book_number: BookNumber,
    membership_number: MembershipNumber,
    return_date: String,
}

impl From<LendingRecord> for LendingRow {
    fn from(value: LendingRecord) -> Self {
        let DestructLendingRecord {
            book_number,
            membership_number,
            return_date,
        } = value.into_destruct();
        Self {
            book_number,
            membership_number,
            return_date: return_date.to_string(),
        }
    }
}

impl TryFrom<LendingRow> for LendingRecord {
    type Error = Report<KernelError>;
    fn try_from(value: LendingRow) -> Result<Self, Self::Error> {
        let return_date = ReturnDate::parse(&value.return_date)
            .map_err(DriverError::from)
            .convert_error(KernelError::CorruptState)
            .attach_printable_lazy(|| {
                format!(
                    "Invalid returnDate {:?} for book {}",
                    value.return_date, value.book_number
                )
            })?;
        Ok(LendingRecord::new(
            value.book_number,
            value.membership_number,
            return_date,
        ))
    }
}

pub(in crate::storage) fn ledger_from_rows(
    rows: Vec<LendingRow>,
) -> error_stack::Result<LendingLedger, KernelError> {
    rows.into_iter()
        .map(LendingRecord::try_from)
        .collect::<error_stack::Result<Vec<LendingRecord>, KernelError>>()
        .map(LendingLedger::from)
}
