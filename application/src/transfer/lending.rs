use time::Date;

use kernel::prelude::entity::{DestructLendingRecord, LendingRecord};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LendingRecordDto {
    pub book_number: String,
    pub membership_number: String,
    pub return_date: Date,
}

impl From<LendingRecord> for LendingRecordDto {
    fn from(value: LendingRecord) -> Self {
        let DestructLendingRecord {
            book_number,
            membership_number,
            return_date,
        } = value.into_destruct();
        Self {
            book_number: book_number.into(),
            membership_number: membership_number.into(),
            return_date: return_date.into(),
        }
    }
}

pub struct IssueBookDto {
    pub book_number: String,
    pub membership_number: String,
}

pub struct ReturnBookDto {
    pub book_number: String,
}

pub struct GetMemberBooksDto {
    pub membership_number: String,
}

/// `today` falls back to the service clock when absent.
pub struct ListOverdueDto {
    pub today: Option<Date>,
}
