mod return_date;

pub use self::return_date::*;
use destructure::Destructure;
use time::Date;
use vodca::References;

use crate::entity::{BookNumber, MembershipNumber};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct LendingRecord {
    book_number: BookNumber,
    membership_number: MembershipNumber,
    return_date: ReturnDate,
}

impl LendingRecord {
    pub fn new(
        book_number: BookNumber,
        membership_number: MembershipNumber,
        return_date: ReturnDate,
    ) -> Self {
        Self {
            book_number,
            membership_number,
            return_date,
        }
    }

    /// Overdue once the due date lies strictly before `today`.
    pub fn is_overdue(&self, today: &Date) -> bool {
        self.return_date.is_before(today)
    }
}
