use time::Date;

use crate::entity::{BookNumber, LendingRecord, MembershipNumber, ReturnDate};

/// Active lending records in issue order.
///
/// The ledger stores whatever it is given; borrowing limits and availability
/// are checked by the caller before [`LendingLedger::issue`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LendingLedger {
    records: Vec<LendingRecord>,
}

impl LendingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_active_for_member(&self, membership_number: &MembershipNumber) -> usize {
        self.records_for_member(membership_number).count()
    }

    pub fn issue(
        &mut self,
        book_number: BookNumber,
        membership_number: MembershipNumber,
        return_date: ReturnDate,
    ) -> &LendingRecord {
        let index = self.records.len();
        self.records.push(LendingRecord::new(
            book_number,
            membership_number,
            return_date,
        ));
        &self.records[index]
    }

    /// Removes every record for `book_number`.
    pub fn return_book(&mut self, book_number: &BookNumber) -> bool {
        let before = self.records.len();
        self.records
            .retain(|record| record.book_number() != book_number);
        self.records.len() != before
    }

    pub fn record_for_book(&self, book_number: &BookNumber) -> Option<&LendingRecord> {
        self.records
            .iter()
            .find(|record| record.book_number() == book_number)
    }

    pub fn records_for_member<'a>(
        &'a self,
        membership_number: &'a MembershipNumber,
    ) -> impl Iterator<Item = &'a LendingRecord> + Clone + 'a {
        self.records
            .iter()
            .filter(move |record| record.membership_number() == membership_number)
    }

    pub fn overdue_records(
        &self,
        today: Date,
    ) -> impl Iterator<Item = &LendingRecord> + Clone + '_ {
        self.records
            .iter()
            .filter(move |record| record.is_overdue(&today))
    }

    pub fn records(&self) -> impl Iterator<Item = &LendingRecord> + Clone {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<LendingRecord>> for LendingLedger {
    fn from(records: Vec<LendingRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::collection::LendingLedger;
    use crate::entity::{BookNumber, MembershipNumber, ReturnDate};

    fn issue(ledger: &mut LendingLedger, book: &str, member: &str, due: time::Date) {
        ledger.issue(
            BookNumber::new(book),
            MembershipNumber::new(member),
            ReturnDate::new(due),
        );
    }

    #[test]
    fn counts_only_matching_member() {
        let mut ledger = LendingLedger::new();
        issue(&mut ledger, "B1", "M1", date!(2024 - 12 - 31));
        issue(&mut ledger, "B2", "M2", date!(2024 - 12 - 31));
        issue(&mut ledger, "B3", "M1", date!(2024 - 12 - 31));

        assert_eq!(ledger.count_active_for_member(&MembershipNumber::new("M1")), 2);
        assert_eq!(ledger.count_active_for_member(&MembershipNumber::new("M2")), 1);
        assert_eq!(ledger.count_active_for_member(&MembershipNumber::new("M3")), 0);
    }

    #[test]
    fn issue_appends_without_policy() {
        let mut ledger = LendingLedger::new();
        for _ in 0..6 {
            issue(&mut ledger, "B1", "M1", date!(2024 - 12 - 31));
        }
        assert_eq!(ledger.len(), 6);
    }

    #[test]
    fn return_removes_every_matching_record() {
        let mut ledger = LendingLedger::new();
        issue(&mut ledger, "B1", "M1", date!(2024 - 12 - 31));
        issue(&mut ledger, "B1", "M2", date!(2024 - 12 - 31));
        issue(&mut ledger, "B2", "M1", date!(2024 - 12 - 31));

        assert!(ledger.return_book(&BookNumber::new("B1")));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.record_for_book(&BookNumber::new("B1")).is_none());
    }

    #[test]
    fn return_of_unknown_book_leaves_ledger_unchanged() {
        let mut ledger = LendingLedger::new();
        issue(&mut ledger, "B1", "M1", date!(2024 - 12 - 31));
        let before = ledger.clone();

        assert!(!ledger.return_book(&BookNumber::new("B9")));
        assert_eq!(ledger, before);
    }

    #[test]
    fn member_records_are_restartable_and_ordered() {
        let mut ledger = LendingLedger::new();
        issue(&mut ledger, "B2", "M1", date!(2024 - 12 - 31));
        issue(&mut ledger, "B5", "M2", date!(2024 - 12 - 31));
        issue(&mut ledger, "B1", "M1", date!(2024 - 12 - 31));

        let member = MembershipNumber::new("M1");
        let records = ledger.records_for_member(&member);
        let first = records
            .clone()
            .map(|record| record.book_number().to_string())
            .collect::<Vec<_>>();
        let second = records
            .map(|record| record.book_number().to_string())
            .collect::<Vec<_>>();
        assert_eq!(first, vec!["B2", "B1"]);
        assert_eq!(first, second);
    }

    #[test]
    fn overdue_uses_strict_comparison() {
        let mut ledger = LendingLedger::new();
        issue(&mut ledger, "B1", "M1", date!(2024 - 01 - 01));
        issue(&mut ledger, "B2", "M1", date!(2025 - 01 - 01));
        issue(&mut ledger, "B3", "M2", date!(2024 - 06 - 01));

        let overdue = ledger
            .overdue_records(date!(2024 - 06 - 01))
            .map(|record| record.book_number().to_string())
            .collect::<Vec<_>>();
        assert_eq!(overdue, vec!["B1"]);
    }
}
