use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::library::{DependOnLibrary, DependOnLibraryConfig};
use kernel::interface::storage::DependOnLibraryStorage;
use kernel::prelude::entity::{BookNumber, MembershipNumber, ReturnDate};
use kernel::KernelError;

use crate::service::flush;
use crate::transfer::{
    GetMemberBooksDto, IssueBookDto, LendingRecordDto, ListOverdueDto, ReturnBookDto,
};

pub trait GetLendingService: 'static + Sync + Send + DependOnLibrary + DependOnClock {
    fn count_active_for_member(&self, dto: GetMemberBooksDto) -> usize {
        let membership_number = MembershipNumber::new(dto.membership_number);
        self.library()
            .ledger()
            .count_active_for_member(&membership_number)
    }

    fn books_on_loan(&self, dto: GetMemberBooksDto) -> Vec<LendingRecordDto> {
        let membership_number = MembershipNumber::new(dto.membership_number);
        self.library()
            .ledger()
            .records_for_member(&membership_number)
            .cloned()
            .map(LendingRecordDto::from)
            .collect()
    }

    fn list_overdue(&self, dto: ListOverdueDto) -> Vec<LendingRecordDto> {
        let today = dto.today.unwrap_or_else(|| self.clock().today());
        self.library()
            .ledger()
            .overdue_records(today)
            .cloned()
            .map(LendingRecordDto::from)
            .collect()
    }

    fn lending_records(&self) -> Vec<LendingRecordDto> {
        self.library()
            .ledger()
            .records()
            .cloned()
            .map(LendingRecordDto::from)
            .collect()
    }
}

impl<T> GetLendingService for T where T: DependOnLibrary + DependOnClock {}

#[async_trait::async_trait]
pub trait IssueBookService:
    'static
    + Sync
    + Send
    + DependOnLibrary
    + DependOnLibraryStorage
    + DependOnLibraryConfig
    + DependOnClock
{
    /// Refusals (`NotFound`, `LimitExceeded`, `AlreadyLent`) leave the ledger
    /// untouched and skip the flush.
    async fn issue_book(
        &mut self,
        dto: IssueBookDto,
    ) -> error_stack::Result<LendingRecordDto, KernelError> {
        let book_number = BookNumber::new(dto.book_number);
        let membership_number = MembershipNumber::new(dto.membership_number);
        let library = self.library();

        if library.directory().find_member(&membership_number).is_none() {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No member with number {membership_number}")));
        }
        if library.catalog().find_book(&book_number).is_none() {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book with number {book_number}")));
        }

        let active = library.ledger().count_active_for_member(&membership_number);
        let limit = *self.library_config().borrowing_limit();
        if active >= limit {
            tracing::info!(%membership_number, active, limit, "Borrowing limit reached");
            return Err(Report::new(KernelError::LimitExceeded).attach_printable(format!(
                "Member {membership_number} already holds {active} of {limit} books"
            )));
        }

        if let Some(record) = library.ledger().record_for_book(&book_number) {
            return Err(Report::new(KernelError::AlreadyLent).attach_printable(format!(
                "Book {book_number} is lent to {} until {}",
                record.membership_number(),
                record.return_date()
            )));
        }

        let today = self.clock().today();
        let return_date = ReturnDate::due_after(today, *self.library_config().loan_period())
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("Return date after {today} is out of range"))
            })?;

        let record = self
            .library_mut()
            .ledger_mut()
            .issue(book_number, membership_number, return_date)
            .clone();
        tracing::info!(
            book_number = %record.book_number(),
            membership_number = %record.membership_number(),
            return_date = %record.return_date(),
            "Book issued"
        );

        flush(self).await?;

        Ok(LendingRecordDto::from(record))
    }
}

impl<T> IssueBookService for T where
    T: DependOnLibrary + DependOnLibraryStorage + DependOnLibraryConfig + DependOnClock
{
}

#[async_trait::async_trait]
pub trait ReturnBookService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    /// `NotFound` when no record matched; the ledger is then left as it was.
    async fn return_book(&mut self, dto: ReturnBookDto) -> error_stack::Result<(), KernelError> {
        let book_number = BookNumber::new(dto.book_number);
        if !self.library_mut().ledger_mut().return_book(&book_number) {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Book {book_number} is not on loan")));
        }
        tracing::info!(%book_number, "Book returned");

        flush(self).await
    }
}

impl<T> ReturnBookService for T where T: DependOnLibrary + DependOnLibraryStorage {}

#[cfg(test)]
mod test {
    use rand::Rng;
    use time::macros::date;
    use time::Date;

    use kernel::interface::library::DependOnLibrary;
    use kernel::KernelError;

    use crate::service::double::{open, FixedClock, MemoryStorage};
    use crate::service::{
        CreateBookService, CreateMemberService, GetLendingService, IssueBookService,
        LibraryService, ReturnBookService,
    };
    use crate::transfer::{
        CreateBookDto, CreateMemberDto, GetMemberBooksDto, IssueBookDto, ListOverdueDto,
        ReturnBookDto,
    };

    async fn stocked(
        storage: &MemoryStorage,
        today: Date,
        books: usize,
        members: &[&str],
    ) -> LibraryService<MemoryStorage, FixedClock> {
        let mut service = open(storage, today).await;
        for index in 1..=books {
            service
                .add_book(CreateBookDto {
                    book_number: format!("B{index}"),
                    title: format!("Title {index}"),
                    author: "Author".into(),
                    edition: "1st".into(),
                })
                .await
                .unwrap();
        }
        for number in members {
            service
                .add_member(CreateMemberDto {
                    membership_number: number.to_string(),
                    name: "Reader".into(),
                    phone: "555-0100".into(),
                    address: "1 Loop Rd".into(),
                })
                .await
                .unwrap();
        }
        service
    }

    fn issue(book: &str, member: &str) -> IssueBookDto {
        IssueBookDto {
            book_number: book.into(),
            membership_number: member.into(),
        }
    }

    fn active(service: &LibraryService<MemoryStorage, FixedClock>, member: &str) -> usize {
        service.count_active_for_member(GetMemberBooksDto {
            membership_number: member.into(),
        })
    }

    #[tokio::test]
    async fn fifth_loan_exceeds_limit() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 5, &["M1"]).await;

        for book in ["B1", "B2", "B3", "B4"] {
            service.issue_book(issue(book, "M1")).await.unwrap();
        }
        assert_eq!(active(&service, "M1"), 4);

        let saves = storage.saves();
        let before = service.library().ledger().clone();
        let report = service.issue_book(issue("B5", "M1")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::LimitExceeded);
        assert_eq!(service.library().ledger(), &before);
        assert_eq!(storage.saves(), saves);
    }

    #[tokio::test]
    async fn limit_holds_for_random_issue_and_return_sequences() {
        let storage = MemoryStorage::default();
        let members = ["M1", "M2"];
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 12, &members).await;
        let mut rng = rand::thread_rng();

        for _ in 0..300 {
            let book = format!("B{}", rng.gen_range(1..=12));
            let member = members[rng.gen_range(0..members.len())];
            if rng.gen_bool(0.7) {
                let before = service.library().ledger().clone();
                match service.issue_book(issue(&book, member)).await {
                    Ok(record) => assert_eq!(record.membership_number, member),
                    Err(report) => {
                        assert!(matches!(
                            report.current_context(),
                            KernelError::LimitExceeded | KernelError::AlreadyLent
                        ));
                        assert_eq!(service.library().ledger(), &before);
                    }
                }
            } else {
                let _ = service.return_book(ReturnBookDto { book_number: book }).await;
            }
            for member in members {
                assert!(active(&service, member) <= 4);
            }
        }
    }

    #[tokio::test]
    async fn return_date_is_today_plus_loan_period() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 12 - 20), 1, &["M1"]).await;

        let record = service.issue_book(issue("B1", "M1")).await.unwrap();
        assert_eq!(record.return_date, date!(2025 - 01 - 03));
    }

    #[tokio::test]
    async fn lent_book_cannot_be_issued_twice() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 1, &["M1", "M2"]).await;
        service.issue_book(issue("B1", "M1")).await.unwrap();

        let report = service.issue_book(issue("B1", "M2")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AlreadyLent);
        assert_eq!(active(&service, "M2"), 0);
    }

    #[tokio::test]
    async fn unknown_member_or_book_is_not_found() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 1, &["M1"]).await;

        let report = service.issue_book(issue("B1", "M9")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        let report = service.issue_book(issue("B9", "M1")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert!(service.library().ledger().is_empty());
    }

    #[tokio::test]
    async fn return_without_record_is_not_found_and_changes_nothing() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 2, &["M1"]).await;
        service.issue_book(issue("B1", "M1")).await.unwrap();
        let saves = storage.saves();
        let before = service.library().ledger().clone();

        let report = service
            .return_book(ReturnBookDto {
                book_number: "B2".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(service.library().ledger(), &before);
        assert_eq!(storage.saves(), saves);
    }

    #[tokio::test]
    async fn overdue_defaults_to_clock_date() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 01 - 01), 2, &["M1"]).await;
        service.issue_book(issue("B1", "M1")).await.unwrap();

        assert!(service.list_overdue(ListOverdueDto { today: None }).is_empty());

        let overdue = service.list_overdue(ListOverdueDto {
            today: Some(date!(2024 - 06 - 01)),
        });
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].book_number, "B1");

        let not_yet = service.list_overdue(ListOverdueDto {
            today: Some(date!(2024 - 01 - 15)),
        });
        assert!(not_yet.is_empty());
    }

    #[tokio::test]
    async fn failed_flush_keeps_issued_record_in_memory() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 1, &["M1"]).await;

        storage.fail_writes(true);
        let report = service.issue_book(issue("B1", "M1")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::StorageWriteFailure);
        assert_eq!(active(&service, "M1"), 1);
        assert!(storage.saved().unwrap().ledger().is_empty());
    }

    #[tokio::test]
    async fn lending_scenario_survives_reopen() {
        let storage = MemoryStorage::default();
        let mut service = stocked(&storage, date!(2024 - 06 - 01), 5, &["M1"]).await;

        service.issue_book(issue("B1", "M1")).await.unwrap();
        assert_eq!(active(&service, "M1"), 1);
        for book in ["B2", "B3", "B4"] {
            service.issue_book(issue(book, "M1")).await.unwrap();
        }
        assert_eq!(active(&service, "M1"), 4);
        let report = service.issue_book(issue("B5", "M1")).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::LimitExceeded);

        service
            .return_book(ReturnBookDto {
                book_number: "B1".into(),
            })
            .await
            .unwrap();
        assert_eq!(active(&service, "M1"), 3);

        let expected = service.lending_records();
        service.close().await.unwrap();

        let service = open(&storage, date!(2024 - 06 - 01)).await;
        assert_eq!(service.lending_records(), expected);
        let on_loan = service
            .books_on_loan(GetMemberBooksDto {
                membership_number: "M1".into(),
            })
            .into_iter()
            .map(|record| record.book_number)
            .collect::<Vec<_>>();
        assert_eq!(on_loan, vec!["B2", "B3", "B4"]);
        assert_eq!(service.library().catalog().len(), 5);
    }
}
