use error_stack::Report;

use application::service::{
    CreateBookService, CreateMemberService, DiscardBookService, GetBookService,
    GetLendingService, GetMemberService, IssueBookService, ReturnBookService, ReviseBookService,
    ReviseMemberService,
};
use kernel::KernelError;

use crate::command::Command;
use crate::controller::Controller;
use crate::request::{BookTransformer, LendingTransformer, MemberTransformer};
use crate::response::{BookPresenter, LendingPresenter, MemberPresenter};

pub trait LibraryModule:
    GetBookService
    + CreateBookService
    + ReviseBookService
    + DiscardBookService
    + GetMemberService
    + CreateMemberService
    + ReviseMemberService
    + GetLendingService
    + IssueBookService
    + ReturnBookService
{
}

impl<T> LibraryModule for T where
    T: GetBookService
        + CreateBookService
        + ReviseBookService
        + DiscardBookService
        + GetMemberService
        + CreateMemberService
        + ReviseMemberService
        + GetLendingService
        + IssueBookService
        + ReturnBookService
{
}

/// Runs one command against the library and renders its outcome.
pub async fn execute<M: LibraryModule>(
    module: &mut M,
    command: Command,
) -> error_stack::Result<String, KernelError> {
    match command {
        Command::AddBook(request) => {
            Controller::new(BookTransformer, BookPresenter)
                .intake(request)
                .handle(move |dto| async move { module.add_book(dto).await })
                .await
        }
        Command::ReviseBook(request) => {
            Controller::new(BookTransformer, BookPresenter)
                .intake(request)
                .handle(move |dto| async move { module.revise_book(dto).await })
                .await
        }
        Command::DiscardBook(request) => {
            Controller::new(BookTransformer, BookPresenter)
                .intake(request)
                .handle(move |dto| async move { module.discard_book(dto).await })
                .await
        }
        Command::AddMember(request) => {
            Controller::new(MemberTransformer, MemberPresenter)
                .intake(request)
                .handle(move |dto| async move { module.add_member(dto).await })
                .await
        }
        Command::ReviseMember(request) => {
            Controller::new(MemberTransformer, MemberPresenter)
                .intake(request)
                .handle(move |dto| async move { module.revise_member(dto).await })
                .await
        }
        Command::Issue(request) => {
            Controller::new(LendingTransformer, LendingPresenter)
                .intake(request)
                .handle(move |dto| async move { module.issue_book(dto).await })
                .await
        }
        Command::Return(request) => {
            Controller::new(LendingTransformer, LendingPresenter)
                .intake(request)
                .handle(move |dto| async move { module.return_book(dto).await })
                .await
        }
        Command::MemberBooks(request) => {
            Controller::new(LendingTransformer, LendingPresenter)
                .intake(request)
                .handle(move |dto| async move {
                    Ok::<_, Report<KernelError>>(module.books_on_loan(dto))
                })
                .await
        }
        Command::Overdue(request) => {
            Controller::new(LendingTransformer, LendingPresenter)
                .intake(request)
                .handle(move |dto| async move {
                    Ok::<_, Report<KernelError>>(module.list_overdue(dto))
                })
                .await
        }
        Command::Books => {
            Controller::new((), BookPresenter)
                .bypass(move || async move { Ok::<_, Report<KernelError>>(module.books()) })
                .await
        }
        Command::Members => {
            Controller::new((), MemberPresenter)
                .bypass(move || async move { Ok::<_, Report<KernelError>>(module.members()) })
                .await
        }
        Command::Loans => {
            Controller::new((), LendingPresenter)
                .bypass(move || async move {
                    Ok::<_, Report<KernelError>>(module.lending_records())
                })
                .await
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use time::macros::date;
    use time::Date;

    use application::service::LibraryService;
    use driver::storage::JsonFileStorage;
    use kernel::interface::clock::Clock;
    use kernel::prelude::config::LibraryConfig;
    use kernel::KernelError;

    use crate::command::Cli;
    use crate::route::execute;

    struct FixedClock(Date);

    impl Clock for FixedClock {
        fn today(&self) -> Date {
            self.0
        }
    }

    type Module = LibraryService<JsonFileStorage, FixedClock>;

    async fn open(dir: &std::path::Path, today: Date) -> Module {
        LibraryService::open(
            JsonFileStorage::new(dir),
            FixedClock(today),
            LibraryConfig::default(),
        )
        .await
    }

    async fn run(module: &mut Module, args: &[&str]) -> error_stack::Result<String, KernelError> {
        let cli = Cli::try_parse_from(std::iter::once("library").chain(args.iter().copied()))
            .unwrap();
        execute(module, cli.command).await
    }

    #[tokio::test]
    async fn lending_desk_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut module = open(dir.path(), date!(2024 - 12 - 20)).await;

        let added = run(&mut module, &["add-book", "B1", "Dune", "Herbert", "1st"])
            .await
            .unwrap();
        assert_eq!(added, "B1\tDune\tHerbert\t1st");
        run(&mut module, &["add-member", "M1", "Ada", "555-0100", "1 Loop Rd"])
            .await
            .unwrap();

        let issued = run(&mut module, &["issue", "B1", "M1"]).await.unwrap();
        assert_eq!(issued, "B1 lent to M1, due 2025-01-03");
        module.close().await.unwrap();

        let mut module = open(dir.path(), date!(2025 - 01 - 10)).await;
        assert!(module.load_faults().is_empty());
        let held = run(&mut module, &["member-books", "M1"]).await.unwrap();
        assert_eq!(held, "B1\tM1\t2025-01-03");
        let overdue = run(&mut module, &["overdue"]).await.unwrap();
        assert_eq!(overdue, "B1\tM1\t2025-01-03");
        let not_yet = run(&mut module, &["overdue", "--today", "2025-01-03"])
            .await
            .unwrap();
        assert_eq!(not_yet, "No lending records");

        let returned = run(&mut module, &["return", "B1"]).await.unwrap();
        assert_eq!(returned, "Book returned");
        assert_eq!(
            run(&mut module, &["loans"]).await.unwrap(),
            "No lending records"
        );
        module.close().await.unwrap();
    }

    #[tokio::test]
    async fn refusals_surface_kernel_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut module = open(dir.path(), date!(2024 - 06 - 01)).await;
        run(&mut module, &["add-book", "B1", "Dune", "Herbert", "1st"])
            .await
            .unwrap();

        let duplicate = run(&mut module, &["add-book", "B1", "Emma", "Austen", "2nd"])
            .await
            .unwrap_err();
        assert_eq!(duplicate.current_context(), &KernelError::DuplicateIdentifier);

        let missing = run(&mut module, &["discard-book", "B9"]).await.unwrap_err();
        assert!(missing.current_context().is_informational());

        let unknown = run(&mut module, &["issue", "B1", "M404"]).await.unwrap_err();
        assert_eq!(unknown.current_context(), &KernelError::NotFound);

        assert_eq!(
            run(&mut module, &["revise-book", "B1", "--edition", "3rd"])
                .await
                .unwrap(),
            "B1\tDune\tHerbert\t3rd"
        );
        assert_eq!(
            run(&mut module, &["books"]).await.unwrap(),
            "B1\tDune\tHerbert\t3rd"
        );
        assert_eq!(
            run(&mut module, &["members"]).await.unwrap(),
            "No members registered"
        );
    }

    #[tokio::test]
    async fn corrupt_catalog_is_kept_aside_when_other_commands_flush() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = "[{\"bookNumber\": \"B1\", \"title\": ";
        std::fs::write(dir.path().join("books.json"), garbage).unwrap();

        let mut module = open(dir.path(), date!(2024 - 06 - 01)).await;
        assert_eq!(module.load_faults().len(), 1);
        let warning = crate::error::notice(&module.load_faults()[0]);
        assert!(warning.contains("books.json.corrupt"));

        run(&mut module, &["add-member", "M1", "Ada", "555-0100", "1 Loop Rd"])
            .await
            .unwrap();
        module.close().await.unwrap();

        let kept = std::fs::read_to_string(dir.path().join("books.json.corrupt")).unwrap();
        assert_eq!(kept, garbage);
        let mut module = open(dir.path(), date!(2024 - 06 - 01)).await;
        assert!(module.load_faults().is_empty());
        assert_eq!(
            run(&mut module, &["members"]).await.unwrap(),
            "M1\tAda\t555-0100\t1 Loop Rd"
        );
    }

    #[test]
    fn malformed_reference_date_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["library", "overdue", "--today", "2025-13-01"]).is_err());
        assert!(Cli::try_parse_from(["library", "overdue", "--today", "01/03/2025"]).is_err());
        assert!(Cli::try_parse_from(["library", "overdue", "--today", "2025-01-03"]).is_ok());
    }
}
