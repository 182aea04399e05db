use error_stack::Report;

use kernel::interface::library::DependOnLibrary;
use kernel::interface::storage::DependOnLibraryStorage;
use kernel::prelude::entity::{BookAuthor, BookEdition, BookNumber, BookTitle};
use kernel::KernelError;

use crate::service::flush;
use crate::transfer::{BookDto, CreateBookDto, DiscardBookDto, GetBookDto, ReviseBookDto};

pub trait GetBookService: 'static + Sync + Send + DependOnLibrary {
    fn find_book(&self, dto: GetBookDto) -> Option<BookDto> {
        let book_number = BookNumber::new(dto.book_number);
        self.library()
            .catalog()
            .find_book(&book_number)
            .cloned()
            .map(BookDto::from)
    }

    fn books(&self) -> Vec<BookDto> {
        self.library()
            .catalog()
            .books()
            .cloned()
            .map(BookDto::from)
            .collect()
    }
}

impl<T> GetBookService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    async fn add_book(&mut self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let CreateBookDto {
            book_number,
            title,
            author,
            edition,
        } = dto;
        let book = self
            .library_mut()
            .catalog_mut()
            .add_book(
                BookNumber::new(book_number),
                BookTitle::new(title),
                BookAuthor::new(author),
                BookEdition::new(edition),
            )?
            .clone();
        tracing::info!(book_number = %book.book_number(), "Book added");

        flush(self).await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnLibrary + DependOnLibraryStorage {}

#[async_trait::async_trait]
pub trait ReviseBookService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    async fn revise_book(&mut self, dto: ReviseBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book_number = BookNumber::new(dto.book_number);
        let book = self
            .library_mut()
            .catalog_mut()
            .revise_book(
                &book_number,
                dto.author.map(BookAuthor::new),
                dto.edition.map(BookEdition::new),
            )
            .cloned()
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No book with number {book_number}"))
            })?;
        tracing::info!(%book_number, "Book revised");

        flush(self).await?;

        Ok(BookDto::from(book))
    }
}

impl<T> ReviseBookService for T where T: DependOnLibrary + DependOnLibraryStorage {}

#[async_trait::async_trait]
pub trait DiscardBookService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    /// Lending records for the discarded book are left in place.
    async fn discard_book(&mut self, dto: DiscardBookDto) -> error_stack::Result<(), KernelError> {
        let book_number = BookNumber::new(dto.book_number);
        if !self.library_mut().catalog_mut().remove_book(&book_number) {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book with number {book_number}")));
        }
        if let Some(record) = self.library().ledger().record_for_book(&book_number) {
            tracing::warn!(
                %book_number,
                membership_number = %record.membership_number(),
                "Discarded book is still on loan"
            );
        }
        tracing::info!(%book_number, "Book discarded");

        flush(self).await
    }
}

impl<T> DiscardBookService for T where T: DependOnLibrary + DependOnLibraryStorage {}
