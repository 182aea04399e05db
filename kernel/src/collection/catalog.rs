use error_stack::Report;

use crate::entity::{Book, BookAuthor, BookEdition, BookNumber, BookTitle};
use crate::KernelError;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(
        &mut self,
        book_number: BookNumber,
        title: BookTitle,
        author: BookAuthor,
        edition: BookEdition,
    ) -> error_stack::Result<&Book, KernelError> {
        if self.find_book(&book_number).is_some() {
            return Err(Report::new(KernelError::DuplicateIdentifier)
                .attach_printable(format!("Book number {book_number} is already catalogued")));
        }
        let index = self.books.len();
        self.books
            .push(Book::new(book_number, title, author, edition));
        Ok(&self.books[index])
    }

    pub fn remove_book(&mut self, book_number: &BookNumber) -> bool {
        match self
            .books
            .iter()
            .position(|book| book.book_number() == book_number)
        {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn find_book(&self, book_number: &BookNumber) -> Option<&Book> {
        self.books
            .iter()
            .find(|book| book.book_number() == book_number)
    }

    /// Only `author` and `edition` may change once a book is catalogued.
    pub fn revise_book(
        &mut self,
        book_number: &BookNumber,
        author: Option<BookAuthor>,
        edition: Option<BookEdition>,
    ) -> Option<&Book> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.book_number() == book_number)?;
        book.substitute(|book| {
            if let Some(author) = author {
                *book.author = author;
            }
            if let Some(edition) = edition {
                *book.edition = edition;
            }
        });
        Some(book)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> + Clone {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
