mod author;
mod edition;
mod number;
mod title;

pub use self::{author::*, edition::*, number::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    book_number: BookNumber,
    title: BookTitle,
    author: BookAuthor,
    edition: BookEdition,
}

impl Book {
    pub fn new(
        book_number: BookNumber,
        title: BookTitle,
        author: BookAuthor,
        edition: BookEdition,
    ) -> Self {
        Self {
            book_number,
            title,
            author,
            edition,
        }
    }
}
