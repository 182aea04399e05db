use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub book_number: String,
    pub title: String,
    pub author: String,
    pub edition: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            book_number,
            title,
            author,
            edition,
        } = value.into_destruct();
        Self {
            book_number: book_number.into(),
            title: title.into(),
            author: author.into(),
            edition: edition.into(),
        }
    }
}

pub struct GetBookDto {
    pub book_number: String,
}

pub struct CreateBookDto {
    pub book_number: String,
    pub title: String,
    pub author: String,
    pub edition: String,
}

pub struct ReviseBookDto {
    pub book_number: String,
    pub author: Option<String>,
    pub edition: Option<String>,
}

pub struct DiscardBookDto {
    pub book_number: String,
}
