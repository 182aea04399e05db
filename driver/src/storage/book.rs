use serde::{Deserialize, Serialize};

use kernel::prelude::collection::Catalog;
use kernel::prelude::entity::{Book, BookAuthor, BookEdition, BookNumber, BookTitle, DestructBook};

/// One entry of `books.json`.
///
/// `author` and `edition` may be missing or `null` in documents written by
/// earlier versions; they read back as empty strings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::storage) struct BookRow {
    book_number: BookNumber,
    title: BookTitle,
    #[serde(default)]
    author: Option<BookAuthor>,
    #[serde(default)]
    edition: Option<BookEdition>,
}

impl From<Book> for BookRow {
    fn from(value: Book) -> Self {
        let DestructBook {
            book_number,
            title,
            author,
            edition,
        } = value.into_destruct();
        Self {
            book_number,
            title,
            author: Some(author),
            edition: Some(edition),
        }
    }
}

pub(in crate::storage) fn catalog_from_rows(rows: Vec<BookRow>) -> Catalog {
    let mut catalog = Catalog::new();
    for row in rows {
        let book_number = row.book_number.clone();
        if let Err(report) = catalog.add_book(
            row.book_number,
            row.title,
            row.author.unwrap_or_default(),
            row.edition.unwrap_or_default(),
        ) {
            tracing::warn!(%book_number, error = ?report, "Skipping repeated book entry");
        }
    }
    catalog
}
