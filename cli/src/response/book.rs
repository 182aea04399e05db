use application::transfer::BookDto;

use crate::controller::Exhaust;

pub struct BookPresenter;

fn line(book: &BookDto) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        book.book_number, book.title, book.author, book.edition
    )
}

impl Exhaust<()> for BookPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Book discarded".to_string()
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = String;
    fn emit(&self, input: BookDto) -> Self::To {
        line(&input)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = String;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        if input.is_empty() {
            return "No books in the catalog".to_string();
        }
        input.iter().map(line).collect::<Vec<_>>().join("\n")
    }
}
