use clap::Args;

use application::transfer::{CreateBookDto, DiscardBookDto, ReviseBookDto};

use crate::controller::Intake;

#[derive(Debug, Args)]
pub struct CreateBookRequest {
    book_number: String,
    title: String,
    author: String,
    edition: String,
}

#[derive(Debug, Args)]
pub struct ReviseBookRequest {
    book_number: String,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    edition: Option<String>,
}

#[derive(Debug, Args)]
pub struct DiscardBookRequest {
    book_number: String,
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            book_number: input.book_number,
            title: input.title,
            author: input.author,
            edition: input.edition,
        }
    }
}

impl Intake<ReviseBookRequest> for BookTransformer {
    type To = ReviseBookDto;
    fn emit(&self, input: ReviseBookRequest) -> Self::To {
        ReviseBookDto {
            book_number: input.book_number,
            author: input.author,
            edition: input.edition,
        }
    }
}

impl Intake<DiscardBookRequest> for BookTransformer {
    type To = DiscardBookDto;
    fn emit(&self, input: DiscardBookRequest) -> Self::To {
        DiscardBookDto {
            book_number: input.book_number,
        }
    }
}
