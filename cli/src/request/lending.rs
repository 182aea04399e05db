use clap::Args;
use time::Date;

use application::transfer::{GetMemberBooksDto, IssueBookDto, ListOverdueDto, ReturnBookDto};
use kernel::prelude::entity::ReturnDate;

use crate::controller::Intake;

#[derive(Debug, Args)]
pub struct IssueBookRequest {
    book_number: String,
    membership_number: String,
}

#[derive(Debug, Args)]
pub struct ReturnBookRequest {
    book_number: String,
}

#[derive(Debug, Args)]
pub struct MemberBooksRequest {
    membership_number: String,
}

#[derive(Debug, Args)]
pub struct OverdueRequest {
    /// Reference date as YYYY-MM-DD, defaults to the local date
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    ReturnDate::parse(value).map(Date::from)
}

pub struct LendingTransformer;

impl Intake<IssueBookRequest> for LendingTransformer {
    type To = IssueBookDto;
    fn emit(&self, input: IssueBookRequest) -> Self::To {
        IssueBookDto {
            book_number: input.book_number,
            membership_number: input.membership_number,
        }
    }
}

impl Intake<ReturnBookRequest> for LendingTransformer {
    type To = ReturnBookDto;
    fn emit(&self, input: ReturnBookRequest) -> Self::To {
        ReturnBookDto {
            book_number: input.book_number,
        }
    }
}

impl Intake<MemberBooksRequest> for LendingTransformer {
    type To = GetMemberBooksDto;
    fn emit(&self, input: MemberBooksRequest) -> Self::To {
        GetMemberBooksDto {
            membership_number: input.membership_number,
        }
    }
}

impl Intake<OverdueRequest> for LendingTransformer {
    type To = ListOverdueDto;
    fn emit(&self, input: OverdueRequest) -> Self::To {
        ListOverdueDto { today: input.today }
    }
}
