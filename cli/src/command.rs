use clap::{Parser, Subcommand};

use crate::request::{
    CreateBookRequest, CreateMemberRequest, DiscardBookRequest, IssueBookRequest,
    MemberBooksRequest, OverdueRequest, ReturnBookRequest, ReviseBookRequest, ReviseMemberRequest,
};

/// Lending desk for a small library.
///
/// State lives in `books.json`, `members.json` and `lending.json` under
/// `LIBRARY_DATA_DIR`.
#[derive(Debug, Parser)]
#[command(name = "library", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Adds a book to the catalog
    AddBook(CreateBookRequest),
    /// Registers a new member
    AddMember(CreateMemberRequest),
    /// Changes the author or edition of a book
    ReviseBook(ReviseBookRequest),
    /// Changes the name or address of a member
    ReviseMember(ReviseMemberRequest),
    /// Removes a book from the catalog
    DiscardBook(DiscardBookRequest),
    /// Lends a book to a member
    Issue(IssueBookRequest),
    /// Takes a book back
    Return(ReturnBookRequest),
    /// Lists the books a member currently holds
    MemberBooks(MemberBooksRequest),
    /// Lists loans past their return date
    Overdue(OverdueRequest),
    /// Lists the catalog
    Books,
    /// Lists registered members
    Members,
    /// Lists every lending record
    Loans,
}
