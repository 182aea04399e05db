mod book;
mod lending;
mod member;

pub use self::{book::*, lending::*, member::*};
