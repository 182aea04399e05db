use std::fmt::{Display, Formatter};

use time::macros::format_description;
use time::{Date, Duration};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln)]
pub struct ReturnDate(Date);

impl ReturnDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// `None` when the due date would fall outside the supported calendar range.
    pub fn due_after(issued: Date, loan_period: Duration) -> Option<Self> {
        issued.checked_add(loan_period).map(Self)
    }

    /// Parses the `YYYY-MM-DD` form used in persisted documents.
    pub fn parse(value: &str) -> Result<Self, time::error::Parse> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(value, &format).map(Self)
    }

    pub fn is_before(&self, today: &Date) -> bool {
        self.0 < *today
    }
}

impl Display for ReturnDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let format = format_description!("[year]-[month]-[day]");
        let formatted = self.0.format(&format).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use crate::entity::ReturnDate;

    #[test]
    fn parse_and_display_share_one_format() {
        let parsed = ReturnDate::parse("2024-12-31").unwrap();
        assert_eq!(parsed, ReturnDate::new(date!(2024 - 12 - 31)));
        assert_eq!(parsed.to_string(), "2024-12-31");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(ReturnDate::parse("31/12/2024").is_err());
        assert!(ReturnDate::parse("2024-13-01").is_err());
        assert!(ReturnDate::parse("").is_err());
    }

    #[test]
    fn due_after_adds_loan_period() {
        let due = ReturnDate::due_after(date!(2024 - 12 - 20), Duration::days(14)).unwrap();
        assert_eq!(due, ReturnDate::new(date!(2025 - 01 - 03)));
    }
}
