use error_stack::Report;
use time::Duration;
use vodca::References;

use crate::KernelError;

pub const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;
pub const DEFAULT_BORROWING_LIMIT: usize = 4;
/// Longest loan period accepted, one hundred years.
pub const MAX_LOAN_PERIOD_DAYS: i64 = 36_500;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct LibraryConfig {
    loan_period: Duration,
    borrowing_limit: usize,
}

impl LibraryConfig {
    pub fn new(
        loan_period_days: i64,
        borrowing_limit: usize,
    ) -> error_stack::Result<Self, KernelError> {
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&loan_period_days) {
            return Err(Report::new(KernelError::Configuration).attach_printable(format!(
                "Loan period must be between 1 and {MAX_LOAN_PERIOD_DAYS} days, got {loan_period_days}"
            )));
        }
        if borrowing_limit < 1 {
            return Err(Report::new(KernelError::Configuration)
                .attach_printable("Borrowing limit must be at least 1"));
        }
        Ok(Self {
            loan_period: Duration::days(loan_period_days),
            borrowing_limit,
        })
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            loan_period: Duration::days(DEFAULT_LOAN_PERIOD_DAYS),
            borrowing_limit: DEFAULT_BORROWING_LIMIT,
        }
    }
}

pub trait DependOnLibraryConfig: 'static + Sync + Send {
    fn library_config(&self) -> &LibraryConfig;
}

#[cfg(test)]
mod test {
    use time::Duration;

    use crate::config::{LibraryConfig, MAX_LOAN_PERIOD_DAYS};
    use crate::KernelError;

    #[test]
    fn accepts_periods_up_to_the_maximum() {
        let config = LibraryConfig::new(MAX_LOAN_PERIOD_DAYS, 1).unwrap();
        assert_eq!(config.loan_period(), &Duration::days(MAX_LOAN_PERIOD_DAYS));
        assert_eq!(config.borrowing_limit(), &1);
    }

    #[test]
    fn default_matches_explicit_defaults() {
        assert_eq!(LibraryConfig::new(14, 4).unwrap(), LibraryConfig::default());
    }

    #[test]
    fn rejects_empty_or_oversized_loan_period() {
        for days in [0, -3, MAX_LOAN_PERIOD_DAYS + 1, 200_000_000_000_000, i64::MAX] {
            let report = LibraryConfig::new(days, 4).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::Configuration);
        }
    }

    #[test]
    fn rejects_zero_borrowing_limit() {
        let report = LibraryConfig::new(14, 0).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Configuration);
    }
}
