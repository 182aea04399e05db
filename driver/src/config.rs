use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;

use error_stack::ResultExt;
use vodca::References;

use kernel::prelude::config::{LibraryConfig, DEFAULT_BORROWING_LIMIT, DEFAULT_LOAN_PERIOD_DAYS};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static DATA_DIR: &str = "LIBRARY_DATA_DIR";
static LOAN_PERIOD_DAYS: &str = "LIBRARY_LOAN_PERIOD_DAYS";
static BORROWING_LIMIT: &str = "LIBRARY_BORROWING_LIMIT";

/// Runtime settings resolved from the environment (and `.env`, if present).
#[derive(Debug, Clone, References)]
pub struct DriverConfig {
    data_dir: PathBuf,
    library: LibraryConfig,
}

impl DriverConfig {
    pub fn new(data_dir: impl Into<PathBuf>, library: LibraryConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            library,
        }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let data_dir = optional(DATA_DIR)?.unwrap_or_else(|| ".".to_string());
        let loan_period_days =
            parse_number(LOAN_PERIOD_DAYS, optional(LOAN_PERIOD_DAYS)?, DEFAULT_LOAN_PERIOD_DAYS)?;
        let borrowing_limit =
            parse_number(BORROWING_LIMIT, optional(BORROWING_LIMIT)?, DEFAULT_BORROWING_LIMIT)?;

        let library = LibraryConfig::new(loan_period_days, borrowing_limit)
            .attach_printable_lazy(|| format!("Check {LOAN_PERIOD_DAYS} and {BORROWING_LIMIT}"))?;

        let config = Self::new(data_dir, library);
        tracing::debug!(?config, "Configuration resolved");
        Ok(config)
    }
}

fn optional(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match env(key) {
        Ok(value) => Ok(Some(value)),
        Err(DriverError::Env(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))) => Ok(None),
        Err(error) => Err::<Option<String>, _>(error)
            .convert_error(KernelError::Configuration)
            .attach_printable_lazy(|| format!("Failed to read {key}")),
    }
}

fn parse_number<T>(key: &str, raw: Option<String>, default: T) -> error_stack::Result<T, KernelError>
where
    T: FromStr<Err = ParseIntError>,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(DriverError::from)
            .convert_error(KernelError::Configuration)
            .attach_printable_lazy(|| format!("{key} is not a number: {raw:?}")),
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::config::parse_number;

    #[test]
    fn absent_value_uses_default() {
        assert_eq!(parse_number::<i64>("KEY", None, 14).unwrap(), 14);
    }

    #[test]
    fn value_is_trimmed_and_parsed() {
        assert_eq!(parse_number::<usize>("KEY", Some(" 6 ".into()), 4).unwrap(), 6);
    }

    #[test]
    fn garbage_is_a_configuration_error() {
        let report = parse_number::<usize>("KEY", Some("four".into()), 4).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Configuration);
    }
}
