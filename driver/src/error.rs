use std::num::ParseIntError;

use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Date(time::error::Parse),
    #[error(transparent)]
    Number(ParseIntError),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<time::error::Parse> for DriverError {
    fn from(value: time::error::Parse) -> Self {
        Self::Date(value)
    }
}

impl From<ParseIntError> for DriverError {
    fn from(value: ParseIntError) -> Self {
        Self::Number(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self, context: KernelError) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self, context: KernelError) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(context))
    }
}
