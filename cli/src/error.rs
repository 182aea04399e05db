use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// First printable attachment of the report, or the error itself.
pub fn notice(report: &Report<KernelError>) -> String {
    report
        .frames()
        .find_map(|frame| {
            frame
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| frame.downcast_ref::<&str>().map(|s| s.to_string()))
        })
        .unwrap_or_else(|| report.current_context().to_string())
}
