use clap::Parser;
use error_stack::ResultExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use driver::clock::SystemClock;
use kernel::KernelError;

use crate::command::Cli;
use crate::error::{notice, StackTrace};
use crate::handler::Handler;

mod command;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

fn main() -> Result<(), StackTrace> {
    // Reading the local offset fails once other threads exist.
    let clock = SystemClock::new();

    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG")
                        .unwrap_or_else(|_| "cli=info,application=info,driver=info".into()),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();
    tracing::debug!(offset = %clock.offset(), "Clock ready");

    let cli = Cli::parse();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to start runtime")?
        .block_on(run(cli, clock))
}

async fn run(cli: Cli, clock: SystemClock) -> Result<(), StackTrace> {
    let mut handler = Handler::init(clock).await?;
    for fault in handler.load_faults() {
        eprintln!("warning: {}", notice(fault));
    }

    let outcome = route::execute(&mut *handler, cli.command).await;
    let closed = handler.close().await;

    let line = conclude(outcome, closed)?;
    println!("{line}");

    Ok(())
}

/// Text to print for a finished command. A failed close is recorded on the
/// command's own error instead of being lost.
fn conclude(
    outcome: error_stack::Result<String, KernelError>,
    closed: error_stack::Result<(), KernelError>,
) -> error_stack::Result<String, KernelError> {
    match (outcome, closed) {
        (Ok(output), Ok(())) => Ok(output),
        (Err(report), Ok(())) if report.current_context().is_informational() => {
            Ok(notice(&report))
        }
        (Ok(_), Err(close_report)) => Err(close_report),
        (Err(report), Ok(())) => Err(report),
        (Err(mut report), Err(close_report)) => {
            tracing::error!(error = ?close_report, "Failed to close library");
            report.extend_one(close_report);
            Err(report)
        }
    }
}
