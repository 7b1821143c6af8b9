//! The main entry point for the signals application.
mod app;
mod codec;
mod error;
mod flow;
mod storage;
mod types;
mod ui;
mod validators;

use std::process::ExitCode;

/// The main function of the application.
///
/// Runs the flow selected on the command line. The process exits with status
/// 0 when the flow succeeds and 1 when it fails.
#[tokio::main]
async fn main() -> ExitCode {
    app::launch().await
}
