pub mod args;
mod setup;

pub use args::AppArgs;

use crate::codec::SystemClock;
use crate::error::SignalsError;
use crate::flow::{FlowController, Outcome};
use crate::storage::FsCollectionStore;
use crate::ui::{Presenter, TerminalPresenter, TerminalPrompter};
use std::process::ExitCode;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub async fn launch() -> ExitCode {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> ExitCode {
    let presenter = TerminalPresenter;

    let settings = match setup::prepare(&args) {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&format!("{e:#}"));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    presenter.welcome();

    let flows = FlowController::new(
        FsCollectionStore::new(settings.collections_dir),
        TerminalPrompter,
        presenter,
        SystemClock,
    );
    let result = flows.run(args.flow()).await;

    ExitCode::from(settle(flows.presenter(), result))
}

/// Shows the result of a flow and picks the process exit status.
///
/// This is the only place a flow's error reaches the user.
pub fn settle<R: Presenter>(presenter: &R, result: Result<Outcome, SignalsError>) -> u8 {
    match result {
        Ok(outcome) => {
            debug!("Flow finished: {}", outcome);
            presenter.goodbye(outcome.farewell());
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&render_error(&e));
            EXIT_FAILURE
        }
    }
}

/// Joins an error with its chain of sources.
fn render_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
