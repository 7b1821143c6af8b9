//! The two terminal collaborators of the flows: questions in, text out.
pub mod presentation;
pub mod prompt;

pub use presentation::{Presenter, TerminalPresenter};
pub use prompt::{Prompter, Question, TerminalPrompter};
