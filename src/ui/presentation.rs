//! Terminal output: banner, entry listings, farewells and errors.
use crate::codec::format_timestamp;
use crate::types::{Entry, EntryKind};
use colored::Colorize;
use std::fmt::Display;

const BANNER: &str = r#"
 _____  _                       _
/  ___|(_)                     | |
\ `--.  _   __ _  _ __    __ _ | | ___
 `--. \| | / _` || '_ \  / _` || |/ __|
/\__/ /| || (_| || | | || (_| || |\__ \
\____/ |_| \__, ||_| |_| \__,_||_||___/
            __/ |
           |___/
"#;

/// A trait for everything the flows show to the user.
pub trait Presenter {
    /// Shows the start-up banner.
    fn welcome(&self);

    /// Shows an informational line in the middle of a flow.
    fn notice(&self, message: &str);

    /// Shows a collection's entries in the given order.
    fn entries(&self, entries: &[Entry]);

    /// Shows the final message of a successful run.
    fn goodbye(&self, message: &str);

    /// Shows a fatal error.
    fn error(&self, error: &dyn Display);
}

/// A `Presenter` writing coloured text to stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn welcome(&self) {
        println!("{}", BANNER.green());
        println!("\nWelcome to Signals: an event and signal log management CLI.\n");
    }

    fn notice(&self, message: &str) {
        println!("{message}");
    }

    fn entries(&self, entries: &[Entry]) {
        if entries.is_empty() {
            println!("{}", "This collection has no entries yet.".dimmed());
            return;
        }
        for entry in entries {
            println!("{}", format_entry_line(entry));
        }
    }

    fn goodbye(&self, message: &str) {
        println!("{}", message.bright_blue());
    }

    fn error(&self, error: &dyn Display) {
        eprintln!("{}", error.to_string().yellow());
    }
}

/// Renders one entry as `-> <timestamp> -> <message>`.
pub fn format_entry_line(entry: &Entry) -> String {
    let kind = match entry.kind {
        EntryKind::Signal => entry.kind.tag().cyan(),
        EntryKind::Event => entry.kind.tag().magenta(),
    };
    format!(
        "{} {} -> {} {}",
        "->".green(),
        format_timestamp(&entry.timestamp),
        entry.message,
        format!("[{kind}]").dimmed()
    )
}
