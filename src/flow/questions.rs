//! The question sets asked by each flow.
use crate::types::EntryKind;
use crate::ui::Question;

pub const COLLECTION: &str = "COLLECTION";
pub const TYPE: &str = "TYPE";
pub const MESSAGE: &str = "MESSAGE";
pub const VISTYPE: &str = "VISTYPE";

/// Ways a collection can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualisation {
    /// Chronological list of entries.
    Log,
}

impl Visualisation {
    pub const ALL: [Visualisation; 1] = [Visualisation::Log];

    pub fn label(self) -> &'static str {
        match self {
            Visualisation::Log => "Log",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(label))
    }
}

pub fn append_questions(collections: &[String]) -> Vec<Question> {
    vec![
        Question::list(
            COLLECTION,
            "Which signal collection do you wish to append to?",
            collections.to_vec(),
        ),
        Question::list(
            TYPE,
            "What data point type do you wish to append?",
            EntryKind::ALL.iter().map(|k| k.label().to_string()).collect(),
        ),
        Question::input(MESSAGE, "Describe the data point with a message?"),
    ]
}

pub fn visualisation_questions(collections: &[String]) -> Vec<Question> {
    vec![
        Question::list(
            COLLECTION,
            "Which signal collection would you like to visualise?",
            collections.to_vec(),
        ),
        Question::list(
            VISTYPE,
            "Choose your visualisation type",
            Visualisation::ALL
                .iter()
                .map(|v| v.label().to_string())
                .collect(),
        ),
    ]
}

pub fn creation_questions() -> Vec<Question> {
    vec![Question::input(
        COLLECTION,
        "What would you like to name the new signal collection?",
    )]
}
