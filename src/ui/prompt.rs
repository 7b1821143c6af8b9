//! Interactive questions asked on the terminal.
use crate::error::PromptError;
use async_trait::async_trait;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashMap;

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick exactly one of the choices.
    List(Vec<String>),
    /// Free text.
    Input,
}

/// A single question. `name` keys the answer in [`Answers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub message: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn list(name: &str, message: &str, choices: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            kind: QuestionKind::List(choices),
        }
    }

    pub fn input(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            kind: QuestionKind::Input,
        }
    }
}

/// Answers keyed by question name. Free-text answers are kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes and returns the answer to `name`.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::MissingAnswer` if the question was not answered.
    pub fn take(&mut self, name: &str) -> Result<String, PromptError> {
        self.0
            .remove(name)
            .ok_or_else(|| PromptError::MissingAnswer(name.to_string()))
    }
}

/// A trait for asking the user a batch of questions.
#[async_trait]
pub trait Prompter {
    /// Asks every question in order and collects the answers.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Cancelled` if the user aborts the prompt, or
    /// `PromptError::Terminal` if the terminal cannot be used.
    async fn ask(&self, questions: &[Question]) -> Result<Answers, PromptError>;
}

/// A `Prompter` reading from the terminal with `rustyline`.
///
/// Reading blocks, so every batch of questions runs on the blocking pool.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn ask(&self, questions: &[Question]) -> Result<Answers, PromptError> {
        let questions = questions.to_vec();
        tokio::task::spawn_blocking(move || ask_blocking(&questions))
            .await
            .map_err(|e| PromptError::Terminal(e.to_string()))?
    }
}

fn ask_blocking(questions: &[Question]) -> Result<Answers, PromptError> {
    let mut editor = DefaultEditor::new().map_err(readline_error)?;
    let mut answers = Answers::new();

    for question in questions {
        let value = match &question.kind {
            QuestionKind::Input => {
                editor
                    .readline(&format!("{} {} ", "?".green(), question.message.bold()))
                    .map_err(readline_error)?
            }
            QuestionKind::List(choices) => select(&mut editor, &question.message, choices)?,
        };
        answers.insert(question.name.as_str(), value);
    }

    Ok(answers)
}

fn select(
    editor: &mut DefaultEditor,
    message: &str,
    choices: &[String],
) -> Result<String, PromptError> {
    if choices.is_empty() {
        return Err(PromptError::Terminal(format!(
            "nothing to choose from for '{message}'"
        )));
    }

    println!("{} {}", "?".green(), message.bold());
    for (index, choice) in choices.iter().enumerate() {
        println!("  {} {}", format!("{})", index + 1).cyan(), choice);
    }

    loop {
        let input = editor
            .readline(&format!("  Answer [1-{}]: ", choices.len()))
            .map_err(readline_error)?;
        if let Some(choice) = resolve_choice(&input, choices) {
            return Ok(choice.to_string());
        }
        println!("{}", "  Please pick one of the listed options.".yellow());
    }
}

/// Matches typed input against the choices, either by name (ignoring case)
/// or by 1-based number. A name match wins over a number.
pub fn resolve_choice<'a>(input: &str, choices: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(choice) = choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(input))
    {
        return Some(choice.as_str());
    }

    input
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| choices.get(index))
        .map(String::as_str)
}

fn readline_error(err: ReadlineError) -> PromptError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => PromptError::Cancelled,
        other => PromptError::Terminal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["health".to_string(), "work".to_string(), "2024".to_string()]
    }

    #[test]
    fn test_resolve_by_number() {
        let choices = choices();
        assert_eq!(resolve_choice("1", &choices), Some("health"));
        assert_eq!(resolve_choice(" 2 ", &choices), Some("work"));
        assert_eq!(resolve_choice("0", &choices), None);
        assert_eq!(resolve_choice("4", &choices), None);
    }

    #[test]
    fn test_resolve_by_name() {
        let choices = choices();
        assert_eq!(resolve_choice("WORK", &choices), Some("work"));
        assert_eq!(resolve_choice("2024", &choices), Some("2024"));
        assert_eq!(resolve_choice("play", &choices), None);
        assert_eq!(resolve_choice("", &choices), None);
    }

    #[test]
    fn test_resolve_numeric_name_first() {
        let choices = vec!["2".to_string(), "x".to_string()];
        assert_eq!(resolve_choice("2", &choices), Some("2"));
        assert_eq!(resolve_choice("1", &choices), Some("2"));
        assert_eq!(resolve_choice("x", &choices), Some("x"));
    }

    #[test]
    fn test_answers_take() {
        let mut answers = Answers::new();
        answers.insert("MESSAGE", "hello");

        assert_eq!(answers.take("MESSAGE").unwrap(), "hello");
        assert!(matches!(
            answers.take("MESSAGE"),
            Err(PromptError::MissingAnswer(name)) if name == "MESSAGE"
        ));
    }
}
