//! Line-editor support: slash-command and argument completion.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use prenatal_core::knowledge::glossary::GLOSSARY;
use prenatal_core::knowledge::{CHECKLIST, HospitalType};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

pub const COMMANDS: &[&str] = &[
    "/age",
    "/term",
    "/terms",
    "/ask",
    "/quick",
    "/hospitals",
    "/checklist",
    "/history",
    "/reset",
    "/mode",
    "/help",
    "/quit",
];

/// Values accepted as argument of `command`.
fn argument_values(command: &str) -> Vec<String> {
    match command {
        "/term" | "/ask" => GLOSSARY.iter().map(|e| e.term.to_string()).collect(),
        "/hospitals" => HospitalType::iter().map(|k| k.to_string()).collect(),
        "/checklist" => CHECKLIST.iter().map(|c| c.id.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Completion candidates for the text before the cursor, with the byte
/// offset the replacement starts at.
pub fn candidates(line: &str) -> (usize, Vec<String>) {
    if !line.starts_with('/') {
        return (0, Vec::new());
    }

    match line.split_once(' ') {
        None => (
            0,
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| cmd.to_string())
                .collect(),
        ),
        Some((command, arg)) => {
            let start = command.len() + 1 + (arg.len() - arg.trim_start().len());
            let prefix = arg.trim_start().to_lowercase();
            let values = argument_values(command)
                .into_iter()
                .filter(|value| value.to_lowercase().starts_with(&prefix))
                .collect();
            (start, values)
        }
    }
}

#[derive(Clone)]
pub struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, values) = candidates(&line[..pos]);
        let pairs = values
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        match line.split_once(' ') {
            Some((command, rest)) => Owned(format!("{} {}", command.bright_cyan(), rest)),
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    /// Suggests the rest of the first candidate typed so far, case-sensitively.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let typed = &line[..pos];
        let (start, values) = candidates(typed);
        let fragment = &typed[start..];
        values
            .into_iter()
            .find(|value| value.starts_with(fragment) && value.len() > fragment.len())
            .map(|value| value[fragment.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_completion() {
        let (start, values) = candidates("/te");
        assert_eq!(start, 0);
        assert_eq!(values, vec!["/term", "/terms"]);

        assert!(candidates("hello").1.is_empty());
    }

    #[test]
    fn test_term_argument_completion() {
        let (start, values) = candidates("/term am");
        assert_eq!(start, "/term ".len());
        assert_eq!(values, vec!["AMH"]);

        let (_, values) = candidates("/ask 性");
        assert_eq!(values, vec!["性激素六项"]);
    }

    #[test]
    fn test_hospital_and_checklist_arguments() {
        assert_eq!(candidates("/hospitals b").1, vec!["budget"]);
        assert_eq!(candidates("/hospitals ").1.len(), 3);
        assert_eq!(candidates("/checklist  re").1, vec!["required", "recommended"]);
        assert_eq!(candidates("/checklist  re").0, "/checklist  ".len());
    }

    #[test]
    fn test_commands_without_arguments_offer_nothing() {
        assert!(candidates("/history x").1.is_empty());
    }
}
