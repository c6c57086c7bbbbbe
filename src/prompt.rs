use std::io::Write;

use colored::Colorize;
use inquire::{MultiSelect, Select, Text};

use crate::error::AppError;

/// Interactive questions the command handlers need answered
pub trait Prompter {
    /// Picks exactly one of `options`
    fn select_one(&self, message: &str, options: Vec<String>) -> Result<String, AppError>;

    /// Picks any subset of `options`, possibly empty
    fn select_many(&self, message: &str, options: Vec<String>) -> Result<Vec<String>, AppError>;

    /// Reads a line of free text
    fn text(&self, message: &str) -> Result<String, AppError>;
}

/// Terminal prompts rendered by `inquire`
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select_one(&self, message: &str, options: Vec<String>) -> Result<String, AppError> {
        Ok(Select::new(&format!("{}", message.blue()), options).prompt()?)
    }

    fn select_many(&self, message: &str, options: Vec<String>) -> Result<Vec<String>, AppError> {
        Ok(MultiSelect::new(&format!("{}", message.blue()), options).prompt()?)
    }

    fn text(&self, message: &str) -> Result<String, AppError> {
        Ok(Text::new(&format!("{}", message.blue())).prompt()?)
    }
}

/// Prompts user for input until valid input is provided.
///
/// Each rejected answer's validation message is written to `out`.
pub fn prompt_until_valid<P, F>(
    prompter: &P,
    prompt_message: &str,
    input_validation: F,
    out: &mut impl Write,
) -> Result<String, AppError>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = prompter.text(prompt_message)?;
        match input_validation(&input) {
            Ok(()) => break Ok(input),
            Err(AppError::Validation(msg)) => writeln!(out, "{}", msg.red())?,
            Err(e) => return Err(e),
        }
    }
}
