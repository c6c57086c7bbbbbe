//! Scripted collaborators for handler tests.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

use inquire::InquireError;

use crate::{error::AppError, git::VersionControl, prompt::Prompter};

/// Records every `execute` call and replays canned status results
#[derive(Debug, Default)]
pub struct ScriptedGit {
    changed: Option<Vec<String>>,
    status_fails: bool,
    fail_on_call: Option<usize>,
    calls: RefCell<Vec<Vec<String>>>,
    status_queries: Cell<usize>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_changed<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changed = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_status_failure(mut self) -> Self {
        self.status_fails = true;
        self
    }

    /// Makes the `index`-th (zero-based) `execute` call fail
    pub fn failing_on_call(mut self, index: usize) -> Self {
        self.fail_on_call = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn status_queries(&self) -> usize {
        self.status_queries.get()
    }
}

impl VersionControl for ScriptedGit {
    fn execute(&self, args: &[&str]) -> Result<(), AppError> {
        let mut calls = self.calls.borrow_mut();
        let index = calls.len();
        calls.push(args.iter().map(|arg| (*arg).to_string()).collect());

        if self.fail_on_call == Some(index) {
            return Err(AppError::ExternalProcess {
                command: format!("git {}", args.join(" ")),
                reason: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }

    fn changed_paths(&self) -> Result<Vec<String>, AppError> {
        self.status_queries.set(self.status_queries.get() + 1);
        if self.status_fails {
            return Err(AppError::ExternalProcess {
                command: "git status --porcelain".to_string(),
                reason: "fatal: not a git repository".to_string(),
            });
        }
        Ok(self.changed.clone().unwrap_or_default())
    }
}

/// Answers prompts from queues; an exhausted queue behaves like a cancelled prompt
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: RefCell<VecDeque<String>>,
    multi_selections: RefCell<VecDeque<Vec<String>>>,
    texts: RefCell<VecDeque<String>>,
    offered: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(self, choice: impl Into<String>) -> Self {
        self.selections.borrow_mut().push_back(choice.into());
        self
    }

    pub fn with_multi_selection<I, S>(self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.multi_selections
            .borrow_mut()
            .push_back(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_texts<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.texts
            .borrow_mut()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    /// Option lists shown by `select_one` and `select_many`, in call order
    pub fn offered(&self) -> Vec<Vec<String>> {
        self.offered.borrow().clone()
    }

    pub fn remaining_texts(&self) -> usize {
        self.texts.borrow().len()
    }

    fn record(&self, options: &[String], chosen: &[String]) {
        for choice in chosen {
            assert!(
                options.contains(choice),
                "scripted choice {choice:?} is not among {options:?}"
            );
        }
        self.offered.borrow_mut().push(options.to_vec());
    }
}

fn cancelled() -> AppError {
    AppError::Prompt(InquireError::OperationCanceled)
}

impl Prompter for ScriptedPrompter {
    fn select_one(&self, _message: &str, options: Vec<String>) -> Result<String, AppError> {
        let choice = self
            .selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(cancelled)?;
        self.record(&options, std::slice::from_ref(&choice));
        Ok(choice)
    }

    fn select_many(&self, _message: &str, options: Vec<String>) -> Result<Vec<String>, AppError> {
        let choices = self
            .multi_selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(cancelled)?;
        self.record(&options, &choices);
        Ok(choices)
    }

    fn text(&self, _message: &str) -> Result<String, AppError> {
        self.texts.borrow_mut().pop_front().ok_or_else(cancelled)
    }
}
