use std::{io::Write, path::Path};

use colored::Colorize;

use crate::{
    commit::{compose, type_descriptions, CommitType},
    error::AppError,
    git::VersionControl,
    profile::ProfileStore,
    prompt::{prompt_until_valid, Prompter},
    validation::validate_subject,
};

// Git workflow handlers

/// Stages `files`, or asks which changed files to stage when none are given
pub fn add_files(
    git: &impl VersionControl,
    prompter: &impl Prompter,
    files: &[String],
    out: &mut impl Write,
) -> Result<(), AppError> {
    let selected: Vec<String> = if files.is_empty() {
        let changed_files = git.changed_paths()?;
        if changed_files.is_empty() {
            tracing::info!("no changed files to stage");
            writeln!(out, "{}", "No files selected".yellow())?;
            return Ok(());
        }
        prompter.select_many("Select files to stage:", changed_files)?
    } else {
        files.to_vec()
    };

    if selected.is_empty() {
        tracing::info!("no files chosen to stage");
        writeln!(out, "{}", "No files selected".yellow())?;
        return Ok(());
    }

    let mut args: Vec<&str> = vec!["add"];
    args.extend(selected.iter().map(String::as_str));
    git.execute(&args)
}

/// Builds a conventional commit message interactively and commits with it
pub fn create_commit(
    git: &impl VersionControl,
    prompter: &impl Prompter,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let options: Vec<String> = CommitType::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect();
    let kind: CommitType = prompter.select_one("Select commit type:", options)?.parse()?;

    let scope: String = prompter.text("Enter scope (optional, e.g., 'ci', 'database'):")?;
    let subject: String = prompt_until_valid(prompter, "Enter commit message:", validate_subject, out)?;

    let message = compose(kind, scope.trim(), subject.trim());
    tracing::debug!(%message, "composed commit message");
    git.execute(&["commit", "-m", &message])
}

pub fn push_changes(git: &impl VersionControl) -> Result<(), AppError> {
    git.execute(&["push"])
}

pub fn force_push_changes(git: &impl VersionControl) -> Result<(), AppError> {
    git.execute(&["push", "--force"])
}

/// Shows the staged diff; git's pager takes over the terminal
pub fn show_diff(git: &impl VersionControl) -> Result<(), AppError> {
    git.execute(&["diff", "--cached"])
}

/// Prints every commit type with a short description
pub fn show_type_recommendations(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{}", "Commit Type Recommendations:".blue())?;
    for (kind, description) in type_descriptions() {
        writeln!(out, "- {kind}: {description}")?;
    }
    Ok(())
}

// Profile handlers

pub fn add_profile(
    profiles_path: &Path,
    name: &str,
    display_name: &str,
    email: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut store = ProfileStore::load(profiles_path)?;
    store.add(name, display_name, email)?;
    writeln!(out, "{}", format!("Profile '{name}' added").green())?;
    Ok(())
}

pub fn list_profiles(profiles_path: &Path, out: &mut impl Write) -> Result<(), AppError> {
    let store = ProfileStore::load(profiles_path)?;
    if store.is_empty() {
        writeln!(out, "{}", "No profiles found".yellow())?;
        return Ok(());
    }

    writeln!(out, "{}", "Available profiles:".blue())?;
    for (name, profile) in store.list() {
        writeln!(out, "- {name}: {} <{}>", profile.display_name, profile.email)?;
    }
    Ok(())
}

/// Applies a stored profile to git's user.name and user.email.
///
/// The two config writes are not atomic: if setting the email fails, the
/// name stays applied and the error is returned.
pub fn use_profile(
    git: &impl VersionControl,
    profiles_path: &Path,
    name: &str,
    global: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let store = ProfileStore::load(profiles_path)?;
    let profile = store.get(name)?;
    let scope = if global { "--global" } else { "--local" };

    git.execute(&["config", scope, "user.name", &profile.display_name])?;
    if let Err(err) = git.execute(&["config", scope, "user.email", &profile.email]) {
        tracing::warn!(
            profile = name,
            scope,
            "user.email could not be set; user.name was already applied"
        );
        return Err(err);
    }

    let applied = if global { "globally" } else { "locally" };
    writeln!(
        out,
        "{}",
        format!(
            "Switched to profile '{name}' ({} <{}>) {applied}",
            profile.display_name, profile.email
        )
        .green()
    )?;
    Ok(())
}

pub fn remove_profile(profiles_path: &Path, name: &str, out: &mut impl Write) -> Result<(), AppError> {
    let mut store = ProfileStore::load(profiles_path)?;
    store.remove(name)?;
    writeln!(out, "{}", format!("Profile '{name}' removed").green())?;
    Ok(())
}
