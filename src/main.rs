mod cli;
mod commit;
mod error;
mod git;
mod handler;
mod logging;
mod profile;
mod prompt;
mod storage;
#[cfg(test)]
mod testing;
mod validation;

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;

use crate::{
    cli::{Cli, Commands, ProfileCommands},
    error::AppError,
    git::Git,
    prompt::InquirePrompter,
    storage::default_profile_path,
};

// Main
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {err}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

/// Dispatches the parsed command to its handler
fn run(cli: Cli) -> Result<(), AppError> {
    let git = Git::new();
    let prompter = InquirePrompter;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Add { files } => handler::add_files(&git, &prompter, &files, &mut out),
        Commands::Commit => handler::create_commit(&git, &prompter, &mut out),
        Commands::Push => handler::push_changes(&git),
        Commands::ForcePush => handler::force_push_changes(&git),
        Commands::Show => handler::show_type_recommendations(&mut out),
        Commands::Diff => handler::show_diff(&git),
        Commands::Profile { command } => {
            let profiles_path: PathBuf = match cli.profiles {
                Some(path) => path,
                None => default_profile_path()?,
            };
            match command {
                ProfileCommands::Add {
                    name,
                    display_name,
                    email,
                } => handler::add_profile(&profiles_path, &name, &display_name, &email, &mut out),
                ProfileCommands::List => handler::list_profiles(&profiles_path, &mut out),
                ProfileCommands::Use { name, global } => {
                    handler::use_profile(&git, &profiles_path, &name, global, &mut out)
                }
                ProfileCommands::Remove { name } => {
                    handler::remove_profile(&profiles_path, &name, &mut out)
                }
            }
        }
    }
}
