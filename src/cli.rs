use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(name = "gcm", version, about = "Git Conventional Commit Manager")]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profiles file to use instead of ~/.gcm_profiles.json
    #[arg(long, global = true, env = "GCM_PROFILES", value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Commands,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage files for commit, choosing interactively when none are given
    #[command(visible_alias = "a")]
    Add {
        /// Files to stage
        files: Vec<String>,
    },
    /// Create a conventional commit
    #[command(visible_alias = "c")]
    Commit,
    /// Push changes to remote
    #[command(visible_alias = "p")]
    Push,
    /// Force push changes to remote
    #[command(visible_alias = "fp")]
    ForcePush,
    /// Show commit type recommendations
    #[command(visible_alias = "s")]
    Show,
    /// Show the diff of staged changes
    #[command(visible_alias = "d")]
    Diff,
    /// Manage Git user profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Add a new profile
    Add {
        /// Unique profile name
        name: String,
        /// Git username (user.name)
        display_name: String,
        /// Git email (user.email)
        email: String,
    },
    /// List all profiles
    List,
    /// Switch to a profile
    Use {
        /// Profile to apply
        name: String,
        /// Apply profile globally instead of to the current repository
        #[arg(long)]
        global: bool,
    },
    /// Remove a profile
    Remove {
        /// Profile to remove
        name: String,
    },
}
