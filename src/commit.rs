use std::{fmt, str::FromStr};

use crate::error::AppError;

/// Conventional commit types, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
    Perf,
    Ci,
    Build,
    Revert,
}

impl CommitType {
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Perf,
        CommitType::Ci,
        CommitType::Build,
        CommitType::Revert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Perf => "perf",
            CommitType::Ci => "ci",
            CommitType::Build => "build",
            CommitType::Revert => "revert",
        }
    }

    /// One-line summary shown by `gcm show`
    pub const fn description(self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Chore => "Changes to the build process or auxiliary tools",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Ci => "Changes to CI configuration files and scripts",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Revert => "Reverts a previous commit",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("unknown commit type '{s}'")))
    }
}

/// Every commit type paired with its description, in declaration order
pub fn type_descriptions() -> impl Iterator<Item = (CommitType, &'static str)> {
    CommitType::ALL
        .into_iter()
        .map(|kind| (kind, kind.description()))
}

/// Formats `type(scope): subject`, dropping the parentheses when `scope` is empty.
///
/// No escaping or length limits are applied.
pub fn compose(kind: CommitType, scope: &str, subject: &str) -> String {
    if scope.is_empty() {
        format!("{kind}: {subject}")
    } else {
        format!("{kind}({scope}): {subject}")
    }
}
