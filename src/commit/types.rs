// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The closed set of Conventional Commits type tokens.

use serde::Serialize;

/// Commit type token.
///
/// The set is fixed. Parsing is exact and case-sensitive; aliases are only
/// consulted when building hints, see [`CommitType::suggest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

/// Word endings accepted after a type token in hints (`Fixed`, `Refactoring`).
const INFLECTIONS: &[&str] = &["ed", "d", "es", "s", "ing"];

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    /// Get all commit types, in diagnostic order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
        ]
    }

    /// Comma-joined list of every type token.
    pub fn joined() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Guess the type a free-form word was meant to be.
    ///
    /// Case-insensitive. Tries the exact token, then common aliases, then a
    /// token followed by an inflection such as `ed` or `ing`.
    pub fn suggest(word: &str) -> Option<CommitType> {
        let word = word.to_lowercase();

        if let Ok(commit_type) = word.parse::<CommitType>() {
            return Some(commit_type);
        }

        let alias = match word.as_str() {
            "feature" | "features" => Some(CommitType::Feat),
            "bugfix" | "hotfix" => Some(CommitType::Fix),
            "doc" => Some(CommitType::Docs),
            "performance" => Some(CommitType::Perf),
            "tests" => Some(CommitType::Test),
            _ => None,
        };
        if alias.is_some() {
            return alias;
        }

        Self::all().iter().copied().find(|t| {
            word.strip_prefix(t.as_str())
                .is_some_and(|ending| INFLECTIONS.contains(&ending))
        })
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_type_from_str() {
        assert_eq!("feat".parse::<CommitType>(), Ok(CommitType::Feat));
        assert_eq!("ci".parse::<CommitType>(), Ok(CommitType::Ci));
        assert!("FIX".parse::<CommitType>().is_err());
        assert!("feature".parse::<CommitType>().is_err());
        assert!("unknown".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_commit_type_display() {
        assert_eq!(CommitType::Feat.to_string(), "feat");
        assert_eq!(CommitType::Refactor.to_string(), "refactor");
    }

    #[test]
    fn test_joined_order() {
        assert_eq!(
            CommitType::joined(),
            "feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert"
        );
    }

    #[test]
    fn test_every_type_round_trips_through_str() {
        for commit_type in CommitType::all() {
            assert_eq!(commit_type.as_str().parse::<CommitType>(), Ok(*commit_type));
        }
    }

    #[test]
    fn test_suggest() {
        assert_eq!(CommitType::suggest("Fixed"), Some(CommitType::Fix));
        assert_eq!(CommitType::suggest("FEAT"), Some(CommitType::Feat));
        assert_eq!(CommitType::suggest("feature"), Some(CommitType::Feat));
        assert_eq!(CommitType::suggest("Refactoring"), Some(CommitType::Refactor));
        assert_eq!(CommitType::suggest("docs"), Some(CommitType::Docs));
        assert_eq!(CommitType::suggest("Styled"), Some(CommitType::Style));
        assert_eq!(CommitType::suggest("Builds"), Some(CommitType::Build));
        assert_eq!(CommitType::suggest("circle"), None);
        assert_eq!(CommitType::suggest("update"), None);
    }

    #[test]
    fn test_suggest_ignores_longer_words() {
        assert_eq!(CommitType::suggest("Perfect"), None);
        assert_eq!(CommitType::suggest("Fixture"), None);
        assert_eq!(CommitType::suggest("Testament"), None);
        assert_eq!(CommitType::suggest("Documentation"), None);
    }
}
