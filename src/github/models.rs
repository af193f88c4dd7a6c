//! Data models for language statistics and verification reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language name GitHub uses for TypeScript sources.
const TYPESCRIPT: &str = "TypeScript";

/// Language name GitHub uses for JavaScript sources.
const JAVASCRIPT: &str = "JavaScript";

/// Byte counts per language as reported by the GitHub languages resource.
///
/// Keys are whatever labels GitHub assigns (`"TypeScript"`, `"HTML"`,
/// `"Python"`, ...); values are source byte counts. The mapping is stored in
/// key order so serialised output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageBreakdown(BTreeMap<String, u64>);

impl LanguageBreakdown {
    /// Total byte count across all languages.
    ///
    /// Widened to `u128` so summing cannot overflow on pathological inputs.
    #[must_use]
    pub fn total_bytes(&self) -> u128 {
        self.0.values().map(|bytes| u128::from(*bytes)).sum()
    }

    /// Combined byte count of the TypeScript and JavaScript entries.
    #[must_use]
    pub fn script_bytes(&self) -> u128 {
        [TYPESCRIPT, JAVASCRIPT]
            .iter()
            .filter_map(|language| self.0.get(*language))
            .map(|bytes| u128::from(*bytes))
            .sum()
    }

    /// Returns true when TypeScript plus JavaScript bytes form a strict
    /// majority (> 50%) of the total.
    ///
    /// An empty mapping, or one whose counts are all zero, is never a
    /// majority. Exactly half does not qualify. The comparison is integer
    /// arithmetic, so there is no division and no rounding ambiguity.
    #[must_use]
    pub fn has_script_majority(&self) -> bool {
        let total = self.total_bytes();
        total > 0 && self.script_bytes() * 2 > total
    }

    /// Returns a copy of the breakdown restricted to the TypeScript and
    /// JavaScript entries.
    #[must_use]
    pub fn script_languages(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(language, _)| {
                    language.as_str() == TYPESCRIPT || language.as_str() == JAVASCRIPT
                })
                .map(|(language, bytes)| (language.clone(), *bytes))
                .collect(),
        )
    }

    /// True when no languages were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'value> FromIterator<(&'value str, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (&'value str, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(language, bytes)| (language.to_owned(), bytes))
                .collect(),
        )
    }
}

/// Response payload for a repository verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Canonical `owner/name` identifier reconstructed from the parsed URL.
    pub repository: String,
    /// Whether TypeScript plus JavaScript bytes form a strict majority.
    pub is_javascript_typescript: bool,
    /// The full language breakdown as returned by GitHub.
    pub languages: LanguageBreakdown,
}

/// Response payload for processing a TypeScript/JavaScript repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptLanguagesReport {
    /// Canonical `owner/name` identifier reconstructed from the parsed URL.
    pub repository: String,
    /// The breakdown restricted to TypeScript and JavaScript entries.
    pub languages: LanguageBreakdown,
}
