//! Ordering-prefix parsing for directory and file names.
//!
//! Content authors order folders manually by prefixing names with a number
//! (`01-introduction`, `2_setup`, `10. reference`). The prefix controls
//! on-disk ordering and must be stripped before a name is shown as a sidebar
//! label. Parsing is pluggable so sites with other naming schemes can supply
//! their own rules.

use std::sync::LazyLock;

use regex::Regex;

/// Ordering prefix: digits, then at least one of `-`, `_`, `.` or space.
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*[-_.]+\s*(.*)$").unwrap());

/// Result of parsing one file or directory name.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedName {
    /// The name with any ordering prefix removed.
    pub name: String,
    /// The numeric prefix, if one was present and fit in a `u32`.
    pub position: Option<u32>,
}

/// Splits a file or directory name into its display part and an optional
/// ordering number.
///
/// Implementations must be pure: the same input always yields the same
/// result within one generation pass.
pub trait OrderingPrefixParser: Send + Sync {
    /// Parse `name` into its display part and ordering number.
    fn parse(&self, name: &str) -> ParsedName;

    /// The display part of `name`, with any ordering prefix removed.
    fn strip(&self, name: &str) -> String {
        self.parse(name).name
    }
}

/// Default parser: strips `NN-`, `NN_`, `NN.` and `NN ` style prefixes.
///
/// A name that is nothing but a prefix (`"3."`) is left unchanged - stripping
/// it would leave an empty label.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberPrefixParser;

impl OrderingPrefixParser for NumberPrefixParser {
    fn parse(&self, name: &str) -> ParsedName {
        if let Some(captures) = NUMBER_PREFIX_RE.captures(name) {
            let suffix = &captures[2];
            if !suffix.is_empty() {
                return ParsedName {
                    name: suffix.to_owned(),
                    position: captures[1].parse().ok(),
                };
            }
        }
        ParsedName {
            name: name.to_owned(),
            position: None,
        }
    }
}

/// Parser that leaves every name verbatim (prefix parsing disabled).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityPrefixParser;

impl OrderingPrefixParser for IdentityPrefixParser {
    fn parse(&self, name: &str) -> ParsedName {
        ParsedName {
            name: name.to_owned(),
            position: None,
        }
    }
}
