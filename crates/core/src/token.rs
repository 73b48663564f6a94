//! Macro token scanning.
//!
//! A macro token is `$(` followed by one or more ASCII letters or underscores
//! and a closing `)`. Anything else, including unbalanced parentheses or
//! digits in the name, is plain text and never matched.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

static MACRO_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([A-Za-z_]+\)").expect("macro token pattern is valid"));

/// A single macro token found in an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroToken {
    /// Literal token text, delimiters included, e.g. `$(SolutionDir)`.
    pub text: String,
    /// Byte offset of the leading `$`.
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
}

impl MacroToken {
    /// The bare macro name between `$(` and `)`.
    pub fn name(&self) -> &str {
        &self.text[2..self.text.len() - 1]
    }
}

impl Display for MacroToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Finds all non-overlapping macro tokens in `input`, left to right.
///
/// # Examples
///
/// ```
/// use macro_eval_core::token::find_tokens;
///
/// let input = "$(ProjectDir)bin/$(Configuration)";
/// let tokens = find_tokens(input);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].name(), "ProjectDir");
/// assert_eq!(tokens[1].start, 17);
/// assert!(tokens.iter().all(|token| input[token.start..token.end] == token.text));
/// ```
pub fn find_tokens(input: &str) -> Vec<MacroToken> {
    MACRO_TOKEN
        .find_iter(input)
        .map(|found| MacroToken {
            text: found.as_str().to_string(),
            start: found.start(),
            end: found.end(),
        })
        .collect()
}

/// Unique token literals of `input` in order of first appearance.
pub fn token_set(input: &str) -> IndexSet<String> {
    MACRO_TOKEN
        .find_iter(input)
        .map(|found| found.as_str().to_string())
        .collect()
}
