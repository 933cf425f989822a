//! Heredoc opener detection.
//!
//! Detection arms the scan state for the following lines; it does not by
//! itself exempt the opener line from classification.

use regex::Regex;
use std::sync::LazyLock;

// `<<` or `<<-`, optional opening quote, then the terminator identifier.
// `cat << EOF` (spaced) is deliberately not tracked.
static OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<-?'?(\w+)").expect("valid pattern"));

/// Return the heredoc terminator a line arms, if any.
pub(crate) fn opener_terminator(text: &str) -> Option<String> {
    OPENER
        .captures(text)
        .map(|caps| caps[1].to_string())
}
