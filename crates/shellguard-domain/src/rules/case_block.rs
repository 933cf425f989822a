//! `case ... in` block structure.

use regex::Regex;
use std::sync::LazyLock;

static OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*case\s+.*\s*in\s*$").expect("valid pattern"));

pub(crate) fn is_opener(text: &str) -> bool {
    OPENER.is_match(text)
}

/// Arm labels end in `)`; arm terminators are bare `;;` lines. Anything
/// else inside the block falls through to the general recognizers.
pub(crate) fn is_arm_boundary(text: &str) -> bool {
    text.trim() == ";;" || text.trim_end().ends_with(')')
}

pub(crate) fn is_closer(text: &str) -> bool {
    text.trim() == "esac"
}
