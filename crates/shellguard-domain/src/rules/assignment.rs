//! Exports, locals, and bare variable assignments.
//!
//! A literal value cannot fail in a way worth checking. A value produced by
//! a command substitution can, so such lines fall through and get reported.

use super::LineContext;
use regex::Regex;
use std::sync::LazyLock;

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+\s*=").expect("valid pattern"));

fn has_command_substitution(text: &str) -> bool {
    text.contains("$(")
}

pub(super) fn plain_export(ctx: &LineContext<'_>) -> bool {
    let trimmed = ctx.text.trim_start();
    (trimmed.starts_with("export ") || trimmed.starts_with("local "))
        && !has_command_substitution(ctx.text)
}

pub(super) fn plain_assignment(ctx: &LineContext<'_>) -> bool {
    ASSIGNMENT.is_match(ctx.text) && !has_command_substitution(ctx.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ctx;

    #[test]
    fn literal_export_and_local_are_handled() {
        assert!(plain_export(&ctx("export PATH=/usr/bin")));
        assert!(plain_export(&ctx("  local retries=3")));
    }

    #[test]
    fn substituted_export_falls_through() {
        assert!(!plain_export(&ctx("export RELEASE=$(git describe)")));
        assert!(!plain_export(&ctx("local head=$(git rev-parse HEAD)")));
    }

    #[test]
    fn literal_assignment_is_handled() {
        assert!(plain_assignment(&ctx("result=5")));
        assert!(plain_assignment(&ctx("  target_dir=/srv/app")));
    }

    #[test]
    fn substituted_assignment_falls_through() {
        assert!(!plain_assignment(&ctx("result=$(risky_cmd)")));
    }

    #[test]
    fn non_assignments_do_not_match() {
        assert!(!plain_assignment(&ctx("run_thing --flag")));
    }
}
