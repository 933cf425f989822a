//! Structural syntax and flow commands that cannot fail silently.

use super::LineContext;
use regex::Regex;
use std::sync::LazyLock;

// Function names allow word characters, hyphen, and colon. Anchored at
// column 0: the original convention keeps definitions unindented.
static FUNCTION_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-:]+\s*\(\)\s*[{(]\s*$").expect("valid pattern"));

static IF_THEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*if\s+.*;\s+then\s*$").expect("valid pattern"));

static ELIF_THEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*elif\s+.*;\s+then\s*$").expect("valid pattern"));

static ARRAY_APPEND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+\+=\(.*\)\s*$").expect("valid pattern"));

pub(super) fn line_continuation(ctx: &LineContext<'_>) -> bool {
    ctx.text.trim_end().ends_with('\\')
}

pub(super) fn flow_command(ctx: &LineContext<'_>) -> bool {
    let trimmed = ctx.text.trim_start();
    ["set ", "return ", "exit ", "fail "]
        .iter()
        .any(|kw| trimmed.starts_with(kw))
}

pub(super) fn function_opener(ctx: &LineContext<'_>) -> bool {
    FUNCTION_OPENER.is_match(ctx.text)
}

pub(super) fn closing_bracket(ctx: &LineContext<'_>) -> bool {
    matches!(ctx.text.trim(), "}" | ")")
}

pub(super) fn comment(ctx: &LineContext<'_>) -> bool {
    ctx.text.trim_start().starts_with('#')
}

pub(super) fn control_keyword(ctx: &LineContext<'_>) -> bool {
    if IF_THEN.is_match(ctx.text) || ELIF_THEN.is_match(ctx.text) {
        return true;
    }
    matches!(ctx.text.trim(), "else" | "fi" | "done" | "true" | "false" | "(")
}

pub(super) fn array_append(ctx: &LineContext<'_>) -> bool {
    ARRAY_APPEND.is_match(ctx.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ctx;

    #[test]
    fn continuation_allows_trailing_whitespace() {
        assert!(line_continuation(&ctx("tar czf out.tgz \\")));
        assert!(line_continuation(&ctx("tar czf out.tgz \\  ")));
        assert!(!line_continuation(&ctx("tar czf out.tgz")));
    }

    #[test]
    fn flow_commands_require_an_argument() {
        assert!(flow_command(&ctx("set -euo pipefail")));
        assert!(flow_command(&ctx("  return 1")));
        assert!(flow_command(&ctx("exit 0")));
        assert!(flow_command(&ctx("fail \"bad state\"")));
        // A bare `exit` is left to the default rule.
        assert!(!flow_command(&ctx("exit")));
    }

    #[test]
    fn function_openers_match_both_body_styles() {
        assert!(function_opener(&ctx("install_deps() {")));
        assert!(function_opener(&ctx("spawn:worker() (")));
        assert!(function_opener(&ctx("re-try() {")));
        // Indented definitions are not recognized.
        assert!(!function_opener(&ctx("  nested() {")));
        assert!(!function_opener(&ctx("install_deps()")));
    }

    #[test]
    fn bare_brackets_and_comments() {
        assert!(closing_bracket(&ctx("}")));
        assert!(closing_bracket(&ctx("  )")));
        assert!(!closing_bracket(&ctx("} || true")));
        assert!(comment(&ctx("# configure the loopback")));
    }

    #[test]
    fn keywords_and_if_then_forms() {
        assert!(control_keyword(&ctx("if [ -f /etc/fstab ]; then")));
        assert!(control_keyword(&ctx("elif [ -d /mnt ]; then")));
        for kw in ["else", "fi", "done", "true", "false", "("] {
            assert!(control_keyword(&ctx(kw)), "keyword: {kw}");
        }
        // `if` without `; then` on the same line is not structural.
        assert!(!control_keyword(&ctx("if [ -f /etc/fstab ]")));
    }

    #[test]
    fn array_append_forms() {
        assert!(array_append(&ctx("args+=(--verbose)")));
        assert!(array_append(&ctx("  mounts+=(\"$dev\")")));
        assert!(!array_append(&ctx("args=(--verbose)")));
    }
}
