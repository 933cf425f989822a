//! Pipelines checked via `PIPESTATUS` on the following line.

use super::LineContext;
use regex::Regex;
use std::sync::LazyLock;

static PIPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\|\s").expect("valid pattern"));

/// One line of lookahead only: a piped command is accepted when the next
/// physical line inspects `PIPESTATUS`.
pub(super) fn pipestatus_check(ctx: &LineContext<'_>) -> bool {
    PIPE.is_match(ctx.text)
        && ctx
            .next
            .map(|next| next.contains("PIPESTATUS"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LineContext;

    #[test]
    fn accepted_when_next_line_checks_pipestatus() {
        let line = LineContext {
            text: "dump | compress > out.gz",
            next: Some("[ \"${PIPESTATUS[0]}\" -eq 0 ] || fail"),
        };
        assert!(pipestatus_check(&line));
    }

    #[test]
    fn rejected_without_lookahead_hit() {
        let line = LineContext {
            text: "dump | compress > out.gz",
            next: Some("echo done"),
        };
        assert!(!pipestatus_check(&line));

        let last = LineContext {
            text: "dump | compress > out.gz",
            next: None,
        };
        assert!(!pipestatus_check(&last));
    }

    #[test]
    fn requires_a_spaced_pipe() {
        let line = LineContext {
            text: "echo a|b",
            next: Some("PIPESTATUS"),
        };
        assert!(!pipestatus_check(&line));
    }
}
