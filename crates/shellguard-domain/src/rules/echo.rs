//! `echo` lines.

use super::LineContext;
use regex::Regex;
use std::sync::LazyLock;

// `$(` followed by anything but `(` is a real command substitution;
// `$((...))` arithmetic stays handled.
static COMMAND_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^(]").expect("valid pattern"));

pub(super) fn plain_echo(ctx: &LineContext<'_>) -> bool {
    ctx.text.trim_start().starts_with("echo ")
        && !COMMAND_SUBSTITUTION.is_match(ctx.text)
        && !ctx.text.contains('|')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ctx;

    #[test]
    fn literal_echo_is_handled() {
        assert!(plain_echo(&ctx("echo \"starting install\"")));
        assert!(plain_echo(&ctx("  echo done")));
    }

    #[test]
    fn arithmetic_expansion_stays_handled() {
        assert!(plain_echo(&ctx("echo $((count + 1))")));
    }

    #[test]
    fn command_substitution_falls_through() {
        assert!(!plain_echo(&ctx("echo \"now: $(date)\"")));
    }

    #[test]
    fn piped_echo_falls_through() {
        assert!(!plain_echo(&ctx("echo secret | sha256sum")));
    }
}
