//! Explicit `|| ...` failure handling at the end of a statement.

use super::LineContext;
use regex::Regex;
use std::sync::LazyLock;

// `|| fail` may carry a message argument, so it is not anchored to the end.
static OR_FAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|\s+fail(\s|$)").expect("valid pattern"));

static OR_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|\s+\{.*\}\s*$").expect("valid pattern"));

static OR_TRUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|\s+true\s*$").expect("valid pattern"));

pub(super) fn or_fail(ctx: &LineContext<'_>) -> bool {
    OR_FAIL.is_match(ctx.text)
}

pub(super) fn or_block(ctx: &LineContext<'_>) -> bool {
    OR_BLOCK.is_match(ctx.text)
}

pub(super) fn or_true(ctx: &LineContext<'_>) -> bool {
    OR_TRUE.is_match(ctx.text)
}
