//! Stable identifiers for checks, finding codes, and recognizers.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case
//! discriminator. Recognizer IDs name the "handled" patterns the auditor
//! accepts as sufficient error handling; they appear in policy toggles and
//! in `explain` output, never in findings.

// Checks
pub const CHECK_SHELL_UNHANDLED_FAILURE: &str = "shell.unhandled_failure";

// Codes: shell.unhandled_failure
pub const CODE_UNHANDLED_LINE: &str = "unhandled_line";

// Recognizers: explicit failure handling
pub const RULE_OR_FAIL: &str = "handled.or_fail";
pub const RULE_OR_BLOCK: &str = "handled.or_block";
pub const RULE_OR_TRUE: &str = "handled.or_true";
pub const RULE_PIPESTATUS_CHECK: &str = "handled.pipestatus_check";

// Recognizers: statements that cannot fail silently
pub const RULE_LINE_CONTINUATION: &str = "handled.line_continuation";
pub const RULE_FLOW_COMMAND: &str = "handled.flow_command";
pub const RULE_PLAIN_EXPORT: &str = "handled.plain_export";
pub const RULE_PLAIN_ASSIGNMENT: &str = "handled.plain_assignment";
pub const RULE_PLAIN_ECHO: &str = "handled.plain_echo";
pub const RULE_FUNCTION_OPENER: &str = "handled.function_opener";
pub const RULE_CLOSING_BRACKET: &str = "handled.closing_bracket";
pub const RULE_COMMENT: &str = "handled.comment";
pub const RULE_CONTROL_FLOW: &str = "handled.control_flow";
pub const RULE_ARRAY_APPEND: &str = "handled.array_append";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
