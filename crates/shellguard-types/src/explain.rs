//! Explain registry for checks, codes, and recognizers.
//!
//! Maps identifiers to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check, code, or recognizer.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the identifier.
    pub title: &'static str,
    /// What it means and why it exists.
    pub description: &'static str,
    /// How to fix violations (or what the recognizer accepts).
    pub remediation: &'static str,
    /// Before/after script examples.
    pub examples: ExamplePair,
}

/// Before and after script examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the audit.
    pub after: &'static str,
}

/// Look up an explanation by check_id, code, or recognizer id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_SHELL_UNHANDLED_FAILURE | ids::CODE_UNHANDLED_LINE => {
            Some(explain_unhandled_line())
        }

        ids::RULE_OR_FAIL => Some(explain_or_fail()),
        ids::RULE_OR_BLOCK => Some(explain_or_block()),
        ids::RULE_OR_TRUE => Some(explain_or_true()),
        ids::RULE_PIPESTATUS_CHECK => Some(explain_pipestatus_check()),
        ids::RULE_LINE_CONTINUATION => Some(explain_line_continuation()),
        ids::RULE_FLOW_COMMAND => Some(explain_flow_command()),
        ids::RULE_PLAIN_EXPORT => Some(explain_plain_export()),
        ids::RULE_PLAIN_ASSIGNMENT => Some(explain_plain_assignment()),
        ids::RULE_PLAIN_ECHO => Some(explain_plain_echo()),
        ids::RULE_FUNCTION_OPENER => Some(explain_function_opener()),
        ids::RULE_CLOSING_BRACKET => Some(explain_closing_bracket()),
        ids::RULE_COMMENT => Some(explain_comment()),
        ids::RULE_CONTROL_FLOW => Some(explain_control_flow()),
        ids::RULE_ARRAY_APPEND => Some(explain_array_append()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_SHELL_UNHANDLED_FAILURE]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_UNHANDLED_LINE]
}

/// List all recognizer IDs, in evaluation order.
pub fn all_recognizer_ids() -> &'static [&'static str] {
    &[
        ids::RULE_OR_FAIL,
        ids::RULE_OR_BLOCK,
        ids::RULE_OR_TRUE,
        ids::RULE_LINE_CONTINUATION,
        ids::RULE_FLOW_COMMAND,
        ids::RULE_PLAIN_EXPORT,
        ids::RULE_PLAIN_ASSIGNMENT,
        ids::RULE_PLAIN_ECHO,
        ids::RULE_FUNCTION_OPENER,
        ids::RULE_CLOSING_BRACKET,
        ids::RULE_COMMENT,
        ids::RULE_CONTROL_FLOW,
        ids::RULE_ARRAY_APPEND,
        ids::RULE_PIPESTATUS_CHECK,
    ]
}

fn explain_unhandled_line() -> Explanation {
    Explanation {
        title: "Unhandled Statement Failure",
        description: "\
A statement was found whose failure would not be detected or handled by the
surrounding script. The auditor is heuristic: it accepts a fixed set of
failure-handling idioms and reports everything else, preferring false
positives over silently passing an unchecked failure.",
        remediation: "\
Escalate the failure (`|| fail`), handle it inline (`|| { ...; }`), suppress
it explicitly (`|| true`), wrap the statement in an `if`, or check
`PIPESTATUS` on the next line for pipelines.",
        examples: ExamplePair {
            before: "rsync -a src/ dest/",
            after: "rsync -a src/ dest/ || fail \"sync failed\"",
        },
    }
}

fn explain_or_fail() -> Explanation {
    Explanation {
        title: "Failure Escalation",
        description: "Lines ending in `|| fail` (optionally with a message) escalate the failure.",
        remediation: "No action needed; this is an accepted idiom.",
        examples: ExamplePair {
            before: "mkfs.ext4 \"$dev\"",
            after: "mkfs.ext4 \"$dev\" || fail \"mkfs failed\"",
        },
    }
}

fn explain_or_block() -> Explanation {
    Explanation {
        title: "Inline Failure Handler",
        description: "Lines ending in `|| { ... }` handle the failure in an inline block.",
        remediation: "No action needed; this is an accepted idiom.",
        examples: ExamplePair {
            before: "umount /mnt",
            after: "umount /mnt || { echo \"umount failed\"; exit 1; }",
        },
    }
}

fn explain_or_true() -> Explanation {
    Explanation {
        title: "Explicit Failure Suppression",
        description: "\
Lines ending in `|| true` declare that the failure is intentionally ignored.
The audit accepts the declaration; it does not judge whether ignoring is wise.",
        remediation: "No action needed; this is an accepted idiom.",
        examples: ExamplePair {
            before: "rm -f /tmp/scratch",
            after: "rm -f /tmp/scratch || true",
        },
    }
}

fn explain_pipestatus_check() -> Explanation {
    Explanation {
        title: "PIPESTATUS Check",
        description: "\
A piped command is accepted when the immediately following line inspects
`PIPESTATUS`. Only one line of lookahead is used.",
        remediation: "Check the pipeline's exit statuses on the very next line.",
        examples: ExamplePair {
            before: "dump | compress > out.gz",
            after: "dump | compress > out.gz\n[ \"${PIPESTATUS[0]}\" -eq 0 ] || fail \"dump failed\"",
        },
    }
}

fn explain_line_continuation() -> Explanation {
    Explanation {
        title: "Line Continuation",
        description: "\
A trailing backslash means the statement continues on the next line; the
classification applies to the line that terminates the statement.",
        remediation: "Handle the failure on the final line of the statement.",
        examples: ExamplePair {
            before: "tar czf backup.tgz /etc",
            after: "tar czf backup.tgz \\\n  /etc || fail",
        },
    }
}

fn explain_flow_command() -> Explanation {
    Explanation {
        title: "Flow Command",
        description: "\
`set`, `return`, `exit`, and `fail` commands direct control flow; their own
failure modes are not meaningful to this audit.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "run_thing",
            after: "exit 1",
        },
    }
}

fn explain_plain_export() -> Explanation {
    Explanation {
        title: "Literal Export or Local",
        description: "\
`export` and `local` of literal values cannot fail in a way worth checking.
When the value comes from a command substitution (`$(...)`), the substituted
command can fail, so such lines are reported.",
        remediation: "\
Split the substitution into its own checked assignment, then export the
variable.",
        examples: ExamplePair {
            before: "export RELEASE=$(git describe)",
            after: "RELEASE=$(git describe) || fail\nexport RELEASE",
        },
    }
}

fn explain_plain_assignment() -> Explanation {
    Explanation {
        title: "Literal Assignment",
        description: "\
Bare variable assignments of literal values are handled. Assignments from a
command substitution are reported: the substituted command can fail and the
assignment would quietly keep an empty value.",
        remediation: "Check the substitution (`var=$(cmd) || fail`).",
        examples: ExamplePair {
            before: "result=$(risky_cmd)",
            after: "result=$(risky_cmd) || fail \"risky_cmd failed\"",
        },
    }
}

fn explain_plain_echo() -> Explanation {
    Explanation {
        title: "Plain Echo",
        description: "\
Literal `echo` lines cannot fail meaningfully. Echoes that run a command
substitution or feed a pipe are reported; `$((arithmetic))` stays handled.",
        remediation: "Check the substituted command separately.",
        examples: ExamplePair {
            before: "echo \"now: $(date)\"",
            after: "now=$(date) || fail\necho \"now: $now\"",
        },
    }
}

fn explain_function_opener() -> Explanation {
    Explanation {
        title: "Function Definition Opener",
        description: "`name() {` and `name() (` lines open a function body; pure syntax.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "deploy",
            after: "deploy() {",
        },
    }
}

fn explain_closing_bracket() -> Explanation {
    Explanation {
        title: "Closing Bracket",
        description: "A bare `}` or `)` closes a block; pure syntax.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "cleanup",
            after: "}",
        },
    }
}

fn explain_comment() -> Explanation {
    Explanation {
        title: "Comment",
        description: "Comment lines are never commands.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "do_thing",
            after: "# do_thing is handled below",
        },
    }
}

fn explain_control_flow() -> Explanation {
    Explanation {
        title: "Control-Flow Syntax",
        description: "\
`if ...; then`, `elif ...; then`, `else`, `fi`, `done`, bare `true`/`false`,
and a bare opening paren are structural; they cannot fail silently.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "grep -q x file",
            after: "if grep -q x file; then",
        },
    }
}

fn explain_array_append() -> Explanation {
    Explanation {
        title: "Array Append",
        description: "In-place array appends (`name+=(...)`) are handled.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "args=$(build_args)",
            after: "args+=(--verbose)",
        },
    }
}
