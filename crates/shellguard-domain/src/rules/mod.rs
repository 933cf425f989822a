//! The ordered recognizer registry.
//!
//! Each recognizer is a named predicate over one line (plus the one-line
//! lookahead the PIPESTATUS rule needs). A line matching any enabled
//! recognizer is handled; evaluation order is fixed, although the general
//! set is made of independent alternatives so order only decides which id
//! gets credited.

use crate::policy::EffectiveConfig;
use shellguard_types::ids;

mod assignment;
pub(crate) mod case_block;
mod control_flow;
mod echo;
mod escalation;
pub(crate) mod heredoc;
mod pipeline;

#[cfg(test)]
mod tests;

/// One line under classification. `next` is the raw following physical
/// line, when there is one.
#[derive(Clone, Copy, Debug)]
pub struct LineContext<'a> {
    pub text: &'a str,
    pub next: Option<&'a str>,
}

struct Recognizer {
    id: &'static str,
    matches: fn(&LineContext<'_>) -> bool,
}

const RECOGNIZERS: &[Recognizer] = &[
    Recognizer {
        id: ids::RULE_OR_FAIL,
        matches: escalation::or_fail,
    },
    Recognizer {
        id: ids::RULE_OR_BLOCK,
        matches: escalation::or_block,
    },
    Recognizer {
        id: ids::RULE_OR_TRUE,
        matches: escalation::or_true,
    },
    Recognizer {
        id: ids::RULE_LINE_CONTINUATION,
        matches: control_flow::line_continuation,
    },
    Recognizer {
        id: ids::RULE_FLOW_COMMAND,
        matches: control_flow::flow_command,
    },
    Recognizer {
        id: ids::RULE_PLAIN_EXPORT,
        matches: assignment::plain_export,
    },
    Recognizer {
        id: ids::RULE_PLAIN_ASSIGNMENT,
        matches: assignment::plain_assignment,
    },
    Recognizer {
        id: ids::RULE_PLAIN_ECHO,
        matches: echo::plain_echo,
    },
    Recognizer {
        id: ids::RULE_FUNCTION_OPENER,
        matches: control_flow::function_opener,
    },
    Recognizer {
        id: ids::RULE_CLOSING_BRACKET,
        matches: control_flow::closing_bracket,
    },
    Recognizer {
        id: ids::RULE_COMMENT,
        matches: control_flow::comment,
    },
    Recognizer {
        id: ids::RULE_CONTROL_FLOW,
        matches: control_flow::control_keyword,
    },
    Recognizer {
        id: ids::RULE_ARRAY_APPEND,
        matches: control_flow::array_append,
    },
    Recognizer {
        id: ids::RULE_PIPESTATUS_CHECK,
        matches: pipeline::pipestatus_check,
    },
];

/// Return the id of the first enabled recognizer accepting the line, if any.
pub fn recognize(ctx: &LineContext<'_>, cfg: &EffectiveConfig) -> Option<&'static str> {
    RECOGNIZERS
        .iter()
        .filter(|r| cfg.recognizer_enabled(r.id))
        .find(|r| (r.matches)(ctx))
        .map(|r| r.id)
}

#[cfg(test)]
pub(crate) fn ctx(text: &str) -> LineContext<'_> {
    LineContext { text, next: None }
}
