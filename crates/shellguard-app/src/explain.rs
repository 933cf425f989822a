//! The `explain` use case: look up check/code/recognizer documentation.

use shellguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes the available identifiers.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_recognizer_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id, code, or recognizer id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_recognizer_ids: explain::all_recognizer_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (reported):\n");
    out.push_str("```sh\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (handled):\n");
    out.push_str("```sh\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    available_check_ids: &'static [&'static str],
    available_recognizer_ids: &'static [&'static str],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("unknown identifier: {}\n\n", identifier));
    out.push_str("Known check IDs:\n");
    for id in available_check_ids {
        out.push_str(&format!("  {}\n", id));
    }
    out.push_str("\nKnown recognizer IDs:\n");
    for id in available_recognizer_ids {
        out.push_str(&format!("  {}\n", id));
    }
    out
}
