use super::{recognize, LineContext};
use crate::policy::EffectiveConfig;
use shellguard_types::ids;

fn recognized_as(text: &str) -> Option<&'static str> {
    let cfg = EffectiveConfig::default();
    recognize(&LineContext { text, next: None }, &cfg)
}

#[test]
fn escalation_idioms_are_credited_regardless_of_leading_content() {
    assert_eq!(
        recognized_as("some --long command || fail \"boom\""),
        Some(ids::RULE_OR_FAIL)
    );
    assert_eq!(
        recognized_as("umount /mnt || { log error; exit 1; }"),
        Some(ids::RULE_OR_BLOCK)
    );
    assert_eq!(recognized_as("rm -rf cache || true"), Some(ids::RULE_OR_TRUE));
}

#[test]
fn assignment_family() {
    assert_eq!(recognized_as("result=5"), Some(ids::RULE_PLAIN_ASSIGNMENT));
    assert_eq!(recognized_as("result=$(risky_cmd)"), None);
    assert_eq!(
        recognized_as("export MODE=release"),
        Some(ids::RULE_PLAIN_EXPORT)
    );
    assert_eq!(recognized_as("export REV=$(git rev-parse HEAD)"), None);
    assert_eq!(
        recognized_as("local attempts=0"),
        Some(ids::RULE_PLAIN_EXPORT)
    );
}

#[test]
fn echo_family() {
    assert_eq!(recognized_as("echo starting"), Some(ids::RULE_PLAIN_ECHO));
    assert_eq!(
        recognized_as("echo $((retries + 1))"),
        Some(ids::RULE_PLAIN_ECHO)
    );
    assert_eq!(recognized_as("echo \"rev: $(git rev-parse HEAD)\""), None);
    assert_eq!(recognized_as("echo data | tee file"), None);
}

#[test]
fn structural_syntax() {
    assert_eq!(
        recognized_as("if grep -q root /etc/passwd; then"),
        Some(ids::RULE_CONTROL_FLOW)
    );
    assert_eq!(recognized_as("fi"), Some(ids::RULE_CONTROL_FLOW));
    assert_eq!(recognized_as("install() {"), Some(ids::RULE_FUNCTION_OPENER));
    assert_eq!(recognized_as("}"), Some(ids::RULE_CLOSING_BRACKET));
    assert_eq!(recognized_as("# note"), Some(ids::RULE_COMMENT));
    assert_eq!(recognized_as("paths+=(/srv)"), Some(ids::RULE_ARRAY_APPEND));
    assert_eq!(
        recognized_as("set -euo pipefail"),
        Some(ids::RULE_FLOW_COMMAND)
    );
    assert_eq!(
        recognized_as("curl -o pkg.tgz \\"),
        Some(ids::RULE_LINE_CONTINUATION)
    );
}

#[test]
fn unguarded_commands_are_not_recognized() {
    for line in [
        "risky_cmd",
        "cp a b",
        "exit",
        "mount /dev/sda1 /mnt",
        "dump | compress > out.gz",
    ] {
        assert_eq!(recognized_as(line), None, "line: {line}");
    }
}

#[test]
fn pipestatus_needs_both_pipe_and_lookahead() {
    let cfg = EffectiveConfig::default();

    let piped_checked = LineContext {
        text: "dump | compress",
        next: Some("check ${PIPESTATUS[@]}"),
    };
    assert_eq!(
        recognize(&piped_checked, &cfg),
        Some(ids::RULE_PIPESTATUS_CHECK)
    );

    let unpiped = LineContext {
        text: "dump compress",
        next: Some("check ${PIPESTATUS[@]}"),
    };
    assert_eq!(recognize(&unpiped, &cfg), None);
}

#[test]
fn disabled_recognizers_are_skipped() {
    let cfg = EffectiveConfig::default().with_recognizer_disabled(ids::RULE_PLAIN_ECHO);
    let line = LineContext {
        text: "echo hello",
        next: None,
    };
    assert_eq!(recognize(&line, &cfg), None);
}
