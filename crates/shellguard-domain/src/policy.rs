use shellguard_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Verdict threshold: `Warning` fails the run on any finding.
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Severity assigned to unhandled-line findings.
    pub severity: Severity,
    /// Per-recognizer toggles; absent means enabled. Structural rules
    /// (heredoc/case tracking, blank lines, the report default) are not
    /// configurable.
    pub recognizers: BTreeMap<String, bool>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            fail_on: FailOn::Warning,
            max_findings: 500,
            severity: Severity::Warning,
            recognizers: BTreeMap::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn recognizer_enabled(&self, id: &str) -> bool {
        self.recognizers.get(id).copied().unwrap_or(true)
    }

    pub fn with_recognizer_disabled(mut self, id: &str) -> Self {
        self.recognizers.insert(id.to_string(), false);
        self
    }
}
