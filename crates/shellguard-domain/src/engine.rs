use crate::fingerprint::fingerprint_for_line;
use crate::model::{AuditModel, ScanState, ScriptModel, SourceLine};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::rules::{self, case_block, heredoc, LineContext};
use serde_json::json;
use shellguard_types::{ids, AuditData, Finding, Location, Severity, Verdict};

/// Evaluate every script in the model and assemble the domain report.
///
/// Findings keep scan order: script order per invocation, line order per
/// script. No re-sorting happens, so two runs over the same input produce
/// identical reports.
pub fn evaluate(model: &AuditModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings = Vec::new();
    for script in &model.scripts {
        findings.extend(scan_script(script, cfg));
    }
    let scripts_scanned = model.scripts.len() as u32;
    let lines_scanned = model.scripts.iter().map(ScriptModel::line_count).sum();
    assemble(findings, scripts_scanned, lines_scanned, cfg)
}

/// Scan one script. Each call owns a fresh [`ScanState`], so concurrent
/// per-script invocations stay isolated.
pub fn scan_script(script: &ScriptModel, cfg: &EffectiveConfig) -> Vec<Finding> {
    LineScanner::new(script, cfg).collect()
}

/// Turn accumulated findings into a report: truncate, count, decide verdict.
pub fn assemble(
    findings: Vec<Finding>,
    scripts_scanned: u32,
    lines_scanned: u32,
    cfg: &EffectiveConfig,
) -> DomainReport {
    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = AuditData {
        scripts_scanned,
        lines_scanned,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

/// Lazy finding iterator over one script's lines.
///
/// Single forward pass; the only lookahead is the next physical line, which
/// the PIPESTATUS recognizer needs.
pub struct LineScanner<'a> {
    script: &'a ScriptModel,
    cfg: &'a EffectiveConfig,
    idx: usize,
    state: ScanState,
}

impl<'a> LineScanner<'a> {
    pub fn new(script: &'a ScriptModel, cfg: &'a EffectiveConfig) -> Self {
        Self {
            script,
            cfg,
            idx: 0,
            state: ScanState::default(),
        }
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Finding> {
        while self.idx < self.script.lines.len() {
            let line = &self.script.lines[self.idx];
            let next = self
                .script
                .lines
                .get(self.idx + 1)
                .map(|l| l.text.as_str());
            self.idx += 1;

            if classify_line(&line.text, next, &mut self.state, self.cfg) == Disposition::Report {
                return Some(unhandled_line_finding(self.script, line, self.cfg));
            }
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Disposition {
    Handled,
    Report,
}

/// The per-line decision, in the fixed priority order. First match wins.
fn classify_line(
    text: &str,
    next: Option<&str>,
    state: &mut ScanState,
    cfg: &EffectiveConfig,
) -> Disposition {
    // 1. Heredoc body: skip verbatim until the terminator line.
    if let Some(terminator) = state.heredoc_terminator.as_deref() {
        if text == terminator {
            state.heredoc_terminator = None;
        }
        return Disposition::Handled;
    }

    // 2. Heredoc opener arms the state for following lines; the opener
    //    line itself still runs through the remaining rules.
    if let Some(terminator) = heredoc::opener_terminator(text) {
        state.heredoc_terminator = Some(terminator);
    }

    // 3-5. Case-block structure.
    if case_block::is_opener(text) {
        state.in_case_block = true;
        return Disposition::Handled;
    }
    if state.in_case_block && case_block::is_arm_boundary(text) {
        return Disposition::Handled;
    }
    if case_block::is_closer(text) {
        state.in_case_block = false;
        return Disposition::Handled;
    }

    // 6. Blank lines.
    if text.trim().is_empty() {
        return Disposition::Handled;
    }

    // 7. General recognizer set.
    let ctx = LineContext { text, next };
    if rules::recognize(&ctx, cfg).is_some() {
        return Disposition::Handled;
    }

    // 8. Nothing accepted the line.
    Disposition::Report
}

fn unhandled_line_finding(
    script: &ScriptModel,
    line: &SourceLine,
    cfg: &EffectiveConfig,
) -> Finding {
    let fingerprint = fingerprint_for_line(
        ids::CHECK_SHELL_UNHANDLED_FAILURE,
        ids::CODE_UNHANDLED_LINE,
        script.path.as_str(),
        line.number,
        &line.text,
    );

    let command = line.text.split_whitespace().next().unwrap_or_default();

    Finding {
        severity: cfg.severity,
        check_id: ids::CHECK_SHELL_UNHANDLED_FAILURE.to_string(),
        code: ids::CODE_UNHANDLED_LINE.to_string(),
        message: format!("failure of `{}` is not detected or handled", command),
        location: Some(Location {
            path: script.path.clone(),
            line: Some(line.number),
            col: None,
        }),
        help: Some(
            "Escalate with `|| fail`, handle with `|| { ... }`, suppress with `|| true`, or check PIPESTATUS on the next line."
                .to_string(),
        ),
        url: None,
        fingerprint: Some(fingerprint),
        data: json!({
            "text": line.text,
            "command": command,
        }),
    }
}
