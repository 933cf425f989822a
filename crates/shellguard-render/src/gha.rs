use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", loc.path));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
            if let Some(col) = loc.col {
                meta.push_str(&format!(",col={}", col));
            }
        }

        let check_id = f.check_id.as_deref().unwrap_or("shellguard");
        let message = format!("[{}:{}] {}", check_id, f.code, f.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableData, RenderableFinding, RenderableLocation, RenderableReport,
        RenderableVerdictStatus,
    };

    #[test]
    fn annotation_carries_file_and_line() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Warning,
                check_id: Some("shell.unhandled_failure".to_string()),
                code: "unhandled_line".to_string(),
                message: "failure of `mount` is not detected or handled".to_string(),
                location: Some(RenderableLocation {
                    path: "setup/install.sh".to_string(),
                    line: Some(7),
                    col: None,
                }),
                line_text: None,
                help: None,
                url: None,
            }],
            data: RenderableData {
                findings_emitted: 1,
                findings_total: 1,
                truncated_reason: None,
            },
        };

        let annotations = render_github_annotations(&report);
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].starts_with("::warning file=setup/install.sh,line=7::"));
        assert!(annotations[0].contains("[shell.unhandled_failure:unhandled_line]"));
    }

    #[test]
    fn newlines_in_messages_are_escaped() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: None,
                code: "runtime_error".to_string(),
                message: "first\nsecond".to_string(),
                location: None,
                line_text: None,
                help: None,
                url: None,
            }],
            data: RenderableData {
                findings_emitted: 1,
                findings_total: 1,
                truncated_reason: None,
            },
        };

        let annotations = render_github_annotations(&report);
        assert!(annotations[0].contains("first%0Asecond"));
        assert!(!annotations[0].contains("first\nsecond"));
    }
}
