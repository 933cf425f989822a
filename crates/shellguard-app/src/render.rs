//! Render use cases: text, markdown, and GitHub annotations from in-memory
//! reports.

use shellguard_render::RenderableReport;

pub fn render_text(report: &RenderableReport) -> String {
    shellguard_render::render_text(report)
}

pub fn render_markdown(report: &RenderableReport) -> String {
    shellguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    shellguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellguard_render::{
        RenderableData, RenderableFinding, RenderableLocation, RenderableReport,
        RenderableSeverity, RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("shell.unhandled_failure".to_string()),
                    code: "unhandled_line".to_string(),
                    message: "failure of `mount` is not detected or handled".to_string(),
                    location: Some(RenderableLocation {
                        path: "install.sh".to_string(),
                        line: Some(4),
                        col: None,
                    }),
                    line_text: Some("mount /dev/sda1 /mnt".to_string()),
                    help: None,
                    url: None,
                },
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("shell.unhandled_failure".to_string()),
                    code: "unhandled_line".to_string(),
                    message: "failure of `mkfs.ext4` is not detected or handled".to_string(),
                    location: Some(RenderableLocation {
                        path: "install.sh".to_string(),
                        line: Some(9),
                        col: None,
                    }),
                    line_text: Some("mkfs.ext4 \"$dev\"".to_string()),
                    help: None,
                    url: None,
                },
            ],
            data: RenderableData {
                findings_emitted: 2,
                findings_total: 2,
                truncated_reason: None,
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        let annotations = render_annotations(&report, 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_text_groups_by_file() {
        let report = sample_report();
        let text = render_text(&report);
        assert_eq!(text.matches("install.sh:").count(), 1);
        assert!(text.contains("  4: mount /dev/sda1 /mnt"));
        assert!(text.contains("  9: mkfs.ext4 \"$dev\""));
    }

    #[test]
    fn render_markdown_smoke() {
        let report = sample_report();
        let markdown = render_markdown(&report);
        assert!(!markdown.is_empty());
    }
}
