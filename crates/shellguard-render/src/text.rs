use crate::RenderableReport;

/// Render findings as the canonical grouped terminal output.
///
/// For each file with at least one finding: a blank line, the file path with
/// a trailing colon, then one `  <line>: <raw text>` row per finding in line
/// order. Files with no findings produce no output at all, so a clean run
/// prints nothing.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    let mut current_path: Option<&str> = None;

    for f in &report.findings {
        let Some(loc) = &f.location else { continue };

        if current_path != Some(loc.path.as_str()) {
            current_path = Some(loc.path.as_str());
            out.push('\n');
            out.push_str(&loc.path);
            out.push_str(":\n");
        }

        let line = loc.line.unwrap_or(0);
        let text = f.line_text.as_deref().unwrap_or(f.message.as_str());
        out.push_str(&format!("  {}: {}\n", line, text));
    }

    if let Some(reason) = &report.data.truncated_reason {
        out.push_str(&format!("\nnote: {}\n", reason));
    }

    out
}
