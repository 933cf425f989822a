use shellguard_types::ScriptPath;

/// One audited batch: the scripts of a single invocation, in argument order.
#[derive(Clone, Debug, Default)]
pub struct AuditModel {
    pub scripts: Vec<ScriptModel>,
}

/// One script's full text, pre-split into physical lines.
///
/// Immutable once built; owned by a single audit pass. The line sequence is
/// indexable (not a stream) because the PIPESTATUS rule needs one line of
/// lookahead.
#[derive(Clone, Debug, Default)]
pub struct ScriptModel {
    pub path: ScriptPath,
    pub lines: Vec<SourceLine>,
}

/// A physical line: 1-based number plus raw text, terminator stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    pub number: u32,
    pub text: String,
}

impl ScriptModel {
    /// Split `text` into the ordered line sequence the engine scans.
    ///
    /// `str::lines` drops the trailing `\n`/`\r\n` per line and yields no
    /// phantom empty line after a final newline, matching how the audit
    /// counts lines.
    pub fn from_source<S: Into<ScriptPath>>(path: S, text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| SourceLine {
                number: (i + 1) as u32,
                text: l.to_string(),
            })
            .collect();
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }
}

/// Mutable context carried across the line sequence during one audit pass.
///
/// Freshly initialized per script; never shared across scripts, so parallel
/// per-file audits stay isolated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    /// When set, the scanner is inside a heredoc body and skips lines
    /// verbatim until a line equal to the terminator is seen.
    pub heredoc_terminator: Option<String>,
    /// True between a `case ... in` opener and its matching `esac`.
    pub in_case_block: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_source_numbers_lines_from_one() {
        let script = ScriptModel::from_source(ScriptPath::new("a.sh"), "first\nsecond\n");
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[0].number, 1);
        assert_eq!(script.lines[0].text, "first");
        assert_eq!(script.lines[1].number, 2);
    }

    #[test]
    fn from_source_strips_crlf() {
        let script = ScriptModel::from_source(ScriptPath::new("a.sh"), "one\r\ntwo");
        assert_eq!(script.lines[0].text, "one");
        assert_eq!(script.lines[1].text, "two");
    }

    #[test]
    fn scan_state_starts_clear() {
        let state = ScanState::default();
        assert!(state.heredoc_terminator.is_none());
        assert!(!state.in_case_block);
    }
}
