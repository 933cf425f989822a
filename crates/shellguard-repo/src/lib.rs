//! Repository adapters: read script files, discover scripts in directories.
//!
//! This crate is allowed to do filesystem IO. The whole file is read in one
//! bulk read before the auditor runs; the engine itself never touches the
//! filesystem.

#![forbid(unsafe_code)]

mod discover;

use anyhow::Context;
use camino::Utf8Path;
use shellguard_domain::model::ScriptModel;
use shellguard_types::ScriptPath;

pub use discover::discover_scripts;

/// Fuzz-friendly API for exercising the auditor without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use shellguard_domain::model::ScriptModel;
    use shellguard_domain::policy::EffectiveConfig;
    use shellguard_types::ScriptPath;

    /// Audit arbitrary text with default policy. **Never panics** on any
    /// input; at worst every line is reported.
    pub fn audit_source(text: &str) -> usize {
        let cfg = EffectiveConfig::default();
        let script = ScriptModel::from_source(ScriptPath::new("fuzz.sh"), text);
        shellguard_domain::scan_script(&script, &cfg).len()
    }
}

/// Read one script into the line model the engine scans.
///
/// The display path in findings is the path as given (normalized to forward
/// slashes), so report lines stay greppable against the invocation.
pub fn load_script(path: &Utf8Path) -> anyhow::Result<ScriptModel> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    Ok(ScriptModel::from_source(ScriptPath::from(path), &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn load_script_splits_lines_and_keeps_display_path() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let path = root.join("install.sh");
        std::fs::write(&path, "#!/bin/bash\nrisky_cmd\n").expect("write script");

        let script = load_script(&path).expect("load");
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[1].text, "risky_cmd");
        assert!(script.path.as_str().ends_with("install.sh"));
    }

    #[test]
    fn load_script_missing_file_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        assert!(load_script(&root.join("absent.sh")).is_err());
    }

    proptest! {
        #[test]
        fn fuzz_audit_never_panics(input in "(?s).{0,600}") {
            let _ = fuzz::audit_source(&input);
        }
    }
}
