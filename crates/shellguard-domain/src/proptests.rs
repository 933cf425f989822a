//! Property-based tests for the domain crate.
//!
//! Invariants:
//! - the auditor never panics on arbitrary input
//! - scanning is idempotent (no hidden cross-call state)
//! - every reported line number indexes a real line

use crate::model::{AuditModel, ScriptModel};
use crate::policy::EffectiveConfig;
use crate::{evaluate, scan_script};
use proptest::prelude::*;
use shellguard_types::ScriptPath;

proptest! {
    #[test]
    fn scan_never_panics(source in ".*") {
        let cfg = EffectiveConfig::default();
        let script = ScriptModel::from_source(ScriptPath::new("fuzz.sh"), &source);
        let _ = scan_script(&script, &cfg);
    }

    #[test]
    fn scan_is_idempotent(source in "(?s).{0,400}") {
        let cfg = EffectiveConfig::default();
        let script = ScriptModel::from_source(ScriptPath::new("fuzz.sh"), &source);
        let first = scan_script(&script, &cfg);
        let second = scan_script(&script, &cfg);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reported_lines_are_in_bounds_and_ascending(source in "(?s).{0,400}") {
        let cfg = EffectiveConfig::default();
        let script = ScriptModel::from_source(ScriptPath::new("fuzz.sh"), &source);
        let count = script.line_count();

        let model = AuditModel { scripts: vec![script] };
        let report = evaluate(&model, &cfg);

        let mut last = 0u32;
        for f in &report.findings {
            let line = f.location.as_ref().and_then(|l| l.line).expect("line");
            prop_assert!(line >= 1 && line <= count);
            prop_assert!(line > last);
            last = line;
        }
    }
}
