use crate::model::ScriptModel;
use crate::policy::EffectiveConfig;
use shellguard_types::ScriptPath;

pub fn script(path: &str, source: &str) -> ScriptModel {
    ScriptModel::from_source(ScriptPath::new(path), source)
}

/// Scan `source` with defaults and return the reported 1-based line numbers.
pub fn reported_lines(source: &str) -> Vec<u32> {
    let cfg = EffectiveConfig::default();
    crate::scan_script(&script("test.sh", source), &cfg)
        .iter()
        .filter_map(|f| f.location.as_ref().and_then(|l| l.line))
        .collect()
}
