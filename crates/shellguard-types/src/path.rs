use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical script path used in findings and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - otherwise the path is reproduced as the caller supplied it, so output
///   lines stay greppable against the invocation
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ScriptPath(String);

impl Default for ScriptPath {
    fn default() -> Self {
        ScriptPath::new(".")
    }
}

impl ScriptPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        // Avoid empty path; keep it explicit.
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl From<&Utf8Path> for ScriptPath {
    fn from(value: &Utf8Path) -> Self {
        ScriptPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for ScriptPath {
    fn from(value: Utf8PathBuf) -> Self {
        ScriptPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_dot_slash_and_backslashes() {
        assert_eq!(ScriptPath::new("./setup/install.sh").as_str(), "setup/install.sh");
        assert_eq!(ScriptPath::new("setup\\install.sh").as_str(), "setup/install.sh");
    }

    #[test]
    fn empty_becomes_dot() {
        assert_eq!(ScriptPath::new("").as_str(), ".");
    }
}
