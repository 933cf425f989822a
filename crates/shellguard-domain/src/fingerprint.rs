use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a line finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - script path (canonical)
/// - 1-based line number
/// - raw line text
pub fn fingerprint_for_line(
    check_id: &str,
    code: &str,
    script_path: &str,
    line: u32,
    text: &str,
) -> String {
    let canonical = format!("{check_id}|{code}|{script_path}|{line}|{text}");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
