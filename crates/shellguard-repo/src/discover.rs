use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::WalkDir;

const SCRIPT_NAME_GLOBS: &[&str] = &["*.sh", "*.bash"];

/// Discover shell scripts under `root`.
///
/// Behavior:
/// - files whose name matches `*.sh` / `*.bash` are included
/// - other files are included when their first line is a shell shebang
/// - results are sorted for a stable, reproducible audit order
pub fn discover_scripts(root: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let name_set = build_globset(SCRIPT_NAME_GLOBS).context("compile script name globset")?;

    let mut out: Vec<Utf8PathBuf> = Vec::new();

    for abs in WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let by_name = abs
            .file_name()
            .map(|name| name_set.is_match(name))
            .unwrap_or(false);

        if by_name || has_shell_shebang(&abs) {
            out.push(abs);
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn has_shell_shebang(path: &Utf8Path) -> bool {
    // Sniffing is best-effort; unreadable or non-UTF-8 files are skipped.
    let Ok(text) = std::fs::read_to_string(path) else {
        return false;
    };
    let Some(first) = text.lines().next() else {
        return false;
    };
    first.starts_with("#!") && first.contains("sh")
}

fn build_globset(patterns: &[&str]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
