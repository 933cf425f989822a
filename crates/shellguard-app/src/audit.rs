//! The `audit` use case: scan scripts and produce a report.

use anyhow::Context;
use camino::Utf8PathBuf;
use rayon::prelude::*;
use shellguard_domain::model::ScriptModel;
use shellguard_domain::policy::{EffectiveConfig, FailOn};
use shellguard_types::{ReportEnvelope, ShellguardReport, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput {
    /// Script files, or directories to expand, in the order to audit.
    pub paths: Vec<Utf8PathBuf>,
    pub options: AuditOptions,
}

/// CLI-level knobs. Defaults reproduce the stock audit semantics.
#[derive(Clone, Debug)]
pub struct AuditOptions {
    pub fail_on: FailOn,
    pub max_findings: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        let cfg = EffectiveConfig::default();
        Self {
            fail_on: cfg.fail_on,
            max_findings: cfg.max_findings,
        }
    }
}

impl AuditOptions {
    fn to_effective_config(&self) -> EffectiveConfig {
        EffectiveConfig {
            fail_on: self.fail_on,
            max_findings: self.max_findings,
            ..EffectiveConfig::default()
        }
    }
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: ShellguardReport,
}

/// Run the audit: expand directories, load and scan each script, assemble
/// the report envelope.
///
/// Scripts are scanned in parallel; each scan owns its state, so no
/// synchronization is needed. Findings keep the input path order regardless
/// of completion order.
pub fn run_audit(input: AuditInput) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = input.options.to_effective_config();
    let paths = expand_paths(&input.paths)?;

    let scanned: Vec<(ScriptModel, Vec<shellguard_types::Finding>)> = paths
        .par_iter()
        .map(|path| {
            let script = shellguard_repo::load_script(path)?;
            let findings = shellguard_domain::scan_script(&script, &cfg);
            Ok((script, findings))
        })
        .collect::<anyhow::Result<_>>()?;

    let scripts_scanned = scanned.len() as u32;
    let lines_scanned = scanned.iter().map(|(s, _)| s.line_count()).sum();
    let findings = scanned
        .into_iter()
        .flat_map(|(_, findings)| findings)
        .collect();

    let domain_report = shellguard_domain::assemble(findings, scripts_scanned, lines_scanned, &cfg);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "shellguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(AuditOutput { report })
}

/// Directories expand to the scripts beneath them; files pass through
/// untouched so the audit order (and any error for a missing file) follows
/// the invocation.
fn expand_paths(paths: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            let discovered = shellguard_repo::discover_scripts(path)
                .with_context(|| format!("discover scripts under {}", path))?;
            out.extend(discovered);
        } else {
            out.push(path.clone());
        }
    }
    Ok(out)
}
