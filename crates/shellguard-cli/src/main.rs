//! CLI entry point for shellguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `shellguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use shellguard_app::{
    parse_report_json, render_annotations, render_markdown, render_text, run_audit, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code, AuditInput,
    AuditOptions, ExplainOutput,
};
use shellguard_domain::policy::FailOn;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(
    name = "shellguard",
    version,
    about = "Heuristic shell-script auditor for unchecked failures"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FailOnArg {
    Error,
    Warning,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit scripts and print findings grouped by file.
    Audit {
        /// Script files (or directories to expand), audited in this order.
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,

        /// Output format for stdout.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Where to write the JSON report (in addition to stdout output).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Verdict threshold: fail the run on warnings or only on errors.
        #[arg(long, value_enum, default_value = "warning")]
        fail_on: FailOnArg,

        /// Override maximum findings to emit.
        #[arg(long)]
        max_findings: Option<u32>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit (default 10, per GHA best practices).
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id, finding code, or recognizer id.
    Explain {
        /// The identifier (e.g., "shell.unhandled_failure" or "handled.or_fail") to explain.
        identifier: String,
    },

    /// Patch a PAM login config from stdin with gnome-keyring entries.
    PatchPamLogin,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            paths,
            format,
            report_out,
            fail_on,
            max_findings,
        } => cmd_audit(paths, format, report_out, fail_on, max_findings),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::PatchPamLogin => cmd_patch_pam_login(),
    }
}

fn cmd_audit(
    paths: Vec<Utf8PathBuf>,
    format: OutputFormat,
    report_out: Option<Utf8PathBuf>,
    fail_on: FailOnArg,
    max_findings: Option<u32>,
) -> anyhow::Result<()> {
    let defaults = AuditOptions::default();
    let options = AuditOptions {
        fail_on: match fail_on {
            FailOnArg::Error => FailOn::Error,
            FailOnArg::Warning => FailOn::Warning,
        },
        max_findings: max_findings.map(|m| m as usize).unwrap_or(defaults.max_findings),
    };

    let result = run_audit(AuditInput { paths, options });

    match result {
        Ok(output) => {
            if let Some(path) = &report_out {
                write_report_file(path, &output.report).context("write report json")?;
            }

            let renderable = to_renderable(&output.report);
            match format {
                OutputFormat::Text => print!("{}", render_text(&renderable)),
                OutputFormat::Markdown => print!("{}", render_markdown(&renderable)),
                OutputFormat::Json => {
                    let data = serialize_report(&output.report).context("serialize report")?;
                    println!("{}", String::from_utf8_lossy(&data));
                }
            }

            let code = verdict_exit_code(output.report.verdict);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = &report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("shellguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(
    path: &camino::Utf8Path,
    report: &shellguard_types::ShellguardReport,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let annotations = render_annotations(&renderable, max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", shellguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_recognizer_ids,
        } => {
            eprint!(
                "{}",
                shellguard_app::format_not_found(
                    &identifier,
                    available_check_ids,
                    available_recognizer_ids
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_patch_pam_login() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("read stdin")?;

    match shellguard_app::patch_login_config(&input) {
        Ok(patched) => {
            print!("{}", patched);
            Ok(())
        }
        Err(err) => {
            eprintln!("shellguard error: {err}");
            std::process::exit(1);
        }
    }
}
