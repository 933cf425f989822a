//! Use case orchestration for shellguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, repo, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod patch;
mod render;
mod report;

pub use audit::{run_audit, AuditInput, AuditOptions, AuditOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use patch::{patch_login_config, PatchError};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{
    parse_report_json, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
