//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — walk a tree, write the report and optional document dump.
//! - `render.rs` — re-render a dumped document.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod render;
pub mod scan;

pub use render::handle_render_command;
pub use scan::handle_scan_command;

use crate::domain::constants::DEFAULT_OUTPUT;
use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

/// Flag beats config file beats built-in default.
fn resolve_output(flag: Option<&Path>, config: &ConfigFile) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.defaults.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}
