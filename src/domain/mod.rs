//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — folder records, grants, the report document, CLI output structs.
//! - `constants.rs` — the rights table and built-in defaults.
//! - `errors.rs` — classified fetch failures and fatal run errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ReportDocument` is persisted by `scan --dump` and read back by `render`.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
