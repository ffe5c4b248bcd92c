//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `walker.rs` — depth-bounded folder walk over a pluggable `DirSource`.
//! - `acl.rs` — descriptor queries (`AclSource`), POSIX ACL/mode decoding.
//! - `decoder.rs` — rights bitmask to right names.
//! - `scan.rs` — walk + fetch pipeline with skip bookkeeping.
//! - `report.rs` — intermediate document build/save/load.
//! - `render.rs` — nested/flat HTML report templates.
//! - `storage.rs` — no-clobber file output.
//! - `config.rs` — optional `config.toml` defaults.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod acl;
pub mod config;
pub mod decoder;
pub mod output;
pub mod render;
pub mod report;
pub mod scan;
pub mod storage;
pub mod walker;

#[cfg(test)]
pub mod testing;
