use crate::cli::RenderMode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Allow => write!(f, "Allow"),
            Effect::Deny => write!(f, "Deny"),
        }
    }
}

/// Rights as the host reported them: usually a bitmask, occasionally a name
/// the platform already resolved.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawRights {
    Mask(u32),
    Symbolic(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclEntry {
    pub principal: String,
    pub effect: Effect,
    pub rights: RawRights,
}

/// Undecoded descriptor for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderAcl {
    pub owner: String,
    pub group: String,
    pub entries: Vec<AclEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Grant {
    pub principal: String,
    pub effect: Effect,
    pub rights: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    pub path: String,
    pub owner: String,
    pub group: String,
    #[serde(default)]
    pub grants: Vec<Grant>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub version: u32,
    pub root: String,
    pub max_depth: u32,
    pub folders: Vec<FolderRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    ListingFailed,
    AccessDenied,
    NotFound,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    pub path: String,
    pub reason: SkipReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, &self.detail) {
            (SkipReason::ListingFailed, Some(d)) => write!(f, "listing failed: {}", d),
            (SkipReason::ListingFailed, None) => write!(f, "listing failed"),
            (SkipReason::AccessDenied, _) => write!(f, "access denied"),
            (SkipReason::NotFound, _) => write!(f, "not found"),
        }
    }
}

#[derive(Serialize)]
pub struct ScanSummary {
    pub root: String,
    pub output: String,
    pub dump: Option<String>,
    pub mode: RenderMode,
    pub exported: usize,
    pub skipped: Vec<SkipRecord>,
}

#[derive(Serialize)]
pub struct RenderSummary {
    pub document: String,
    pub output: String,
    pub mode: RenderMode,
    pub folders: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigDefaults {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub mode: Option<RenderMode>,
    #[serde(default)]
    pub max_depth: Option<u32>,
    #[serde(default)]
    pub log: Option<String>,
}
