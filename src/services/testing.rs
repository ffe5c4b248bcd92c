//! In-memory host used by unit tests to simulate listing and descriptor
//! failures independently of the privileges of whoever runs the tests.

use crate::domain::errors::FetchError;
use crate::domain::models::{AclEntry, Effect, FolderAcl, RawRights};
use crate::services::acl::AclSource;
use crate::services::walker::DirSource;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy)]
enum Broken {
    Denied,
    Vanished,
    Unknown,
}

#[derive(Default)]
pub struct FakeHost {
    folders: Vec<PathBuf>,
    acls: HashMap<PathBuf, FolderAcl>,
    deny_listing: HashSet<PathBuf>,
    broken: HashMap<PathBuf, Broken>,
    listed: RefCell<Vec<PathBuf>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(mut self, path: &str) -> Self {
        self.folders.push(PathBuf::from(path));
        self
    }

    pub fn acl(mut self, path: &str, acl: FolderAcl) -> Self {
        self.acls.insert(PathBuf::from(path), acl);
        self
    }

    pub fn deny_listing(mut self, path: &str) -> Self {
        self.deny_listing.insert(PathBuf::from(path));
        self
    }

    pub fn deny_acl(mut self, path: &str) -> Self {
        self.broken.insert(PathBuf::from(path), Broken::Denied);
        self
    }

    pub fn vanish(mut self, path: &str) -> Self {
        self.broken.insert(PathBuf::from(path), Broken::Vanished);
        self
    }

    pub fn break_acl(mut self, path: &str) -> Self {
        self.broken.insert(PathBuf::from(path), Broken::Unknown);
        self
    }

    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }
}

pub fn simple_acl(owner: &str, principal: &str, mask: u32) -> FolderAcl {
    FolderAcl {
        owner: owner.to_string(),
        group: "staff".to_string(),
        entries: vec![AclEntry {
            principal: principal.to_string(),
            effect: Effect::Allow,
            rights: RawRights::Mask(mask),
        }],
    }
}

impl DirSource for FakeHost {
    fn probe(&self, root: &Path) -> io::Result<()> {
        if self.folders.iter().any(|f| f == root) {
            Ok(())
        } else {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn subdirs(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        self.listed.borrow_mut().push(dir.to_path_buf());
        if self.deny_listing.contains(dir) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(self
            .folders
            .iter()
            .filter(|f| f.parent() == Some(dir))
            .cloned()
            .collect())
    }
}

impl AclSource for FakeHost {
    fn descriptor(&self, path: &Path) -> Result<FolderAcl, FetchError> {
        match self.broken.get(path) {
            Some(Broken::Denied) => return Err(FetchError::AccessDenied),
            Some(Broken::Vanished) => return Err(FetchError::NotFound),
            Some(Broken::Unknown) => return Err(FetchError::Other(io::Error::other("bus error"))),
            None => {}
        }
        if let Some(acl) = self.acls.get(path) {
            return Ok(acl.clone());
        }
        if self.folders.iter().any(|f| f == path) {
            Ok(simple_acl("root", "user:root", 0x1))
        } else {
            Err(FetchError::NotFound)
        }
    }
}
