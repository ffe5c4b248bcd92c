use crate::domain::constants::{
    APPEND_DATA, CHANGE_PERMISSIONS, DELETE_CHILDREN, EXECUTE_FILE, READ_ATTRIBUTES, READ_DATA,
    READ_EXTENDED_ATTRIBUTES, READ_PERMISSIONS, WRITE_ATTRIBUTES, WRITE_DATA,
    WRITE_EXTENDED_ATTRIBUTES,
};
use crate::domain::errors::FetchError;
use crate::domain::models::{AclEntry, Effect, FolderAcl, FolderRecord, Grant, RawRights};
use crate::services::decoder::decode;
use std::io;
use std::path::Path;

/// Access-control descriptor query facility of the host.
pub trait AclSource {
    fn descriptor(&self, path: &Path) -> Result<FolderAcl, FetchError>;
}

/// Query `path` and decode every entry into named rights.
pub fn fetch_record(source: &impl AclSource, path: &Path) -> Result<FolderRecord, FetchError> {
    let acl = source.descriptor(path)?;
    Ok(FolderRecord {
        path: path.display().to_string(),
        owner: acl.owner,
        group: acl.group,
        grants: acl
            .entries
            .into_iter()
            .map(|e| Grant {
                principal: e.principal,
                effect: e.effect,
                rights: decode(&e.rights),
            })
            .collect(),
    })
}

pub struct LocalAcl;

#[cfg(unix)]
impl AclSource for LocalAcl {
    fn descriptor(&self, path: &Path) -> Result<FolderAcl, FetchError> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path)?;
        let owner = user_name(meta.uid());
        let group = group_name(meta.gid());
        let entries = match read_access_acl(path)? {
            Some(raw) => {
                let parsed = parse_posix_acl(&raw)?;
                posix_entries(&parsed, &owner, &group, user_name, group_name)
            }
            None => mode_entries(meta.mode(), &owner, &group),
        };
        Ok(FolderAcl {
            owner,
            group,
            entries,
        })
    }
}

#[cfg(not(unix))]
impl AclSource for LocalAcl {
    fn descriptor(&self, _path: &Path) -> Result<FolderAcl, FetchError> {
        Err(FetchError::Other(io::Error::new(
            io::ErrorKind::Unsupported,
            "folder permissions are only supported on unix hosts",
        )))
    }
}

#[cfg(unix)]
fn user_name(uid: u32) -> String {
    match nix::unistd::User::from_uid(nix::unistd::Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        _ => uid.to_string(),
    }
}

#[cfg(unix)]
fn group_name(gid: u32) -> String {
    match nix::unistd::Group::from_gid(nix::unistd::Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        _ => gid.to_string(),
    }
}

/// Raw `system.posix_acl_access` value, or `None` when the folder carries
/// no ACL or the filesystem has no xattr support.
#[cfg(target_os = "linux")]
fn read_access_acl(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match xattr::get(path, "system.posix_acl_access") {
        Err(err) if err.raw_os_error() == Some(nix::errno::Errno::EOPNOTSUPP as i32) => Ok(None),
        other => other,
    }
}

#[cfg(all(unix, not(target_os = "linux")))]
fn read_access_acl(_path: &Path) -> io::Result<Option<Vec<u8>>> {
    Ok(None)
}

const ACL_EA_VERSION: u32 = 2;

const ACL_USER_OBJ: u16 = 0x01;
const ACL_USER: u16 = 0x02;
const ACL_GROUP_OBJ: u16 = 0x04;
const ACL_GROUP: u16 = 0x08;
const ACL_MASK: u16 = 0x10;
const ACL_OTHER: u16 = 0x20;

const PERM_READ: u16 = 0x4;
const PERM_WRITE: u16 = 0x2;
const PERM_EXECUTE: u16 = 0x1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixEntry {
    pub tag: u16,
    pub perm: u16,
    pub id: u32,
}

/// Decode the little-endian `system.posix_acl_*` xattr layout: a u32
/// version header followed by 8-byte (tag, perm, id) records.
pub fn parse_posix_acl(raw: &[u8]) -> io::Result<Vec<PosixEntry>> {
    let invalid = |msg: &str| io::Error::new(io::ErrorKind::InvalidData, msg.to_string());
    if raw.len() < 4 || (raw.len() - 4) % 8 != 0 {
        return Err(invalid("truncated posix acl"));
    }
    let (header, body) = raw.split_at(4);
    let version = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    if version != ACL_EA_VERSION {
        return Err(invalid("unsupported posix acl version"));
    }
    Ok(body
        .chunks_exact(8)
        .map(|c| PosixEntry {
            tag: u16::from_le_bytes([c[0], c[1]]),
            perm: u16::from_le_bytes([c[2], c[3]]),
            id: u32::from_le_bytes([c[4], c[5], c[6], c[7]]),
        })
        .collect())
}

/// Turn stored ACL records into grants. The mask record is not a principal;
/// it caps named users and all group entries.
pub fn posix_entries(
    entries: &[PosixEntry],
    owner: &str,
    group: &str,
    user_name: impl Fn(u32) -> String,
    group_name: impl Fn(u32) -> String,
) -> Vec<AclEntry> {
    let mask = entries
        .iter()
        .find(|e| e.tag == ACL_MASK)
        .map(|e| e.perm)
        .unwrap_or(PERM_READ | PERM_WRITE | PERM_EXECUTE);

    entries
        .iter()
        .filter_map(|e| {
            let (principal, perm, is_owner) = match e.tag {
                ACL_USER_OBJ => (format!("user:{}", owner), e.perm, true),
                ACL_USER => (format!("user:{}", user_name(e.id)), e.perm & mask, false),
                ACL_GROUP_OBJ => (format!("group:{}", group), e.perm & mask, false),
                ACL_GROUP => (format!("group:{}", group_name(e.id)), e.perm & mask, false),
                ACL_OTHER => ("other".to_string(), e.perm, false),
                _ => return None,
            };
            Some(allow(principal, perm, is_owner))
        })
        .collect()
}

/// Owner, group and other grants implied by plain mode bits.
pub fn mode_entries(mode: u32, owner: &str, group: &str) -> Vec<AclEntry> {
    let triple = |shift: u32| ((mode >> shift) & 0o7) as u16;
    vec![
        allow(format!("user:{}", owner), triple(6), true),
        allow(format!("group:{}", group), triple(3), false),
        allow("other".to_string(), triple(0), false),
    ]
}

fn allow(principal: String, perm: u16, is_owner: bool) -> AclEntry {
    AclEntry {
        principal,
        effect: Effect::Allow,
        rights: RawRights::Mask(rights_mask(perm, is_owner)),
    }
}

pub fn rights_mask(perm: u16, is_owner: bool) -> u32 {
    let mut mask = 0;
    if perm & PERM_READ != 0 {
        mask |= READ_DATA | READ_EXTENDED_ATTRIBUTES | READ_ATTRIBUTES | READ_PERMISSIONS;
    }
    if perm & PERM_WRITE != 0 {
        mask |= WRITE_DATA
            | APPEND_DATA
            | WRITE_EXTENDED_ATTRIBUTES
            | DELETE_CHILDREN
            | WRITE_ATTRIBUTES;
    }
    if perm & PERM_EXECUTE != 0 {
        mask |= EXECUTE_FILE;
    }
    if is_owner {
        mask |= CHANGE_PERMISSIONS;
    }
    mask
}
