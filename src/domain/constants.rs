pub const DEFAULT_OUTPUT: &str = "FolderPermissions.html";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DOCUMENT_VERSION: u32 = 1;

/// Rights bits in presentation order. Every entry is a single bit, so a mask
/// can never decode to the same name twice.
pub const RIGHTS_TABLE: &[(u32, &str)] = &[
    (0x0000_0001, "ReadData/ListDirectory"),
    (0x0000_0002, "WriteData/CreateFiles"),
    (0x0000_0004, "AppendData/CreateDirectories"),
    (0x0000_0008, "ReadExtendedAttributes"),
    (0x0000_0010, "WriteExtendedAttributes"),
    (0x0000_0020, "ExecuteFile/Traverse"),
    (0x0000_0040, "DeleteSubdirectoriesAndFiles"),
    (0x0000_0080, "ReadAttributes"),
    (0x0000_0100, "WriteAttributes"),
    (0x0001_0000, "Delete"),
    (0x0002_0000, "ReadPermissions"),
    (0x0004_0000, "ChangePermissions"),
    (0x0008_0000, "TakeOwnership"),
    (0x0010_0000, "Synchronize"),
    (0x1000_0000, "GenericAll"),
    (0x2000_0000, "GenericExecute"),
    (0x4000_0000, "GenericWrite"),
    (0x8000_0000, "GenericRead"),
];

pub const READ_DATA: u32 = 0x0000_0001;
pub const WRITE_DATA: u32 = 0x0000_0002;
pub const APPEND_DATA: u32 = 0x0000_0004;
pub const READ_EXTENDED_ATTRIBUTES: u32 = 0x0000_0008;
pub const WRITE_EXTENDED_ATTRIBUTES: u32 = 0x0000_0010;
pub const EXECUTE_FILE: u32 = 0x0000_0020;
pub const DELETE_CHILDREN: u32 = 0x0000_0040;
pub const READ_ATTRIBUTES: u32 = 0x0000_0080;
pub const WRITE_ATTRIBUTES: u32 = 0x0000_0100;
pub const READ_PERMISSIONS: u32 = 0x0002_0000;
pub const CHANGE_PERMISSIONS: u32 = 0x0004_0000;
