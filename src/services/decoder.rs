use crate::domain::constants::RIGHTS_TABLE;
use crate::domain::models::RawRights;

/// Names of every table bit set in `rights`, in table order. Symbolic
/// values pass through untouched.
pub fn decode(rights: &RawRights) -> Vec<String> {
    match rights {
        RawRights::Mask(mask) => decode_mask(*mask),
        RawRights::Symbolic(name) => vec![name.clone()],
    }
}

pub fn decode_mask(mask: u32) -> Vec<String> {
    RIGHTS_TABLE
        .iter()
        .filter(|(flag, _)| mask & flag != 0)
        .map(|(_, name)| name.to_string())
        .collect()
}
