//! Best-effort string identities for items and events.
//!
//! Identities are v4 UUIDs in the usual hyphenated form. Uniqueness is
//! statistical only; callers that need a hard guarantee should layer their
//! own registry on top.

use uuid::Uuid;

/// Generates a fresh identity string: 8-4-4-4-12 lowercase hex groups.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shape check for identity strings. Accepts any hyphenated hex string of
/// the right group lengths; version and variant bits are not enforced.
pub fn looks_like_id(s: &str) -> bool {
    const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

    let groups: Vec<&str> = s.split('-').collect();
    if groups.len() != GROUP_LENGTHS.len() {
        return false;
    }
    groups
        .iter()
        .zip(GROUP_LENGTHS)
        .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()))
}
