//! Window message names.

mod table;

use std::borrow::Cow;

use table::MESSAGE_NAMES;

/// Returns the canonical name of a window message id, if known.
pub fn lookup(message: u32) -> Option<&'static str> {
    MESSAGE_NAMES
        .binary_search_by_key(&message, |&(id, _)| id)
        .ok()
        .map(|i| MESSAGE_NAMES[i].1)
}

/// Display name for a message id. Never fails: unknown ids become
/// `WM_USER_0x<HEX>`: a lowercase `0x` prefix, then at least two uppercase
/// hex digits (`WM_USER_0x7FFF0001`).
pub fn message_name(message: u32) -> Cow<'static, str> {
    match lookup(message) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("WM_USER_{message:#04X}")),
    }
}
