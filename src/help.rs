//! Crate help overlay.
//!
//! The host advertises four one-item interactions for crates. They are
//! replaced by the two bulk interactions; entries added by other mods keep
//! their place.

use bulkux_core::{MouseButton, WorldInteraction};

/// Host entries replaced by the bulk interactions.
pub const REPLACED_LANG_CODES: [&str; 4] = [
    "blockhelp-crate-add",
    "blockhelp-crate-addall",
    "blockhelp-crate-remove",
    "blockhelp-crate-removeall",
];

/// Right-click: take a full stack.
pub const BULK_GET_LANG_CODE: &str = "bulkux:blockhelp-bulkux-get";

/// Shift + right-click: put everything matching.
pub const BULK_PUT_LANG_CODE: &str = "bulkux:blockhelp-bulkux-put";

/// The bulk entries appended to the overlay.
pub fn bulk_interactions() -> [WorldInteraction; 2] {
    [
        WorldInteraction {
            action_lang_code: BULK_GET_LANG_CODE.to_string(),
            mouse_button: MouseButton::Right,
            hotkey_codes: Vec::new(),
        },
        WorldInteraction {
            action_lang_code: BULK_PUT_LANG_CODE.to_string(),
            mouse_button: MouseButton::Right,
            hotkey_codes: vec!["shift".to_string()],
        },
    ]
}

/// Rewrite the crate's advertised interactions in place.
///
/// Re-running on an already rewritten list leaves it unchanged.
pub fn rewrite_crate_help(interactions: &mut Vec<WorldInteraction>) {
    interactions.retain(|wi| !is_managed(&wi.action_lang_code));
    interactions.extend(bulk_interactions());
}

fn is_managed(code: &str) -> bool {
    REPLACED_LANG_CODES.contains(&code) || code == BULK_GET_LANG_CODE || code == BULK_PUT_LANG_CODE
}
