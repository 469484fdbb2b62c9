//! Analytics vocabulary for brew card interactions.
//!
//! Category and action labels passed to the injected analytics sink. The
//! labels are stable identifiers, not user-facing text.

pub const BREW_CATEGORY: &str = "BREW";

pub mod actions {
    pub const POPOVER_ACTIONS: &str = "POPOVER_ACTIONS";
    pub const REPEAT: &str = "REPEAT";
    pub const FAST_REPEAT: &str = "FAST_REPEAT";
    pub const ADD_FAVOURITE: &str = "ADD_FAVOURITE";
    pub const REMOVE_FAVOURITE: &str = "REMOVE_FAVOURITE";
    pub const DELETE: &str = "DELETE";
    pub const SHOW_MAP: &str = "SHOW_MAP";
    pub const PHOTO_VIEW: &str = "PHOTO_VIEW";
    pub const SHARE: &str = "SHARE";
}
