pub mod action;
pub mod controller;
pub mod platform;

pub use action::BrewAction;
pub use controller::{BrewActionEvent, BrewCardController, Collaborators};
pub use platform::{OsFamily, Platform};
