use serde::{Deserialize, Serialize};

/// The closed set of semantic actions a brew card can dispatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BrewAction {
    Repeat,
    Detail,
    Edit,
    Delete,
    PhotoGallery,
    Cupping,
    ShowMapCoordinates,
    FastRepeat,
    ToggleFavourite,
    Share,
}

impl BrewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrewAction::Repeat => "Repeat",
            BrewAction::Detail => "Detail",
            BrewAction::Edit => "Edit",
            BrewAction::Delete => "Delete",
            BrewAction::PhotoGallery => "PhotoGallery",
            BrewAction::Cupping => "Cupping",
            BrewAction::ShowMapCoordinates => "ShowMapCoordinates",
            BrewAction::FastRepeat => "FastRepeat",
            BrewAction::ToggleFavourite => "ToggleFavourite",
            BrewAction::Share => "Share",
        }
    }
}
