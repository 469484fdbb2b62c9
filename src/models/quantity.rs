use serde::{Deserialize, Serialize};

/// Unit a brew quantity was entered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum BrewQuantityType {
    #[default]
    Gr,
    Ml,
}

impl BrewQuantityType {
    pub fn unit_label(&self) -> &'static str {
        match self {
            BrewQuantityType::Gr => "g",
            BrewQuantityType::Ml => "ml",
        }
    }
}
