use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Style classifier for a preparation method.
///
/// Espresso-style methods account their output through the beverage
/// quantity; every other style reads the brew (water) quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PreparationStyle {
    Espresso,
    PourOver,
    FullImmersion,
    Percolation,
}

impl PreparationStyle {
    pub fn is_espresso(&self) -> bool {
        matches!(self, PreparationStyle::Espresso)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreparationStyle::Espresso => "Espresso",
            PreparationStyle::PourOver => "PourOver",
            PreparationStyle::FullImmersion => "FullImmersion",
            PreparationStyle::Percolation => "Percolation",
        }
    }
}

/// A brewing method definition (V60, espresso machine, Aeropress, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preparation {
    pub id: String,
    pub name: String,
    pub style: PreparationStyle,
    /// Whether brews with this method record a grinder at all.
    pub use_mill: bool,
    pub created_at: DateTime<Utc>,
}

impl Preparation {
    pub fn new(name: impl Into<String>, style: PreparationStyle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            style,
            use_mill: true,
            created_at: Utc::now(),
        }
    }
}
