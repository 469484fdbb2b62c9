use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roasted coffee bean batch.
///
/// `weight` is the package size in grams; `consumed_weight` accumulates as
/// brews draw from the package. The depletion check itself lives behind the
/// brew helper collaborator, which archives the bean by setting `finished`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bean {
    pub id: String,
    pub name: String,
    pub roaster: String,
    pub decaffeinated: bool,
    pub weight: f64,
    pub consumed_weight: f64,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
}

impl Bean {
    pub fn new(name: impl Into<String>, roaster: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            roaster: roaster.into(),
            decaffeinated: false,
            weight: 0.0,
            consumed_weight: 0.0,
            finished: false,
            created_at: Utc::now(),
        }
    }

    /// Grams still left in the package, clamped at zero.
    pub fn remaining_weight(&self) -> f64 {
        (self.weight - self.consumed_weight).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_weight_clamps_at_zero() {
        let mut bean = Bean::new("Wush Wush", "Roastery");
        bean.weight = 250.0;
        bean.consumed_weight = 270.0;
        assert_eq!(bean.remaining_weight(), 0.0);
    }
}
