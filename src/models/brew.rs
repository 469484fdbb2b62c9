use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Bean, BrewQuantityType, Mill, Preparation};

/// Estimated caffeine content of roasted coffee, in mg per gram of dose.
const CAFFEINE_MG_PER_GRAM: f64 = 8.0;

/// Sensory evaluation attached to a brew.
///
/// Predefined flavors are keyed by a fixed vocabulary (`SWEET`, `FRUITY`,
/// ...) whose user-facing labels come from the translator; custom flavors
/// are stored verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuppedFlavor {
    pub predefined_flavors: BTreeMap<String, bool>,
    pub custom_flavors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One logged brewing session.
///
/// A brew always references exactly one bean and one preparation; the mill
/// is optional depending on the preparation style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brew {
    pub id: String,
    pub grind_weight: f64,
    pub grind_size: String,
    /// Brew time in whole seconds.
    pub brew_time: u32,
    pub brew_time_milliseconds: u32,
    pub brew_quantity: f64,
    pub brew_quantity_type: BrewQuantityType,
    pub brew_beverage_quantity: f64,
    pub brew_beverage_quantity_type: BrewQuantityType,
    /// Bounded by the active settings' rating scale.
    pub rating: f64,
    pub tds: f64,
    pub favourite: bool,
    pub note: String,
    pub cupped_flavor: CuppedFlavor,
    pub coordinates: Option<Coordinates>,
    /// Paths of photo attachments; viewing is delegated to the image viewer.
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    bean: Arc<Bean>,
    preparation: Arc<Preparation>,
    mill: Option<Arc<Mill>>,
}

impl Brew {
    pub fn new(bean: Arc<Bean>, preparation: Arc<Preparation>, mill: Option<Arc<Mill>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            grind_weight: 0.0,
            grind_size: String::new(),
            brew_time: 0,
            brew_time_milliseconds: 0,
            brew_quantity: 0.0,
            brew_quantity_type: BrewQuantityType::default(),
            brew_beverage_quantity: 0.0,
            brew_beverage_quantity_type: BrewQuantityType::default(),
            rating: 0.0,
            tds: 0.0,
            favourite: false,
            note: String::new(),
            cupped_flavor: CuppedFlavor::default(),
            coordinates: None,
            attachments: Vec::new(),
            created_at: Utc::now(),
            bean,
            preparation,
            mill,
        }
    }

    pub fn bean(&self) -> Arc<Bean> {
        Arc::clone(&self.bean)
    }

    pub fn preparation(&self) -> Arc<Preparation> {
        Arc::clone(&self.preparation)
    }

    pub fn mill(&self) -> Option<Arc<Mill>> {
        self.mill.clone()
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.created_at.timestamp()
    }

    /// The style-dependent "output" of this brew: espresso methods measure
    /// the beverage in the cup, everything else the brew water quantity.
    pub fn output_quantity(&self) -> f64 {
        if self.preparation.style.is_espresso() {
            self.brew_beverage_quantity
        } else {
            self.brew_quantity
        }
    }

    /// Estimated caffeine in mg; zero for decaffeinated beans.
    pub fn caffeine_amount_mg(&self) -> f64 {
        if self.bean.decaffeinated {
            0.0
        } else {
            self.grind_weight * CAFFEINE_MG_PER_GRAM
        }
    }

    /// Extraction yield in percent: dissolved solids in the output relative
    /// to the dose. Zero when no dose was recorded.
    pub fn extraction_yield_percent(&self) -> f64 {
        if self.grind_weight <= 0.0 {
            return 0.0;
        }
        (self.output_quantity() * self.tds) / self.grind_weight
    }

    /// Brew time as an `mm:ss` display string.
    pub fn formatted_brew_time(&self) -> String {
        format!("{:02}:{:02}", self.brew_time / 60, self.brew_time % 60)
    }

    /// External map link for the brew's geolocation, when one was recorded.
    pub fn coordinate_map_link(&self) -> Option<String> {
        self.coordinates.map(|c| {
            format!(
                "https://maps.google.com/?q={},{}",
                c.latitude, c.longitude
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PreparationStyle;

    fn espresso_brew() -> Brew {
        let bean = Arc::new(Bean::new("Kirinyaga AA", "Square Mile"));
        let preparation = Arc::new(Preparation::new("9Barista", PreparationStyle::Espresso));
        let mut brew = Brew::new(bean, preparation, Some(Arc::new(Mill::new("Kinu M47"))));
        brew.grind_weight = 18.0;
        brew.brew_quantity = 40.0;
        brew.brew_beverage_quantity = 36.0;
        brew.tds = 10.0;
        brew
    }

    #[test]
    fn espresso_output_is_beverage_quantity() {
        let brew = espresso_brew();
        assert_eq!(brew.output_quantity(), 36.0);
    }

    #[test]
    fn filter_output_is_brew_quantity() {
        let bean = Arc::new(Bean::new("Gesha", "Roastery"));
        let preparation = Arc::new(Preparation::new("V60", PreparationStyle::PourOver));
        let mut brew = Brew::new(bean, preparation, None);
        brew.brew_quantity = 250.0;
        brew.brew_beverage_quantity = 220.0;
        assert_eq!(brew.output_quantity(), 250.0);
    }

    #[test]
    fn caffeine_scales_with_dose() {
        let brew = espresso_brew();
        assert_eq!(brew.caffeine_amount_mg(), 18.0 * CAFFEINE_MG_PER_GRAM);
    }

    #[test]
    fn decaf_bean_has_no_caffeine() {
        let mut bean = Bean::new("Sleepy", "Roastery");
        bean.decaffeinated = true;
        let preparation = Arc::new(Preparation::new("V60", PreparationStyle::PourOver));
        let mut brew = Brew::new(Arc::new(bean), preparation, None);
        brew.grind_weight = 18.0;
        assert_eq!(brew.caffeine_amount_mg(), 0.0);
    }

    #[test]
    fn extraction_yield_uses_style_output() {
        let brew = espresso_brew();
        // 36g out * 10% TDS / 18g dose
        assert_eq!(brew.extraction_yield_percent(), 20.0);
    }

    #[test]
    fn extraction_yield_is_zero_without_dose() {
        let mut brew = espresso_brew();
        brew.grind_weight = 0.0;
        assert_eq!(brew.extraction_yield_percent(), 0.0);
    }

    #[test]
    fn brew_time_formats_as_minutes_and_seconds() {
        let mut brew = espresso_brew();
        brew.brew_time = 154;
        assert_eq!(brew.formatted_brew_time(), "02:34");
    }

    #[test]
    fn map_link_requires_coordinates() {
        let mut brew = espresso_brew();
        assert_eq!(brew.coordinate_map_link(), None);
        brew.coordinates = Some(Coordinates {
            latitude: 52.52,
            longitude: 13.405,
        });
        assert_eq!(
            brew.coordinate_map_link().unwrap(),
            "https://maps.google.com/?q=52.52,13.405"
        );
    }
}
