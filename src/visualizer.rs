//! Shot-data interchange record for external visualizer tools.
//!
//! Dormant export path: the card controller can build this record from a
//! brew, but nothing in the crate writes it to disk or uploads it. All
//! values are serialized as strings, matching the consumer's wire shape.

use serde::{Deserialize, Serialize};

use crate::models::Brew;

const EXPORT_VERSION: &str = "2";
const TOOL_IDENTITY: &str = "Brewlog";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerBean {
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerShotMeta {
    pub enjoyment: String,
    pub tds: String,
    pub ey: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerGrinder {
    pub setting: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerMeta {
    #[serde(rename = "in")]
    pub input: String,
    pub out: String,
    pub time: String,
    pub bean: VisualizerBean,
    pub shot: VisualizerShotMeta,
    pub grinder: VisualizerGrinder,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerProfile {
    pub title: String,
    pub author: String,
    pub beverage_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerTotals {
    pub weight: Vec<String>,
}

/// A versioned shot record with nested meta, profile, elapsed and totals
/// sections. The elapsed/weight series are fixed placeholders until live
/// scale data is wired in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizerShot {
    pub version: String,
    pub timestamp: String,
    pub clock: String,
    pub date: String,
    pub profile: VisualizerProfile,
    pub meta: VisualizerMeta,
    pub elapsed: Vec<String>,
    pub totals: VisualizerTotals,
}

impl VisualizerShot {
    pub fn from_brew(brew: &Brew) -> Self {
        let bean = brew.bean();
        let unix = brew.unix_timestamp();

        Self {
            version: EXPORT_VERSION.to_string(),
            timestamp: unix.to_string(),
            clock: unix.to_string(),
            date: brew.created_at.to_rfc2822(),
            profile: VisualizerProfile {
                title: TOOL_IDENTITY.to_string(),
                author: TOOL_IDENTITY.to_string(),
                beverage_type: "espresso".to_string(),
            },
            meta: VisualizerMeta {
                input: brew.grind_weight.to_string(),
                out: brew.output_quantity().to_string(),
                time: format!("{}.{}", brew.brew_time, brew.brew_time_milliseconds),
                bean: VisualizerBean {
                    brand: bean.roaster.clone(),
                    kind: bean.name.clone(),
                },
                shot: VisualizerShotMeta {
                    enjoyment: brew.rating.to_string(),
                    tds: brew.tds.to_string(),
                    ey: format!("{:.2}", brew.extraction_yield_percent()),
                },
                grinder: VisualizerGrinder {
                    setting: brew.grind_size.clone(),
                },
            },
            elapsed: ["0.045", "0.248", "0.552", "0.761", "1.0"]
                .map(String::from)
                .to_vec(),
            totals: VisualizerTotals {
                weight: ["1", "2", "3", "4", "5"].map(String::from).to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{Bean, Mill, Preparation, PreparationStyle};

    fn brew(style: PreparationStyle) -> Brew {
        let bean = Arc::new(Bean::new("Chelbesa", "Tim Wendelboe"));
        let preparation = Arc::new(Preparation::new("Method", style));
        let mut brew = Brew::new(bean, preparation, Some(Arc::new(Mill::new("EK43"))));
        brew.grind_weight = 18.0;
        brew.grind_size = "2.5".to_string();
        brew.brew_time = 27;
        brew.brew_time_milliseconds = 300;
        brew.brew_quantity = 40.0;
        brew.brew_beverage_quantity = 36.0;
        brew.rating = 4.0;
        brew.tds = 10.0;
        brew
    }

    #[test]
    fn espresso_out_is_beverage_quantity() {
        let shot = VisualizerShot::from_brew(&brew(PreparationStyle::Espresso));
        assert_eq!(shot.meta.out, "36");
        assert_eq!(shot.meta.input, "18");
    }

    #[test]
    fn filter_out_is_brew_quantity() {
        let shot = VisualizerShot::from_brew(&brew(PreparationStyle::PourOver));
        assert_eq!(shot.meta.out, "40");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let shot = VisualizerShot::from_brew(&brew(PreparationStyle::Espresso));
        let json = serde_json::to_value(&shot).unwrap();

        assert_eq!(json["version"], "2");
        assert_eq!(json["meta"]["in"], "18");
        assert_eq!(json["meta"]["time"], "27.300");
        assert_eq!(json["meta"]["bean"]["brand"], "Tim Wendelboe");
        assert_eq!(json["meta"]["bean"]["type"], "Chelbesa");
        assert_eq!(json["meta"]["shot"]["enjoyment"], "4");
        assert_eq!(json["meta"]["shot"]["ey"], "20.00");
        assert_eq!(json["meta"]["grinder"]["setting"], "2.5");
        assert_eq!(json["profile"]["title"], "Brewlog");
        assert_eq!(json["elapsed"].as_array().unwrap().len(), 5);
        assert_eq!(json["totals"]["weight"].as_array().unwrap().len(), 5);
    }
}
