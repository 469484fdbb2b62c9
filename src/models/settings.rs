use serde::{Deserialize, Serialize};

/// Default maximum of the brew rating scale.
pub const DEFAULT_MAX_RATING: i32 = 5;
/// Default step size of the brew rating scale.
pub const DEFAULT_RATING_STEPS: f64 = 1.0;

/// Process-wide configuration consumed by the brew card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Maximum value of the rating scale.
    pub brew_rating: i32,
    /// Step size between selectable ratings.
    pub brew_rating_steps: f64,
    pub track_caffeine_consumption: bool,
    pub manage_parameters: BrewParameterConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brew_rating: DEFAULT_MAX_RATING,
            brew_rating_steps: DEFAULT_RATING_STEPS,
            track_caffeine_consumption: false,
            manage_parameters: BrewParameterConfig::default(),
        }
    }
}

/// Per-field visibility of brew parameters on the card and in edit forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrewParameterConfig {
    pub bean_type: bool,
    pub brew_time: bool,
    pub brew_temperature_time: bool,
    pub grind_size: bool,
    pub grind_weight: bool,
    pub mill: bool,
    pub mill_speed: bool,
    pub mill_timer: bool,
    pub pressure_profile: bool,
    pub method_of_preparation: bool,
    pub method_of_preparation_tool: bool,
    pub brew_quantity: bool,
    pub brew_temperature: bool,
    pub brew_beverage_quantity: bool,
    pub note: bool,
    pub coffee_type: bool,
    pub coffee_concentration: bool,
    pub coffee_first_drip_time: bool,
    pub coffee_blooming_time: bool,
    pub rating: bool,
    pub tds: bool,
    pub attachments: bool,
    pub water: bool,
    pub bean_weight_in: bool,
    pub vessel: bool,
}

impl Default for BrewParameterConfig {
    fn default() -> Self {
        Self {
            bean_type: true,
            brew_time: true,
            brew_temperature_time: false,
            grind_size: true,
            grind_weight: true,
            mill: true,
            mill_speed: false,
            mill_timer: false,
            pressure_profile: false,
            method_of_preparation: true,
            method_of_preparation_tool: false,
            brew_quantity: true,
            brew_temperature: true,
            brew_beverage_quantity: true,
            note: true,
            coffee_type: false,
            coffee_concentration: false,
            coffee_first_drip_time: true,
            coffee_blooming_time: true,
            rating: true,
            tds: false,
            attachments: false,
            water: false,
            bean_weight_in: false,
            vessel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_is_five_by_one() {
        let settings = Settings::default();
        assert_eq!(settings.brew_rating, 5);
        assert_eq!(settings.brew_rating_steps, 1.0);
        assert!(!settings.track_caffeine_consumption);
    }

    #[test]
    fn default_parameters_show_core_fields_only() {
        let params = BrewParameterConfig::default();
        assert!(params.grind_weight);
        assert!(params.rating);
        assert!(params.brew_beverage_quantity);
        assert!(!params.tds);
        assert!(!params.pressure_profile);
        assert!(!params.attachments);
    }
}
