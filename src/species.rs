//! Species value object - the closed set of animal kinds the calculator knows

use serde::{Deserialize, Serialize};

/// Animal species processed by the calculator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Beef,
    Hog,
    Bison,
    Lamb,
    Goat,
    Venison,
    Yak,
    Veal,
}

impl Species {
    /// Every species, in catalog order
    pub const ALL: [Species; 8] = [
        Species::Beef,
        Species::Hog,
        Species::Bison,
        Species::Lamb,
        Species::Goat,
        Species::Venison,
        Species::Yak,
        Species::Veal,
    ];

    /// Average hanging weight per animal, in pounds
    pub fn avg_hanging_weight(&self) -> f64 {
        match self {
            Species::Beef => 700.0,
            Species::Hog => 200.0,
            Species::Bison => 600.0,
            Species::Lamb => 50.0,
            Species::Goat => 40.0,
            Species::Venison => 100.0,
            Species::Yak => 600.0,
            Species::Veal => 200.0,
        }
    }

    /// Lowercase identifier, matching the persisted form
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Beef => "beef",
            Species::Hog => "hog",
            Species::Bison => "bison",
            Species::Lamb => "lamb",
            Species::Goat => "goat",
            Species::Venison => "venison",
            Species::Yak => "yak",
            Species::Veal => "veal",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Beef => "Beef",
            Species::Hog => "Hog",
            Species::Bison => "Bison",
            Species::Lamb => "Lamb",
            Species::Goat => "Goat",
            Species::Venison => "Venison",
            Species::Yak => "Yak",
            Species::Veal => "Veal",
        }
    }

    /// Parse the lowercase identifier back into a species
    pub fn parse(value: &str) -> Option<Species> {
        Species::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
