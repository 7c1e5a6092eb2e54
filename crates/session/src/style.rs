//! Map style configuration.
//!
//! Pure settings data consumed by the renderer's style picker; no rendering
//! logic lives here.

use serde::Serialize;
use strum::EnumIter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseMapStyle {
    #[default]
    Standard,
    Hybrid,
    Imagery,
}

impl BaseMapStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Hybrid => "Hybrid",
            Self::Imagery => "Imagery",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    #[default]
    Flat,
    Realistic,
}

/// Whether the base map labels its own points of interest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiFilter {
    All,
    /// Hidden by default so trip markers stay legible
    #[default]
    ExcludingAll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MapStyleConfig {
    pub base_style: BaseMapStyle,
    pub elevation: Elevation,
    pub point_of_interest: PoiFilter,
    pub show_traffic: bool,
}
