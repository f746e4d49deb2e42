//! Airport data and the GeoJSON shapes it is read from

use serde::Deserialize;

use crate::core::coordinates::GeoPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// ICAO/IATA identifier, or whatever best identifies the feature
    pub code: String,
    pub name: Option<String>,
    pub location: GeoPoint,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: Option<String>, location: GeoPoint) -> Self {
        Self {
            code: code.into(),
            name,
            location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Option<AirportProperties>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct AirportProperties {
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub ident: Option<String>,
    pub name: Option<String>,
}

impl AirportProperties {
    /// Best identifier available, in icao, iata, ident, name order.
    pub fn code(&self) -> Option<&str> {
        [&self.icao, &self.iata, &self.ident, &self.name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}
