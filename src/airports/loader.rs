//! Airport catalog loading
//!
//! The catalog is read once before the render loop starts, either from a
//! local GeoJSON file or from an http(s) URL.

use anyhow::{Context, bail};
use std::fs;

use crate::airports::types::{Airport, Feature, FeatureCollection};
use crate::core::coordinates::GeoPoint;

/// Load and parse the airport catalog at `source` (path or URL).
pub fn load_airports(source: &str) -> anyhow::Result<Vec<Airport>> {
    let body = if is_url(source) {
        fetch_text(source)?
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("failed to read airport catalog {}", source))?
    };
    let airports = parse_airports(&body)
        .with_context(|| format!("failed to parse airport catalog {}", source))?;
    println!("[AIRPORTS] loaded {} airports from {}", airports.len(), source);
    Ok(airports)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_text(url: &str) -> anyhow::Result<String> {
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(async {
        let client = reqwest::Client::new();
        let resp = client
            .get(url)
            .header("accept", "application/geo+json, application/json")
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        println!("[AIRPORTS FETCH] status={} url={} bytes={}", status, url, body.len());
        if !status.is_success() {
            bail!("HTTP {} for airport catalog", status);
        }
        Ok::<_, anyhow::Error>(body)
    })
}

/// Parse a GeoJSON feature collection of airport points.
///
/// Non-point features and points with out-of-range coordinates are skipped.
/// An empty result is an error since no route can be built from it.
pub fn parse_airports(json: &str) -> anyhow::Result<Vec<Airport>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let mut airports = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        match airport_from_feature(index, feature) {
            Ok(airport) => airports.push(airport),
            Err(e) => eprintln!("[AIRPORTS] skipping feature #{}: {}", index, e),
        }
    }

    if airports.is_empty() {
        bail!("airport catalog contains no usable point features");
    }
    Ok(airports)
}

fn airport_from_feature(index: usize, feature: &Feature) -> anyhow::Result<Airport> {
    let Some(geometry) = &feature.geometry else {
        bail!("missing geometry");
    };
    if geometry.kind != "Point" {
        bail!("unsupported geometry type {}", geometry.kind);
    }
    let coords: Vec<f64> = serde_json::from_value(geometry.coordinates.clone())
        .context("point coordinates are not numbers")?;
    let [lon, lat, ..] = coords[..] else {
        bail!("point has {} coordinates, need at least 2", coords.len());
    };
    let location = GeoPoint::from_degrees(lon, lat)?;

    let props = feature.properties.as_ref();
    let code = props
        .and_then(|p| p.code())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index));
    let name = props.and_then(|p| p.name.clone());
    Ok(Airport::new(code, name, location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "icao": "RJAA", "iata": "NRT", "name": "Narita International Airport" },
                "geometry": { "type": "Point", "coordinates": [140.3918802566464, 35.77236075211366] }
            },
            {
                "type": "Feature",
                "properties": { "iata": "JFK" },
                "geometry": { "type": "Point", "coordinates": [-73.79224242824078, 40.65119586398563, 4.0] }
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": { "type": "Point", "coordinates": [2.55, 49.0097] }
            }
        ]
    }"#;

    #[test]
    fn test_parse_airports_codes_and_locations() {
        let airports = parse_airports(SAMPLE).unwrap();
        assert_eq!(airports.len(), 3);

        assert_eq!(airports[0].code, "RJAA");
        assert_eq!(
            airports[0].name.as_deref(),
            Some("Narita International Airport")
        );
        assert_eq!(airports[0].location.longitude(), 140.3918802566464);

        assert_eq!(airports[1].code, "JFK");
        assert_eq!(airports[1].name, None);
        assert_eq!(airports[1].location.latitude(), 40.65119586398563);

        assert_eq!(airports[2].code, "#2");
    }

    #[test]
    fn test_parse_airports_skips_unusable_features() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "icao": "LINE" },
                  "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] } },
                { "type": "Feature", "properties": { "icao": "BAD" },
                  "geometry": { "type": "Point", "coordinates": [0.0, 95.0] } },
                { "type": "Feature", "properties": { "icao": "SHORT" },
                  "geometry": { "type": "Point", "coordinates": [0.0] } },
                { "type": "Feature", "properties": { "icao": "NONE" }, "geometry": null },
                { "type": "Feature", "properties": { "icao": "EGLL" },
                  "geometry": { "type": "Point", "coordinates": [-0.4543, 51.47] } }
            ]
        }"#;
        let airports = parse_airports(json).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].code, "EGLL");
    }

    #[test]
    fn test_parse_airports_empty_catalog_is_error() {
        assert!(parse_airports(r#"{ "type": "FeatureCollection", "features": [] }"#).is_err());
        assert!(parse_airports("not json").is_err());
    }

    #[test]
    fn test_load_airports_from_file() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path: PathBuf = std::env::temp_dir().join(format!(
            "flightarc-airports-{}-{}.geojson",
            std::process::id(),
            nanos
        ));
        fs::write(&path, SAMPLE).unwrap();

        let airports = load_airports(path.to_str().unwrap()).unwrap();
        assert_eq!(airports.len(), 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_airports_missing_file() {
        let err = load_airports("/nonexistent/flightarc/airports.geojson").unwrap_err();
        assert!(err.to_string().contains("failed to read airport catalog"));
    }

    #[test]
    fn test_shipped_catalog_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/airports.geojson");
        let airports = load_airports(path).unwrap();
        assert!(airports.len() >= 2);
        assert!(airports.iter().any(|a| a.code == "RJAA"));
        assert!(airports.iter().any(|a| a.code == "KJFK"));
    }
}
