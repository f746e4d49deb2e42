//! Application configuration
//!
//! Every tunable lives in a typed struct with defaults matching the stock
//! scene. A JSON file in the platform config directory may override any
//! subset of fields:
//! - Linux: ~/.config/flightarc/config.json
//! - macOS: ~/Library/Application Support/flightarc/config.json
//! - Windows: %APPDATA%\flightarc\config\config.json

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::airports::RouteSelection;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid config value for `{field}`: {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub renderer: RendererConfig,
    pub lights: LightConfig,
    pub globe: GlobeConfig,
    pub flight: FlightConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fovy_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Multiplier applied to the route endpoints to place the camera
    pub distance_scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy_deg: 40.0,
            near: 0.1,
            far: 100.0,
            distance_scale: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub window_title: String,
    /// sRGB clear color
    pub clear_color: [f32; 3],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            window_title: "Flight Arc".to_string(),
            clear_color: [0.067, 0.067, 0.067],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub directional_color: [f32; 3],
    pub directional_illuminance: f32,
    pub directional_position: [f32; 3],
    pub ambient_color: [f32; 3],
    pub ambient_brightness: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            directional_color: [1.0, 1.0, 1.0],
            directional_illuminance: 8_000.0,
            directional_position: [1.0, 2.0, 3.0],
            ambient_color: [1.0, 1.0, 1.0],
            ambient_brightness: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub radius: f64,
    pub color: [f32; 3],
    /// Optional equirectangular texture, relative to the assets directory
    pub texture: Option<String>,
    /// Overlay the sphere's triangle edges
    pub wireframe: bool,
    pub wireframe_color: [f32; 3],
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: [0.92, 0.92, 0.92],
            texture: None,
            wireframe: true,
            wireframe_color: [0.2, 0.45, 0.6],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// GeoJSON airport catalog: a file path or an http(s) URL
    pub airports: String,
    pub route: RouteSelection,
    /// Height above the globe surface the route is flown at
    pub altitude: f64,
    /// Seconds per trip in timed mode
    pub period_secs: f64,
    /// Steps per trip in stepped mode
    pub manual_steps: u32,
    /// Segments used to draw the route line
    pub route_segments: usize,
    /// Seed for random route picks; entropy when unset
    pub seed: Option<u64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            airports: "assets/airports.geojson".to_string(),
            route: RouteSelection::default(),
            altitude: 0.2,
            period_secs: 10.0,
            manual_steps: 500,
            route_segments: 32,
            seed: None,
        }
    }
}

fn check(ok: bool, field: &'static str, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::new(field, reason))
    }
}

impl AppConfig {
    /// Load the user config file if present, otherwise use defaults.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                println!("[CONFIG] no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                println!("[CONFIG] config directory unavailable, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        println!("[CONFIG] loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Distance from the globe centre at which the route is flown.
    pub fn route_radius(&self) -> f64 {
        self.globe.radius + self.flight.altitude
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.camera;
        check(
            c.fovy_deg > 0.0 && c.fovy_deg < 180.0,
            "camera.fovy_deg",
            "must be in (0, 180)",
        )?;
        check(c.near > 0.0, "camera.near", "must be positive")?;
        check(c.far > c.near, "camera.far", "must be greater than camera.near")?;
        check(
            c.distance_scale.is_finite() && c.distance_scale > 0.0,
            "camera.distance_scale",
            "must be positive",
        )?;

        let l = &self.lights;
        check(
            l.directional_illuminance >= 0.0,
            "lights.directional_illuminance",
            "must not be negative",
        )?;
        check(
            l.ambient_brightness >= 0.0,
            "lights.ambient_brightness",
            "must not be negative",
        )?;

        check(
            self.globe.radius.is_finite() && self.globe.radius > 0.0,
            "globe.radius",
            "must be positive",
        )?;

        let f = &self.flight;
        check(!f.airports.trim().is_empty(), "flight.airports", "must not be empty")?;
        check(
            f.altitude.is_finite() && f.altitude >= 0.0,
            "flight.altitude",
            "must not be negative",
        )?;
        check(
            f.period_secs.is_finite() && f.period_secs > 0.0,
            "flight.period_secs",
            "must be positive",
        )?;
        check(f.manual_steps > 0, "flight.manual_steps", "must be positive")?;
        check(f.route_segments > 0, "flight.route_segments", "must be positive")?;
        if let RouteSelection::Fixed { departure, arrival } = &f.route {
            departure
                .to_airport()
                .map_err(|e| ConfigError::new("flight.route.departure", e.to_string()))?;
            arrival
                .to_airport()
                .map_err(|e| ConfigError::new("flight.route.arrival", e.to_string()))?;
        }
        Ok(())
    }
}

/// Location of the user config file.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flightarc").map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}
