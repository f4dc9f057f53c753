//! JSON scene loading.
//!
//! A scene file mirrors the in-memory model:
//!
//! ```json
//! {
//!   "name": "three balls",
//!   "spheres": [
//!     { "center": [0, 1, 3], "radius": 1, "color": [255, 0, 0],
//!       "specular": 500, "reflectivity": 0.2 }
//!   ],
//!   "lights": [
//!     { "type": "ambient", "intensity": 0.2 },
//!     { "type": "point", "intensity": [0.6, 0.5, 0.5], "position": [2, -1, 0] },
//!     { "type": "directional", "intensity": 0.2, "direction": [1, -4, 4] }
//!   ]
//! }
//! ```
//!
//! `specular` defaults to disabled and any negative value (conventionally
//! `-1`) also disables it. `reflectivity` defaults to 0.

use std::path::Path;

use sable_math::DVec3;
use serde::Deserialize;
use thiserror::Error;

use crate::error::SceneError;
use crate::scene::{Intensity, Light, Scene, Sphere};

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene error in {context}: {source}")]
    Scene {
        context: String,
        #[source]
        source: SceneError,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    spheres: Vec<SphereEntry>,
    #[serde(default)]
    lights: Vec<LightEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereEntry {
    center: [f64; 3],
    radius: f64,
    #[serde(alias = "colour")]
    color: [f64; 3],
    #[serde(default = "specular_disabled")]
    specular: f64,
    #[serde(default, alias = "reflection")]
    reflectivity: f64,
}

fn specular_disabled() -> f64 {
    -1.0
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntensityEntry {
    Scalar(f64),
    Rgb([f64; 3]),
}

impl From<IntensityEntry> for Intensity {
    fn from(entry: IntensityEntry) -> Self {
        match entry {
            IntensityEntry::Scalar(value) => value.into(),
            IntensityEntry::Rgb(rgb) => rgb.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LightEntry {
    Ambient {
        intensity: IntensityEntry,
    },
    Point {
        intensity: IntensityEntry,
        position: [f64; 3],
    },
    Directional {
        intensity: IntensityEntry,
        direction: [f64; 3],
    },
}

/// Load a scene from a JSON file.
///
/// When the file has no `name`, the file stem is used.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;
    if scene.name().is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.set_name(stem.to_string_lossy());
        }
    }
    Ok(scene)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(text)?;
    let mut scene = Scene::new(file.name.unwrap_or_default());

    for (i, entry) in file.spheres.into_iter().enumerate() {
        let specular = (entry.specular >= 0.0).then_some(entry.specular);
        let sphere = Sphere::new(
            DVec3::from_array(entry.center),
            entry.radius,
            DVec3::from_array(entry.color),
            specular,
            entry.reflectivity,
        )
        .map_err(|source| LoadError::Scene {
            context: format!("sphere {i}"),
            source,
        })?;
        scene.add_sphere(sphere);
    }

    for (i, entry) in file.lights.into_iter().enumerate() {
        let light = match entry {
            LightEntry::Ambient { intensity } => Ok(Light::ambient(intensity)),
            LightEntry::Point {
                intensity,
                position,
            } => Ok(Light::point(intensity, DVec3::from_array(position))),
            LightEntry::Directional {
                intensity,
                direction,
            } => Light::directional(intensity, DVec3::from_array(direction)),
        }
        .map_err(|source| LoadError::Scene {
            context: format!("light {i}"),
            source,
        })?;
        log::debug!("Light {i}: {} {}", light.kind(), light.intensity());
        scene.add_light(light);
    }

    if scene.light_count() == 0 {
        log::warn!("Scene '{}' has no lights; it will render black", scene.name());
    }
    log::debug!(
        "Loaded scene '{}': {} spheres, {} lights",
        scene.name(),
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}
