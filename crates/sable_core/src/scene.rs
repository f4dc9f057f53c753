//! Scene types for Sable.
//!
//! A scene is an ordered list of spheres plus an unordered set of lights.
//! Sphere order only matters for breaking exact intersection ties.

use sable_math::{unit_vector, Color, DVec3};

use crate::error::{SceneError, SceneResult};

/// A sphere with a flat colour and Phong-style surface parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    color: Color,
    specular: Option<f64>,
    reflectivity: f64,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// `specular` is the shininess exponent, `None` for a matte surface.
    /// `reflectivity` is the fraction of the final colour taken from the
    /// mirror reflection and must lie in `[0, 1]`.
    pub fn new(
        center: DVec3,
        radius: f64,
        color: Color,
        specular: Option<f64>,
        reflectivity: f64,
    ) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidSphere { radius });
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidParameter(format!(
                "sphere center must be finite, got {center}"
            )));
        }
        if !color.is_finite() || color.min_element() < 0.0 || color.max_element() > 255.0 {
            return Err(SceneError::InvalidParameter(format!(
                "sphere color channels must be in [0, 255], got {color}"
            )));
        }
        if let Some(exponent) = specular {
            if !(exponent.is_finite() && exponent >= 0.0) {
                return Err(SceneError::InvalidParameter(format!(
                    "specular exponent must be non-negative, got {exponent}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidParameter(format!(
                "reflectivity must be in [0, 1], got {reflectivity}"
            )));
        }

        Ok(Self {
            center,
            radius,
            color,
            specular,
            reflectivity,
        })
    }

    /// A matte, non-reflective sphere.
    pub fn matte(center: DVec3, radius: f64, color: Color) -> SceneResult<Self> {
        Self::new(center, radius, color, None, 0.0)
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Shininess exponent, or `None` when specular highlights are disabled.
    pub fn specular(&self) -> Option<f64> {
        self.specular
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    /// True if tracing this surface spawns a reflection ray.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

/// Light intensity, either uniform or per channel.
///
/// A scalar intensity is the same value on every channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intensity(pub DVec3);

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Self(DVec3::splat(value))
    }
}

impl From<DVec3> for Intensity {
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl From<[f64; 3]> for Intensity {
    fn from(value: [f64; 3]) -> Self {
        Self(DVec3::from_array(value))
    }
}

/// A light source.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point regardless of geometry.
    Ambient { intensity: DVec3 },
    /// Light radiating from a position.
    Point { intensity: DVec3, position: DVec3 },
    /// Light arriving from infinitely far away. `direction` points from
    /// the scene *towards* the light.
    Directional { intensity: DVec3, direction: DVec3 },
}

impl Light {
    pub fn ambient(intensity: impl Into<Intensity>) -> Self {
        Light::Ambient {
            intensity: intensity.into().0,
        }
    }

    pub fn point(intensity: impl Into<Intensity>, position: DVec3) -> Self {
        Light::Point {
            intensity: intensity.into().0,
            position,
        }
    }

    /// Create a directional light. A zero direction has no meaning and is
    /// rejected.
    pub fn directional(intensity: impl Into<Intensity>, direction: DVec3) -> SceneResult<Self> {
        unit_vector(direction)?;
        Ok(Light::Directional {
            intensity: intensity.into().0,
            direction,
        })
    }

    /// Per-channel intensity of this light.
    pub fn intensity(&self) -> DVec3 {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }

    /// Short name of the light kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Light::Ambient { .. } => "ambient",
            Light::Point { .. } => "point",
            Light::Directional { .. } => "directional",
        }
    }
}

/// A complete scene: spheres and the lights that illuminate them.
///
/// The scene is read-only while a frame renders. Switching to another
/// preset means building a new `Scene`, never patching one in place.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    name: String,
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Builder-style `add_sphere`.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Builder-style `add_light`.
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Scene name (preset name or file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// True if no sphere reflects, so trace depth cannot change the image.
    pub fn is_matte(&self) -> bool {
        !self.spheres.iter().any(Sphere::is_reflective)
    }
}
