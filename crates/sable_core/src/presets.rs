//! Built-in demo scenes.
//!
//! The camera sits at the origin looking down +z, and image rows run
//! from -y at the top to +y at the bottom, so "up" in every preset is -y.

use std::fmt;
use std::str::FromStr;

use sable_math::{Color, DVec3};

use crate::error::SceneResult;
use crate::loader::LoadError;
use crate::scene::{Light, Scene, Sphere};

/// A named built-in scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Two reflective balls in a closed room with mirrored front and back walls.
    Room,
    /// Red, blue and green balls on a yellow floor, diffuse only.
    Basic,
    /// `Basic` with specular highlights.
    Shiny,
    /// `Shiny` with reflective surfaces.
    Mirrors,
    /// `Mirrors` lit by coloured lights.
    Colored,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Room,
        Preset::Basic,
        Preset::Shiny,
        Preset::Mirrors,
        Preset::Colored,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Room => "room",
            Preset::Basic => "basic",
            Preset::Shiny => "shiny",
            Preset::Mirrors => "mirrors",
            Preset::Colored => "colored",
        }
    }

    /// Build a fresh scene for this preset.
    pub fn scene(&self) -> SceneResult<Scene> {
        let mut scene = match self {
            Preset::Room => room()?,
            Preset::Basic => white_lights(balls(false, false)?)?,
            Preset::Shiny => white_lights(balls(true, false)?)?,
            Preset::Mirrors => white_lights(balls(true, true)?)?,
            Preset::Colored => colored_lights(balls(true, true)?)?,
        };
        scene.set_name(self.name());
        Ok(scene)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LoadError::UnknownPreset(s.to_string()))
    }
}

fn rgb(r: f64, g: f64, b: f64) -> Color {
    DVec3::new(r, g, b)
}

/// Two balls inside a box built from six huge spheres.
fn room() -> SceneResult<Scene> {
    let white = rgb(255.0, 255.0, 255.0);
    let wall = |center: DVec3, color: Color, reflectivity: f64| {
        Sphere::new(center, 5000.0, color, Some(1000.0), reflectivity)
    };

    Ok(Scene::new("room")
        .with_sphere(Sphere::new(
            DVec3::new(-0.35, 0.65, 3.0),
            0.35,
            rgb(0.0, 0.0, 255.0),
            Some(2000.0),
            0.3,
        )?)
        .with_sphere(Sphere::new(
            DVec3::new(0.35, 0.65, 2.5),
            0.35,
            rgb(255.0, 255.0, 0.0),
            Some(1000.0),
            0.5,
        )?)
        // Floor and ceiling
        .with_sphere(wall(DVec3::new(0.0, 5001.0, 0.0), white, 0.0)?)
        .with_sphere(wall(DVec3::new(0.0, -5001.0, 0.0), white, 0.0)?)
        // Left and right walls
        .with_sphere(wall(DVec3::new(-5001.0, 0.0, 0.0), rgb(150.0, 0.0, 0.0), 0.0)?)
        .with_sphere(wall(DVec3::new(5001.0, 0.0, 0.0), rgb(0.0, 150.0, 0.0), 0.0)?)
        // Front and back walls are mirrors
        .with_sphere(wall(DVec3::new(0.0, 0.0, -5001.0), white, 0.9)?)
        .with_sphere(wall(DVec3::new(0.0, 0.0, 5005.0), white, 0.9)?)
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.8, DVec3::new(0.0, -0.9, 2.0))))
}

/// Three balls on a big yellow floor, without lights.
fn balls(shiny: bool, reflective: bool) -> SceneResult<Scene> {
    let specular = |exponent: f64| shiny.then_some(exponent);
    let reflectivity = |r: f64| if reflective { r } else { 0.0 };

    Ok(Scene::new("balls")
        .with_sphere(Sphere::new(
            DVec3::new(0.0, 1.0, 3.0),
            1.0,
            rgb(255.0, 0.0, 0.0),
            specular(500.0),
            reflectivity(0.2),
        )?)
        .with_sphere(Sphere::new(
            DVec3::new(2.0, 0.0, 4.0),
            1.0,
            rgb(0.0, 0.0, 255.0),
            specular(500.0),
            reflectivity(0.3),
        )?)
        .with_sphere(Sphere::new(
            DVec3::new(-2.0, 0.0, 4.0),
            1.0,
            rgb(0.0, 255.0, 0.0),
            specular(10.0),
            reflectivity(0.4),
        )?)
        .with_sphere(Sphere::new(
            DVec3::new(0.0, 5001.0, 0.0),
            5000.0,
            rgb(255.0, 255.0, 0.0),
            specular(1000.0),
            reflectivity(0.5),
        )?))
}

fn white_lights(scene: Scene) -> SceneResult<Scene> {
    Ok(scene
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.6, DVec3::new(2.0, -1.0, 0.0)))
        .with_light(Light::directional(0.2, DVec3::new(1.0, -4.0, 4.0))?))
}

fn colored_lights(scene: Scene) -> SceneResult<Scene> {
    Ok(scene
        .with_light(Light::ambient([0.1, 0.1, 0.2]))
        .with_light(Light::point([0.9, 0.3, 0.2], DVec3::new(2.0, -1.0, 0.0)))
        .with_light(Light::directional([0.1, 0.2, 0.4], DVec3::new(1.0, -4.0, 4.0))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        for preset in Preset::ALL {
            let scene = preset.scene().unwrap();
            assert_eq!(scene.name(), preset.name());
            assert!(scene.sphere_count() > 0);
            assert!(scene.light_count() > 0);
        }
    }

    #[test]
    fn test_room_matches_layout() {
        let scene = Preset::Room.scene().unwrap();
        assert_eq!(scene.sphere_count(), 8);
        assert_eq!(scene.light_count(), 2);
        assert!(!scene.is_matte());
    }

    #[test]
    fn test_basic_is_matte() {
        let scene = Preset::Basic.scene().unwrap();
        assert!(scene.is_matte());
        assert!(scene.spheres().iter().all(|s| s.specular().is_none()));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("room".parse::<Preset>().unwrap(), Preset::Room);
        assert_eq!("Mirrors".parse::<Preset>().unwrap(), Preset::Mirrors);
        assert!(matches!(
            "nope".parse::<Preset>(),
            Err(LoadError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_builds_fresh_scene() {
        let mut a = Preset::Shiny.scene().unwrap();
        a.add_light(Light::ambient(1.0));
        let b = Preset::Shiny.scene().unwrap();
        assert_eq!(b.light_count(), a.light_count() - 1);
    }
}
