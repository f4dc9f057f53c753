//! Sable Core - scene description for the Sable ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`
//! - **Presets**: the built-in demo scenes
//! - **Scene files**: JSON scene loading
//!
//! # Example
//!
//! ```ignore
//! use sable_core::{load_scene, Preset};
//!
//! let room = Preset::Room.scene();
//! let custom = load_scene("scene.json")?;
//! println!("{} spheres, {} lights", custom.sphere_count(), custom.light_count());
//! ```

pub mod error;
pub mod loader;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use presets::Preset;
pub use scene::{Intensity, Light, Scene, Sphere};
