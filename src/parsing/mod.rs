pub mod config;
pub mod primitives;
pub mod tonemap;

pub use tonemap::parse_tonemapper;

use config::{Config, TOMLConfig};
use primitives::{PlaneData, SphereData};

use crate::camera::PinholeCamera;
use crate::math::*;
use crate::world::{PointLight, World};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];

#[derive(Deserialize, Clone, Debug)]
pub struct SceneData {
    pub light: Point3Data,
    pub plane: PlaneData,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
}

pub fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    debug!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings(filepath: &Path) -> anyhow::Result<Config> {
    let settings: TOMLConfig = load_arbitrary(filepath)?;
    let config = Config::from(settings);
    let resolution = config.render_settings.resolution;
    if resolution.width == 0 || resolution.height == 0 {
        anyhow::bail!(
            "resolution must be nonzero, got {}x{}",
            resolution.width,
            resolution.height
        );
    }
    if config.threads == 0 {
        anyhow::bail!("threads must be at least 1");
    }
    Ok(config)
}

impl SceneData {
    pub fn into_world(self) -> anyhow::Result<World> {
        let plane = self.plane.parse().context("invalid plane")?;
        let mut spheres = Vec::with_capacity(self.spheres.len());
        for (i, data) in self.spheres.into_iter().enumerate() {
            spheres.push(data.parse().with_context(|| format!("invalid sphere #{}", i))?);
        }
        info!("constructed scene with {} spheres", spheres.len());
        Ok(World::new(
            plane,
            spheres,
            PointLight::new(point_from_array(self.light)),
        ))
    }
}

/// the world described by `scene_file`, or the builtin default scene.
pub fn construct_world(scene_file: Option<&Path>) -> anyhow::Result<World> {
    match scene_file {
        Some(path) => {
            let scene: SceneData = load_arbitrary(path)?;
            scene.into_world()
        }
        None => {
            info!("no scene file given, using the default scene");
            Ok(World::default_scene())
        }
    }
}

pub fn construct_camera(config: &Config) -> PinholeCamera {
    let resolution = config.render_settings.resolution;
    let aspect_ratio = resolution.width as f32 / resolution.height as f32;
    let origin = config
        .camera
        .origin
        .map(point_from_array)
        .unwrap_or_else(Point3::origin);
    if origin != Point3::origin() {
        warn!("camera is not at the origin, highlights are still computed for a viewer at the origin");
    }
    PinholeCamera::new(origin, config.camera.vertical_fov, aspect_ratio)
}
