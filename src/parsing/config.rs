use crate::hittable::ScanMode;
use crate::integrator::ShadowPolicy;
use crate::math::RGBAColor;
use crate::parsing::tonemap::TonemapSettings;
use crate::shading::ShadingParameters;

use serde::Deserialize;

use super::Point3Data;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub vertical_fov: f32,
    pub origin: Option<Point3Data>, // defaults to the origin, where shading assumes the viewer is
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_bounces: Option<u16>,
    pub shadow_policy: Option<ShadowPolicy>,
    pub scan_mode: Option<ScanMode>,
    pub background: Option<[f32; 4]>,
    pub shading: Option<ShadingParameters>,
    pub tonemap_settings: Option<TonemapSettings>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_bounces: u16,
    pub shadow_policy: ShadowPolicy,
    pub scan_mode: ScanMode,
    pub background: RGBAColor,
    pub shading: ShadingParameters,
    pub tonemap_settings: TonemapSettings,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            resolution: data.resolution,
            max_bounces: data.max_bounces.unwrap_or(1),
            shadow_policy: data.shadow_policy.unwrap_or_default(),
            scan_mode: data.scan_mode.unwrap_or_default(),
            background: data.background.map(RGBAColor::from).unwrap_or(RGBAColor::BLACK),
            shading: data.shading.unwrap_or_default(),
            tonemap_settings: data.tonemap_settings.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub scene_file: Option<String>, // builtin default scene when absent
    pub threads: Option<u16>,
    pub camera: CameraSettings,
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: Option<String>,
    pub threads: u16,
    pub camera: CameraSettings,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.scene_file,
            threads: data.threads.unwrap_or(num_cpus::get() as u16),
            camera: data.camera,
            render_settings: RenderSettings::from(data.render_settings),
        }
    }
}
