mod whitted;

pub use whitted::WhittedIntegrator;

use crate::hittable::{HitRecord, ScanMode};
use crate::math::*;
use crate::world::{PointLight, World, SHADOW_OFFSET};

use serde::Deserialize;

/// how the shadow test feeds the diffuse term of a primary hit.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShadowPolicy {
    /// the behavior of the shader this renderer reproduces: an occluded shadow ray
    /// keeps the object's own color as the diffuse source, a clear one drops the
    /// diffuse term. shadow rays start inside the surface, so they usually hit it.
    #[default]
    Inverted,
    /// occluded points lose the diffuse term, visible ones keep the object color.
    Conventional,
}

impl ShadowPolicy {
    pub fn diffuse_source(&self, occluded: bool, color: RGBAColor) -> RGBAColor {
        match (self, occluded) {
            (ShadowPolicy::Inverted, true) | (ShadowPolicy::Conventional, false) => color,
            _ => RGBAColor::ZERO,
        }
    }
}

pub fn shadow_ray(hit: &HitRecord, light: &PointLight) -> Ray {
    let origin = hit.point - SHADOW_OFFSET * hit.normal;
    Ray::new(origin, light.position - hit.point)
}

/// whether the shadow ray from `hit` towards the light runs into anything.
/// the test is not limited to the segment between the point and the light.
pub fn is_occluded(world: &World, hit: &HitRecord, light: &PointLight, mode: ScanMode) -> bool {
    world.hit(shadow_ray(hit, light), mode).is_some()
}

pub trait Integrator: Sync + Send {
    fn color(&self, camera_ray: Ray) -> RGBAColor;
}
