use super::{is_occluded, Integrator, ShadowPolicy};
use crate::hittable::ScanMode;
use crate::math::*;
use crate::shading::PhongShading;
use crate::world::{World, NORMAL_OFFSET};

/// weight of every reflected bounce after the primary hit
pub const REFLECTION_WEIGHT: f32 = 0.5;

/// primary hit with a shadow test, then up to `max_bounces - 1` mirror bounces.
pub struct WhittedIntegrator<'a> {
    pub world: &'a World,
    pub shading: PhongShading,
    pub max_bounces: u16,
    pub shadow_policy: ShadowPolicy,
    pub scan_mode: ScanMode,
    pub background: RGBAColor,
}

impl<'a> WhittedIntegrator<'a> {
    pub fn new(world: &'a World) -> Self {
        WhittedIntegrator {
            world,
            shading: PhongShading::default(),
            max_bounces: 1,
            shadow_policy: ShadowPolicy::default(),
            scan_mode: ScanMode::default(),
            background: RGBAColor::BLACK,
        }
    }
}

impl<'a> Integrator for WhittedIntegrator<'a> {
    fn color(&self, camera_ray: Ray) -> RGBAColor {
        let light = &self.world.light;
        let mut ray = camera_ray;
        let mut sum = self.background;

        for bounce in 0..self.max_bounces {
            let hit = match self.world.hit(ray, self.scan_mode) {
                Some(hit) => hit,
                // nothing to reflect about, the accumulated color stands
                None => break,
            };
            if bounce == 0 {
                let occluded = is_occluded(self.world, &hit, light, self.scan_mode);
                let diffuse_source = self.shadow_policy.diffuse_source(occluded, hit.color);
                sum = self.shading.shade(hit.point, hit.normal, diffuse_source, light);
            } else {
                sum += REFLECTION_WEIGHT
                    * self.shading.shade(hit.point, hit.normal, hit.color, light);
            }
            debug_assert!(sum.is_finite(), "ray {:?}, hit {:?}, sum {:?}", ray, hit, sum);

            ray = Ray::new(
                hit.point + NORMAL_OFFSET * hit.normal,
                reflect(ray.direction, hit.normal),
            );
        }
        sum
    }
}
