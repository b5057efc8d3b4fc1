use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

/// infinite plane, shaded with a procedural 1x1 checkerboard in x and z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
    // not used for shading, hits take the checker color
    pub color: RGBAColor,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3, color: RGBAColor) -> Plane {
        Plane {
            point,
            normal: normal.normalize(),
            color,
        }
    }

    /// black where x and z (mod 2) fall on the same side of 1, white otherwise.
    pub fn checker_color(point: Point3) -> RGBAColor {
        let x = floored_mod(point.x, 2.0);
        let z = floored_mod(point.z, 2.0);
        if (x > 1.0 && z > 1.0) || (x < 1.0 && z < 1.0) {
            RGBAColor::BLACK
        } else {
            RGBAColor::WHITE
        }
    }

    // ray parameter of the crossing, None when parallel or behind the origin
    fn crossing(&self, r: Ray) -> Option<f32> {
        let denominator = r.direction.dot(&self.normal);
        if denominator == 0.0 {
            return None;
        }
        let mu = -(r.origin - self.point).dot(&self.normal) / denominator;
        if mu > 0.0 && mu.is_finite() {
            Some(mu)
        } else {
            None
        }
    }

    fn record_at(&self, r: Ray, time: f32) -> HitRecord {
        let point = r.point_at_parameter(time);
        HitRecord::new(time, point, self.normal, Plane::checker_color(point))
    }
}

impl Hittable for Plane {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let time = self.crossing(r)?;
        if time >= t0 && time < t1 {
            Some(self.record_at(r, time))
        } else {
            None
        }
    }

    fn legacy_candidate(&self, r: Ray) -> Option<HitRecord> {
        self.crossing(r).map(|time| self.record_at(r, time))
    }
}
