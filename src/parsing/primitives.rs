use crate::geometry::{Plane, Sphere};
use crate::math::*;
use crate::parsing::{Point3Data, Vec3Data};

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
    pub color: [f32; 3],
}

impl SphereData {
    pub fn parse(self) -> anyhow::Result<Sphere> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            anyhow::bail!("radius must be positive and finite, got {}", self.radius);
        }
        Ok(Sphere::new(
            self.radius,
            point_from_array(self.center),
            RGBAColor::opaque(self.color),
        ))
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct PlaneData {
    pub point: Point3Data,
    pub normal: Vec3Data,
    pub color: Option<[f32; 3]>, // defaults to white. hits use the checker pattern either way
}

impl PlaneData {
    pub fn parse(self) -> anyhow::Result<Plane> {
        let normal = vec_from_array(self.normal);
        let length = normal.norm();
        if !(length.is_finite() && length > 0.0) {
            anyhow::bail!("plane normal must be nonzero, got {:?}", self.normal);
        }
        if (length - 1.0).abs() > 1e-4 {
            warn!("normalizing plane normal {:?}", self.normal);
        }
        Ok(Plane::new(
            point_from_array(self.point),
            normal,
            RGBAColor::opaque(self.color.unwrap_or([1.0, 1.0, 1.0])),
        ))
    }
}
