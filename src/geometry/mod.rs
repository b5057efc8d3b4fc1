mod hittable_list;
mod plane;
mod sphere;

pub use hittable_list::HittableList;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Aggregate {
    Plane(Plane),
    Sphere(Sphere),
}

impl From<Sphere> for Aggregate {
    fn from(data: Sphere) -> Self {
        Aggregate::Sphere(data)
    }
}

impl From<Plane> for Aggregate {
    fn from(data: Plane) -> Self {
        Aggregate::Plane(data)
    }
}

impl Hittable for Aggregate {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        match self {
            Aggregate::Plane(plane) => plane.hit(r, t0, t1),
            Aggregate::Sphere(sphere) => sphere.hit(r, t0, t1),
        }
    }
    fn legacy_candidate(&self, r: Ray) -> Option<HitRecord> {
        match self {
            Aggregate::Plane(plane) => plane.legacy_candidate(r),
            Aggregate::Sphere(sphere) => sphere.legacy_candidate(r),
        }
    }
}
