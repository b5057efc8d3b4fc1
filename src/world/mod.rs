use crate::geometry::*;
use crate::hittable::{HitRecord, Hittable, ScanMode};
use crate::math::*;

/// pushes reflected rays off the surface they leave from
pub const NORMAL_OFFSET: f32 = 0.001;
/// shadow rays start this far *behind* the surface, against the normal.
/// offsetting along the normal lets spheres see themselves.
pub const SHADOW_OFFSET: f32 = 0.05;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
}

impl PointLight {
    pub fn new(position: Point3) -> Self {
        PointLight { position }
    }
}

/// immutable scene description. built once, shared read-only by every pixel.
#[derive(Clone, Debug)]
pub struct World {
    primitives: HittableList,
    pub light: PointLight,
}

impl World {
    pub fn new(plane: Plane, spheres: Vec<Sphere>, light: PointLight) -> Self {
        // plane first, then spheres in order. order only matters for ties
        // and for ScanMode::LegacyFlagClearing
        let mut list: Vec<Aggregate> = Vec::with_capacity(spheres.len() + 1);
        list.push(Aggregate::from(plane));
        list.extend(spheres.into_iter().map(Aggregate::from));
        World {
            primitives: HittableList::new(list),
            light,
        }
    }

    /// six spheres over a checkerboard floor at y = -0.5, lit from (6, 4, 3).
    pub fn default_scene() -> Self {
        let spheres = vec![
            Sphere::new(1.5, Point3::new(-2.0, 1.5, -3.5), RGBAColor::opaque([0.8, 0.8, 0.8])),
            Sphere::new(0.6, Point3::new(-0.5, 0.0, -2.0), RGBAColor::opaque([0.3, 0.8, 0.3])),
            Sphere::new(0.8, Point3::new(1.0, 0.7, -2.2), RGBAColor::opaque([0.3, 0.8, 0.8])),
            Sphere::new(0.2, Point3::new(0.7, -0.3, -1.2), RGBAColor::opaque([0.8, 0.8, 0.3])),
            Sphere::new(0.2, Point3::new(-0.7, -0.3, -1.2), RGBAColor::opaque([0.8, 0.3, 0.3])),
            Sphere::new(0.3, Point3::new(0.2, -0.2, -1.2), RGBAColor::opaque([0.8, 0.3, 0.8])),
        ];
        let plane = Plane::new(
            Point3::new(0.0, -0.5, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            RGBAColor::WHITE,
        );
        World::new(plane, spheres, PointLight::new(Point3::new(6.0, 4.0, 3.0)))
    }

    pub fn hit(&self, r: Ray, mode: ScanMode) -> Option<HitRecord> {
        self.primitives.scan(r, mode)
    }

    pub fn primitives(&self) -> &[Aggregate] {
        &self.primitives.list
    }

    pub fn plane(&self) -> Option<&Plane> {
        self.primitives.list.iter().find_map(|p| match p {
            Aggregate::Plane(plane) => Some(plane),
            _ => None,
        })
    }

    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.primitives.list.iter().filter_map(|p| match p {
            Aggregate::Sphere(sphere) => Some(sphere),
            _ => None,
        })
    }
}

impl Default for World {
    fn default() -> Self {
        World::default_scene()
    }
}
