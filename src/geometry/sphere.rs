use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub color: RGBAColor,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, color: RGBAColor) -> Sphere {
        Sphere {
            radius,
            origin,
            color,
        }
    }

    // b and the discriminant of |o + t*d - c|^2 = r^2 for unit d
    fn discriminant(&self, r: Ray) -> (f32, f32) {
        let oc: Vec3 = r.origin - self.origin;
        let b = r.direction.dot(&oc);
        let discriminant = b * b - oc.norm_squared() + self.radius * self.radius;
        (b, discriminant)
    }

    fn record_at(&self, r: Ray, time: f32) -> HitRecord {
        let point = r.point_at_parameter(time);
        let normal = (point - self.origin) / self.radius;
        HitRecord::new(time, point, normal, self.color)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let (b, discriminant) = self.discriminant(r);
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        // near root first, far root only when the near one is behind t0
        for time in [-b - discriminant_sqrt, -b + discriminant_sqrt] {
            if time >= t0 && time < t1 {
                return Some(self.record_at(r, time));
            }
        }
        None
    }

    fn legacy_candidate(&self, r: Ray) -> Option<HitRecord> {
        let (b, discriminant) = self.discriminant(r);
        if discriminant < 0.0 {
            return None;
        }
        let mu = -b - discriminant.sqrt();
        let record = self.record_at(r, mu);
        Some(HitRecord {
            time: (record.point - r.origin).norm(),
            ..record
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(z: f32) -> Sphere {
        Sphere::new(1.0, Point3::new(0.0, 0.0, z), RGBAColor::WHITE)
    }

    #[test]
    fn test_hit_distance_towards_center() {
        let sphere = Sphere::new(0.6, Point3::new(-0.5, 0.0, -2.0), RGBAColor::WHITE);
        let origins = [
            Point3::origin(),
            Point3::new(3.0, 2.0, 1.0),
            Point3::new(-4.0, -1.0, -9.0),
        ];
        for origin in origins {
            let ray = Ray::new(origin, sphere.origin - origin);
            let hit = sphere.hit(ray, 0.0, INFINITY).unwrap();
            let expected = (sphere.origin - origin).norm() - sphere.radius;
            assert!((hit.time - expected).abs() < 1e-4, "{} {}", hit.time, expected);
            assert!((hit.normal.norm() - 1.0).abs() < 1e-5);
            // outward normal faces back towards the origin
            assert!(hit.normal.dot(&ray.direction) < 0.0);
        }
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Point3::new(0.0, 2.0, 0.0), -Vec3::z());
        assert!(sphere.hit(ray, 0.0, INFINITY).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        assert!(sphere.hit(ray, 0.0, INFINITY).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = unit_sphere_at(0.0);
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let hit = sphere.hit(ray, 0.0, INFINITY).unwrap();
        assert!((hit.time - 1.0).abs() < 1e-5);
        assert!((hit.point - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_tangent_ray_hits() {
        let sphere = unit_sphere_at(-3.0);
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), -Vec3::z());
        let hit = sphere.hit(ray, 0.0, INFINITY).unwrap();
        assert!((hit.time - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_t1_bounds_the_hit() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        assert!(sphere.hit(ray, 0.0, 3.0).is_none());
        assert!(sphere.hit(ray, 0.0, 4.5).is_some());
    }

    #[test]
    fn test_legacy_candidate_reports_spheres_behind() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        let candidate = sphere.legacy_candidate(ray).unwrap();
        // smaller root is mu = -6, so the recorded point is the far side behind the origin
        assert!((candidate.time - 6.0).abs() < 1e-4);
        assert!((candidate.point - Point3::new(0.0, 0.0, 6.0)).norm() < 1e-4);
    }
}
