use crate::math::*;

/// pinhole camera looking down -z with +y up.
/// shading assumes the viewer at the origin, so moving `origin` skews highlights.
#[derive(Copy, Clone, Debug)]
pub struct PinholeCamera {
    pub origin: Point3,
    half_height: f32,
    half_width: f32,
}

impl PinholeCamera {
    // vertical_fov is given in degrees
    pub fn new(origin: Point3, vertical_fov: f32, aspect_ratio: f32) -> PinholeCamera {
        let theta = vertical_fov.to_radians();
        let half_height = (theta / 2.0).tan();
        PinholeCamera {
            origin,
            half_height,
            half_width: aspect_ratio * half_height,
        }
    }

    /// `s` runs left to right and `t` top to bottom, both in [0, 1].
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let x = (2.0 * s - 1.0) * self.half_width;
        let y = (1.0 - 2.0 * t) * self.half_height;
        Ray::new(self.origin, Vec3::new(x, y, -1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = PinholeCamera::new(Point3::origin(), 90.0, 1.0);
        let ray = camera.get_ray(0.5, 0.5);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
        assert_eq!(ray.origin, Point3::origin());
    }

    #[test]
    fn test_corners() {
        let camera = PinholeCamera::new(Point3::origin(), 90.0, 2.0);
        // top left, tan(45 deg) = 1
        let ray = camera.get_ray(0.0, 0.0);
        let expected = Vec3::new(-2.0, 1.0, -1.0).normalize();
        assert!((ray.direction - expected).norm() < 1e-5, "{:?}", ray.direction);
        let ray = camera.get_ray(1.0, 1.0);
        let expected = Vec3::new(2.0, -1.0, -1.0).normalize();
        assert!((ray.direction - expected).norm() < 1e-5, "{:?}", ray.direction);
    }
}
