use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    // always unit length when built through `Ray::new`
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::origin(), -Vec3::z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_direction() {
        let ray = Ray::new(Point3::origin(), Vec3::new(3.0, 0.0, 4.0));
        assert!((ray.direction.norm() - 1.0).abs() < 1e-6);
        assert!((ray.direction.x - 0.6).abs() < 1e-6);
        let p = ray.point_at_parameter(5.0);
        assert!((p - Point3::new(3.0, 0.0, 4.0)).norm() < 1e-5);
    }
}
