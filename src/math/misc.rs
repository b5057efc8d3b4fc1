use crate::math::{Point3, Vec3};

/// mirrors `direction` about `normal`. `normal` is expected to be unit length.
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(&normal) * normal
}

// floored modulo, so negative coordinates still land in [0, m)
pub fn floored_mod(x: f32, m: f32) -> f32 {
    x - m * (x / m).floor()
}

pub fn point_from_array(data: [f32; 3]) -> Point3 {
    Point3::new(data[0], data[1], data[2])
}

pub fn vec_from_array(data: [f32; 3]) -> Vec3 {
    Vec3::new(data[0], data[1], data[2])
}
