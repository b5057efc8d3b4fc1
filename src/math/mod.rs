mod color;
mod misc;
mod ray;

pub use color::RGBAColor;
pub use misc::*;
pub use ray::Ray;

pub use std::f32::consts::PI;
pub use std::f32::INFINITY;

pub type Vec3 = nalgebra::Vector3<f32>;
pub type Point3 = nalgebra::Point3<f32>;
