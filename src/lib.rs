#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod renderer;
pub mod shading;
pub mod tonemap;
pub mod world;
