pub use rayon::prelude::*;

pub use crate::camera::PinholeCamera;
pub use crate::geometry::{Aggregate, Plane, Sphere};
pub use crate::hittable::{closer, HitRecord, Hittable, ScanMode};
pub use crate::integrator::{is_occluded, Integrator, ShadowPolicy, WhittedIntegrator};
pub use crate::renderer::{Film, NaiveRenderer};
pub use crate::shading::{PhongShading, ShadingParameters};
pub use crate::tonemap::Tonemapper;
pub use crate::world::{PointLight, World, NORMAL_OFFSET, SHADOW_OFFSET};

pub use crate::math::*;
