use crate::math::*;
use crate::world::PointLight;

use serde::Deserialize;

/// constants of the phong-style lighting model. immutable for a render.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShadingParameters {
    pub ambient_color: [f32; 4],
    pub ambient_coefficient: f32,
    pub diffuse_coefficient: f32,
    pub specular_color: [f32; 4],
    pub specular_coefficient: f32,
    pub shininess: f32,
    // numerator of the inverse square falloff, k / (4 pi d^2)
    pub light_intensity: f32,
}

impl Default for ShadingParameters {
    fn default() -> Self {
        ShadingParameters {
            ambient_color: [0.0, 0.0, 0.0, 1.0],
            ambient_coefficient: 1.0,
            diffuse_coefficient: 1.0,
            specular_color: [1.0, 1.0, 1.0, 1.0],
            specular_coefficient: 0.2,
            shininess: 15.0,
            light_intensity: 1000.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhongShading {
    pub parameters: ShadingParameters,
}

impl PhongShading {
    pub fn new(parameters: ShadingParameters) -> Self {
        PhongShading { parameters }
    }

    pub fn attenuation(&self, point: Point3, light: &PointLight) -> f32 {
        let distance_squared = (light.position - point).norm_squared();
        self.parameters.light_intensity / (4.0 * PI * distance_squared)
    }

    /// lit color at `point`. the viewer is assumed to sit at the origin.
    /// `diffuse_source` scales the diffuse lobe; pass `RGBAColor::ZERO` to drop it.
    pub fn shade(
        &self,
        point: Point3,
        normal: Vec3,
        diffuse_source: RGBAColor,
        light: &PointLight,
    ) -> RGBAColor {
        let p = &self.parameters;
        let l = (light.position - point).normalize();
        let n = normal.normalize();
        let v = (Point3::origin() - point).normalize();
        let r = reflect(-l, n);

        let diffuse = p.diffuse_coefficient * l.dot(&n).max(0.0);
        let specular = p.specular_coefficient * v.dot(&r).max(0.0).powf(p.shininess);
        let attenuation = self.attenuation(point, light);

        (diffuse * diffuse_source + specular * RGBAColor::from(p.specular_color)) * attenuation
            + RGBAColor::from(p.ambient_color) * p.ambient_coefficient
    }
}
