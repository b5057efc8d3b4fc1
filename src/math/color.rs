use nalgebra::Vector4;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

/// linear RGBA. channels are not clamped until the film is written out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBAColor(pub Vector4<f32>);

impl RGBAColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> RGBAColor {
        RGBAColor(Vector4::new(r, g, b, a))
    }
    // opaque color from an rgb triple, the way scene colors are promoted before shading
    pub const fn opaque(rgb: [f32; 3]) -> RGBAColor {
        RGBAColor::new(rgb[0], rgb[1], rgb[2], 1.0)
    }
    pub const ZERO: RGBAColor = RGBAColor::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: RGBAColor = RGBAColor::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: RGBAColor = RGBAColor::new(1.0, 1.0, 1.0, 1.0);

    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.0.z
    }
    #[inline(always)]
    pub fn a(&self) -> f32 {
        self.0.w
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl Default for RGBAColor {
    fn default() -> Self {
        RGBAColor::BLACK
    }
}

impl From<[f32; 4]> for RGBAColor {
    fn from(data: [f32; 4]) -> Self {
        RGBAColor::new(data[0], data[1], data[2], data[3])
    }
}

impl Add for RGBAColor {
    type Output = RGBAColor;
    fn add(self, other: RGBAColor) -> RGBAColor {
        RGBAColor(self.0 + other.0)
    }
}

impl AddAssign for RGBAColor {
    fn add_assign(&mut self, other: RGBAColor) {
        self.0 += other.0;
    }
}

// componentwise
impl Mul for RGBAColor {
    type Output = RGBAColor;
    fn mul(self, other: RGBAColor) -> RGBAColor {
        RGBAColor(self.0.component_mul(&other.0))
    }
}

impl MulAssign for RGBAColor {
    fn mul_assign(&mut self, other: RGBAColor) {
        self.0.component_mul_assign(&other.0);
    }
}

impl Mul<f32> for RGBAColor {
    type Output = RGBAColor;
    fn mul(self, other: f32) -> RGBAColor {
        RGBAColor(self.0 * other)
    }
}

impl Mul<RGBAColor> for f32 {
    type Output = RGBAColor;
    fn mul(self, other: RGBAColor) -> RGBAColor {
        RGBAColor(other.0 * self)
    }
}

impl Div<f32> for RGBAColor {
    type Output = RGBAColor;
    fn div(self, other: f32) -> RGBAColor {
        RGBAColor(self.0 / other)
    }
}
