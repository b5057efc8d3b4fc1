use crate::math::*;

use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    // distance along the (unit length) ray
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub color: RGBAColor,
}

impl HitRecord {
    pub fn new(time: f32, point: Point3, normal: Vec3, color: RGBAColor) -> Self {
        HitRecord {
            time,
            point,
            normal: normal.normalize(),
            color,
        }
    }
}

/// keeps `current` unless `candidate` is strictly nearer. ties go to the earlier record.
pub fn closer(current: Option<HitRecord>, candidate: Option<HitRecord>) -> Option<HitRecord> {
    match (current, candidate) {
        (None, candidate) => candidate,
        (Some(current), Some(candidate)) if candidate.time < current.time => Some(candidate),
        (current, _) => current,
    }
}

/// how a scene scan folds per-primitive results.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// the nearest hit in front of the ray origin, or `None`.
    #[default]
    Nearest,
    /// reproduces the shader this renderer was modeled on: every primitive that
    /// produces a candidate first clears the running hit flag, so a candidate that
    /// loses the distance comparison discards an earlier accepted hit.
    /// sphere candidates are taken from the smaller root even when it lies behind
    /// the ray origin, measured as an absolute distance.
    LegacyFlagClearing,
}

pub trait Hittable {
    /// nearest intersection with `t0 <= time < t1`.
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;

    /// the unfiltered candidate used by `ScanMode::LegacyFlagClearing`.
    fn legacy_candidate(&self, r: Ray) -> Option<HitRecord>;
}
