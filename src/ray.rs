use crate::common::*;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            orig: origin,
            dir: direction,
        }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}

/// Point reached after travelling `d` along `direction` from `offset`.
/// Any `d` is accepted, including negative values.
#[inline]
pub fn evaluate(offset: Point3, direction: Vec3, d: f64) -> Point3 {
    Ray::new(offset, direction).at(d)
}
