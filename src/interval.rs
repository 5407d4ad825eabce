use crate::common::INFINITY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Open-interval membership. Endpoints are excluded.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Ray parameters strictly in front of the origin, `(0, +inf)`.
    pub const POSITIVE: Self = Self {
        min: 0.0,
        max: INFINITY,
    };
}
