//! Oblate ellipsoid of revolution and the ray/ellipsoid root solver.
//!
//! The surface is `x² + y² + z²·f = R²` with `f = 1/(1 - E²)`, i.e. the
//! polar (z) axis is shortened to `R·sqrt(1 - E²)`. Substituting the ray
//! `offset + d·direction` gives a quadratic in `d`.

use log::{debug, trace};

use crate::common::*;

/// Two-parameter planet model. Always valid once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidModel {
    /// First eccentricity (dimensionless, `0 <= E < 1`)
    pub eccentricity: f64,
    /// Equatorial radius (km, `> 0`)
    pub equatorial_radius: f64,
}

impl EllipsoidModel {
    /// Earth, in kilometres.
    pub const EARTH: Self = Self {
        eccentricity: EARTH_ECCENTRICITY,
        equatorial_radius: EARTH_EQUATORIAL_RADIUS_KM,
    };

    pub fn new(eccentricity: f64, equatorial_radius: f64) -> Result<Self, DomainError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(DomainError::InvalidModel(format!(
                "eccentricity must satisfy 0 <= E < 1, got {eccentricity}"
            )));
        }
        if !(equatorial_radius > 0.0 && equatorial_radius.is_finite()) {
            return Err(DomainError::InvalidModel(format!(
                "equatorial radius must be positive, got {equatorial_radius}"
            )));
        }
        Ok(Self {
            eccentricity,
            equatorial_radius,
        })
    }

    /// `f = 1/(1 - E²)`, the weight applied to the z terms.
    pub fn axis_scale(&self) -> f64 {
        1.0 / (1.0 - self.eccentricity * self.eccentricity)
    }

    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// `(x² + y² + z²·f)/R² - 1`: zero on the surface, negative inside.
    pub fn surface_residual(&self, p: Point3) -> f64 {
        let r2 = self.equatorial_radius * self.equatorial_radius;
        (p.x * p.x + p.y * p.y + p.z * p.z * self.axis_scale()) / r2 - 1.0
    }

    pub fn quadratic(&self, direction: Vec3, offset: Point3) -> Quadratic {
        let w = Vec3::new(1.0, 1.0, self.axis_scale());
        let r = self.equatorial_radius;
        Quadratic {
            a: direction.dot(direction * w),
            b: 2.0 * direction.dot(offset * w),
            c: offset.dot(offset * w) - r * r,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Result<Intersection, IntersectError> {
        let d = solve(ray.dir, ray.orig, self)?;
        Ok(Intersection { d, point: ray.at(d) })
    }
}

impl Default for EllipsoidModel {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Coefficients of `a·d² + b·d + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Both real roots `((-b + √disc)/2a, (-b - √disc)/2a)`.
    pub fn roots(&self) -> Result<(f64, f64), DomainError> {
        if self.a == 0.0 {
            return Err(DomainError::DegenerateDirection);
        }
        let discriminant = self.discriminant();
        if !(self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && discriminant.is_finite())
        {
            return Err(DomainError::NonFinite {
                a: self.a,
                b: self.b,
                c: self.c,
            });
        }
        if discriminant < 0.0 {
            return Err(DomainError::NegativeDiscriminant(discriminant));
        }
        let sqrtd = discriminant.sqrt();
        Ok((
            (-self.b + sqrtd) / (2.0 * self.a),
            (-self.b - sqrtd) / (2.0 * self.a),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub d: f64,
    pub point: Point3,
}

/// Ray parameter of the nearest intersection strictly in front of `offset`.
///
/// A root of exactly `0.0` does not count as in front. An origin lying on the
/// surface reports the far-side exit when pointing inwards and
/// `NoIntersection` when pointing outwards.
pub fn solve(
    direction: Vec3,
    offset: Point3,
    model: &EllipsoidModel,
) -> Result<f64, IntersectError> {
    let q = model.quadratic(direction, offset);
    debug!(
        "quadratic a={} b={} c={} discriminant={}",
        q.a,
        q.b,
        q.c,
        q.discriminant()
    );

    let (d1, d2) = q.roots().inspect_err(|e| debug!("root solve failed: {e}"))?;
    trace!("roots d1={d1} d2={d2}");

    let ahead = Interval::POSITIVE;
    let d = match (ahead.surrounds(d1), ahead.surrounds(d2)) {
        (true, true) => d1.min(d2),
        (true, false) => d1,
        (false, true) => d2,
        (false, false) => {
            debug!("both roots behind origin: d1={d1} d2={d2}");
            return Err(IntersectError::NoIntersection { d1, d2 });
        }
    };
    debug!("selected d={d}");
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const R: f64 = EARTH_EQUATORIAL_RADIUS_KM;

    #[test]
    fn earth_axes() {
        let earth = EllipsoidModel::EARTH;
        assert_relative_eq!(earth.polar_radius(), 6356.751600562688, epsilon = 1e-9);
        assert_relative_eq!(earth.axis_scale(), 1.006739501819552, epsilon = 1e-12);
        assert_eq!(EllipsoidModel::default(), earth);
    }

    #[test]
    fn model_validation() {
        assert!(EllipsoidModel::new(0.0, 1.0).is_ok());
        assert!(matches!(
            EllipsoidModel::new(1.0, 1.0),
            Err(DomainError::InvalidModel(_))
        ));
        assert!(EllipsoidModel::new(-0.1, 1.0).is_err());
        assert!(EllipsoidModel::new(0.5, 0.0).is_err());
        assert!(EllipsoidModel::new(0.5, f64::NAN).is_err());
    }

    #[test]
    fn polar_ray_hits_pole() {
        let earth = EllipsoidModel::EARTH;
        let dir = Vec3::new(0.0, 0.0, -1.0);
        let off = Point3::new(0.0, 0.0, 10_000.0);
        let d = solve(dir, off, &earth).unwrap();
        assert_abs_diff_eq!(d, 10_000.0 - earth.polar_radius(), epsilon = 1e-6);
    }

    #[test]
    fn equatorial_ray_hits_equator() {
        let d = solve(
            Vec3::new(-1.0, 0.0, 0.0),
            Point3::new(10_000.0, 0.0, 0.0),
            &EllipsoidModel::EARTH,
        )
        .unwrap();
        assert_abs_diff_eq!(d, 10_000.0 - R, epsilon = 1e-6);
    }

    #[test]
    fn returns_smaller_of_two_positive_roots() {
        let earth = EllipsoidModel::EARTH;
        let dir = Vec3::new(-1.0, 0.0, 0.0);
        let off = Point3::new(10_000.0, 0.0, 0.0);
        let (d1, d2) = earth.quadratic(dir, off).roots().unwrap();
        assert!(d1 > 0.0 && d2 > 0.0);
        let d = solve(dir, off, &earth).unwrap();
        assert_eq!(d, d1.min(d2));
        assert!(d < d1.max(d2));
    }

    #[test]
    fn origin_inside_takes_the_single_positive_root() {
        let earth = EllipsoidModel::EARTH;
        let d = solve(Vec3::new(0.0, 1.0, 0.0), Point3::zero(), &earth).unwrap();
        assert_abs_diff_eq!(d, R, epsilon = 1e-9);
    }

    #[test]
    fn pointing_away_is_behind_origin() {
        let err = solve(
            Vec3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 10_000.0),
            &EllipsoidModel::EARTH,
        )
        .unwrap_err();
        match err {
            IntersectError::NoIntersection { d1, d2 } => assert!(d1 < 0.0 && d2 < 0.0),
            other => panic!("expected NoIntersection, got {other:?}"),
        }
    }

    #[test]
    fn miss_is_domain_error() {
        let err = solve(
            Vec3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 10_000.0),
            &EllipsoidModel::EARTH,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IntersectError::Domain(DomainError::NegativeDiscriminant(disc)) if disc < 0.0
        ));
    }

    #[test]
    fn zero_direction_is_degenerate() {
        let err = solve(Vec3::zero(), Point3::new(1.0, 2.0, 3.0), &EllipsoidModel::EARTH)
            .unwrap_err();
        assert_eq!(err, IntersectError::Domain(DomainError::DegenerateDirection));
    }

    #[test]
    fn overflowing_coefficients_are_not_reported_as_behind() {
        // Aimed straight at the planet; b² overflows to inf and inf - inf is NaN.
        let err = solve(
            Vec3::new(-1e200, 0.0, 0.0),
            Point3::new(10_000.0, 0.0, 0.0),
            &EllipsoidModel::EARTH,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IntersectError::Domain(DomainError::NonFinite { .. })
        ));
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn nan_input_is_non_finite() {
        let err = solve(
            Vec3::new(f64::NAN, 0.0, -1.0),
            Point3::new(0.0, 0.0, 10_000.0),
            &EllipsoidModel::EARTH,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IntersectError::Domain(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn zero_root_is_not_selected() {
        // R = 2 keeps the on-surface roots exact.
        let model = EllipsoidModel::new(0.0, 2.0).unwrap();
        let on_surface = Point3::new(2.0, 0.0, 0.0);

        let inward = solve(Vec3::new(-1.0, 0.0, 0.0), on_surface, &model).unwrap();
        assert_eq!(inward, 4.0);

        let outward = solve(Vec3::new(1.0, 0.0, 0.0), on_surface, &model).unwrap_err();
        assert_eq!(outward, IntersectError::NoIntersection { d1: 0.0, d2: -4.0 });
    }

    #[test]
    fn intersect_point_lies_on_surface() {
        let earth = EllipsoidModel::EARTH;
        let ray = Ray::new(
            Point3::new(-9_000.0, -8_000.0, -7_000.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        let hit = earth.intersect(&ray).unwrap();
        assert_relative_eq!(hit.point.x, -4588.660852722867, epsilon = 1e-6);
        assert_relative_eq!(hit.point.y, -3588.6608527228673, epsilon = 1e-6);
        assert_relative_eq!(hit.point.z, -2588.6608527228673, epsilon = 1e-6);
        assert_abs_diff_eq!(earth.surface_residual(hit.point), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn direction_length_only_rescales_d() {
        let earth = EllipsoidModel::EARTH;
        let off = Point3::new(0.0, 0.0, 10_000.0);
        let unit = solve(Vec3::new(0.0, 0.0, -1.0), off, &earth).unwrap();
        let long = solve(Vec3::new(0.0, 0.0, -4.0), off, &earth).unwrap();
        assert_relative_eq!(unit, 4.0 * long, epsilon = 1e-9);
    }
}
