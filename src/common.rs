pub use crate::cli::{Query, USAGE, parse_args, write_point};
pub use crate::ellipsoid::{EllipsoidModel, Intersection, Quadratic, solve};
pub use crate::error::{DomainError, Error, InputError, IntersectError};
pub use crate::interval::Interval;
pub use crate::ray::{Ray, evaluate};
pub use crate::vec3::{Point3, Vec3};

pub const INFINITY: f64 = f64::INFINITY;

/// Earth's first eccentricity.
pub const EARTH_ECCENTRICITY: f64 = 0.081819221456;
/// Earth's equatorial radius in kilometres.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1363;
