use std::io::{self, Write};

use crate::common::*;

pub const USAGE: &str = "Usage: ray_ellipsoid_intersection d_l_x d_l_y d_l_z c_l_x c_l_y c_l_z";

const ARG_NAMES: [&str; 6] = ["d_l_x", "d_l_y", "d_l_z", "c_l_x", "c_l_y", "c_l_z"];

/// One intersection request: ray direction and the offset of its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub direction: Vec3,
    pub offset: Point3,
}

impl Query {
    pub fn ray(&self) -> Ray {
        Ray::new(self.offset, self.direction)
    }
}

/// Parses the positional arguments (program name already stripped).
pub fn parse_args<I, S>(args: I) -> Result<Query, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != ARG_NAMES.len() {
        return Err(InputError::WrongArgCount { got: args.len() });
    }

    let mut values = [0.0; 6];
    for ((slot, arg), name) in values.iter_mut().zip(&args).zip(ARG_NAMES) {
        let raw: &str = arg.as_ref();
        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|source| InputError::InvalidNumber {
                name,
                value: raw.to_string(),
                source,
            })?;
    }

    Ok(Query {
        direction: Vec3::new(values[0], values[1], values[2]),
        offset: Point3::new(values[3], values[4], values[5]),
    })
}

/// Writes x, y and z on separate lines, shortest round-trip form.
pub fn write_point<W: Write>(out: &mut W, p: Point3) -> io::Result<()> {
    writeln!(out, "{:?}", p.x)?;
    writeln!(out, "{:?}", p.y)?;
    writeln!(out, "{:?}", p.z)?;
    Ok(())
}
