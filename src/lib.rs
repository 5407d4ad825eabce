//! Nearest forward intersection of a ray with Earth's reference ellipsoid.

pub mod cli;
pub mod common;
pub mod ellipsoid;
pub mod error;
pub mod interval;
pub mod ray;
pub mod vec3;
