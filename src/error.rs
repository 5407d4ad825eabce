use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Intersect(#[from] IntersectError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status: 2 for misuse, 1 for a query with no valid answer.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Input(_) => 2,
            Error::Intersect(_) | Error::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("expected 6 arguments, got {got}")]
    WrongArgCount { got: usize },

    #[error("invalid number for {name}: {value:?} ({source})")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("ray does not intersect ellipsoid (discriminant = {0})")]
    NegativeDiscriminant(f64),

    #[error("degenerate ray direction: quadratic leading coefficient is zero")]
    DegenerateDirection,

    #[error("quadratic coefficients are not finite (a = {a}, b = {b}, c = {c})")]
    NonFinite { a: f64, b: f64, c: f64 },

    #[error("invalid ellipsoid model: {0}")]
    InvalidModel(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntersectError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("No intersection: both intersections are behind the ray origin (d1 = {d1}, d2 = {d2})")]
    NoIntersection { d1: f64, d2: f64 },
}
