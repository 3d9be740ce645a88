//! Random fixture values for tests.
//!
//! [`Generator`] draws strings, integers, floats, booleans, geographic
//! coordinates and whole mappings. Integer and float ranges are inclusive,
//! and reversed bounds are swapped rather than rejected.
//!
//! The free functions below use a fresh thread-RNG generator with the
//! default [`GeneratorConfig`]; use [`Generator::seeded`] for reproducible
//! fixtures.

pub mod config;
pub mod error;
pub mod generator;

pub use config::GeneratorConfig;
pub use error::{GenError, GenResult};
pub use generator::{Generator, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};

/// Random lowercase-hex string, optionally prefixed. See [`Generator::random_string`].
pub fn random_string(prefix: Option<&str>, length: usize) -> GenResult<String> {
    Generator::new().random_string(prefix, length)
}

/// Random string or `None`. See [`Generator::random_string_or_none`].
pub fn random_string_or_none(
    prefix: Option<&str>,
    length: usize,
    probability: f64,
) -> GenResult<Option<String>> {
    Generator::new().random_string_or_none(prefix, length, probability)
}

/// Random integer in `[min, max]`.
pub fn random_int(min: i64, max: i64) -> i64 {
    Generator::new().random_int(min, max)
}

/// Random float in `[min, max]`, rounded to `digits` decimals when non-zero.
pub fn random_float(min: f64, max: f64, digits: u32) -> GenResult<f64> {
    Generator::new().random_float(min, max, digits)
}

/// `true` with the given probability.
pub fn random_bool(probability: f64) -> GenResult<bool> {
    Generator::new().random_bool(probability)
}
