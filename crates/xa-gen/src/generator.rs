use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::debug;
use xa_types::Mapping;

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};

pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Draws random fixture values from an RNG.
///
/// Probabilities are drawn with three-digit precision: a draw is one of
/// `0.000, 0.001, ..., 0.999`, and an outcome with probability `p` happens
/// when the draw is below `p`.
pub struct Generator<R = ThreadRng> {
    rng: R,
    config: GeneratorConfig,
}

impl Generator<ThreadRng> {
    /// Generator over the thread-local RNG with default config.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::from_rng(rand::thread_rng(), config)
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<StdRng> {
    /// Deterministic generator: the same seed yields the same values.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), GeneratorConfig::default())
    }
}

impl<R: Rng> Generator<R> {
    pub fn from_rng(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random lowercase-hex string of exactly `length` characters.
    ///
    /// With a prefix the result starts with `prefix` and the separator, and
    /// `length` must leave room for at least `prefix_margin` more characters
    /// beyond the prefix. The separator counts toward `length`, and at least
    /// one random character always follows it.
    pub fn random_string(&mut self, prefix: Option<&str>, length: usize) -> GenResult<String> {
        self.check_string_args(prefix, length)?;

        let mut out = String::new();
        if let Some(prefix) = prefix {
            out.push_str(prefix);
            out.push_str(&self.config.separator);
        }
        let mut bytes = vec![0u8; length.div_ceil(2)];
        self.rng.fill(&mut bytes[..]);
        out.push_str(&hex::encode(bytes));

        Ok(out.chars().take(length).collect())
    }

    /// [`Self::random_string`] with the configured default length.
    pub fn random_string_default(&mut self, prefix: Option<&str>) -> GenResult<String> {
        let length = self.config.default_length;
        self.random_string(prefix, length)
    }

    /// A random string with the given probability, otherwise `None`.
    ///
    /// Arguments are validated even when the draw yields `None`.
    pub fn random_string_or_none(
        &mut self,
        prefix: Option<&str>,
        length: usize,
        probability: f64,
    ) -> GenResult<Option<String>> {
        check_probability(probability)?;
        self.check_string_args(prefix, length)?;

        if self.draw() < probability {
            self.random_string(prefix, length).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Random integer in `[min, max]`; reversed bounds are swapped.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// Random float in `[min, max]`; reversed bounds are swapped. A non-zero
    /// `digits` rounds the result to that many decimals, staying in range.
    /// Bounds whose distance does not fit in an `f64` are rejected.
    pub fn random_float(&mut self, min: f64, max: f64, digits: u32) -> GenResult<f64> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GenError::NonFinite { min, max });
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return Ok(lo);
        }
        // The uniform sampler scales the width by 1 / (1 - EPSILON).
        if !((hi - lo) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(GenError::RangeOverflow { min: lo, max: hi });
        }

        let mut value = self.rng.gen_range(lo..=hi);
        // Round only within f64 decimal precision; larger scales overflow to inf.
        if digits > 0 && digits <= f64::DIGITS {
            let scale = 10f64.powi(digits as i32);
            value = ((value * scale).round() / scale).clamp(lo, hi);
        }
        Ok(value)
    }

    /// `true` with the given probability.
    pub fn random_bool(&mut self, probability: f64) -> GenResult<bool> {
        check_probability(probability)?;
        Ok(self.draw() < probability)
    }

    /// [`Self::random_bool`] with the configured default probability.
    pub fn random_bool_default(&mut self) -> GenResult<bool> {
        let probability = self.config.default_probability;
        self.random_bool(probability)
    }

    /// Random latitude in `[min, max]`, both within [`LATITUDE_MIN`], [`LATITUDE_MAX`].
    pub fn random_latitude(&mut self, min: f64, max: f64) -> GenResult<f64> {
        self.random_coordinate("latitude", min, max, LATITUDE_MIN, LATITUDE_MAX)
    }

    /// Random longitude in `[min, max]`, both within [`LONGITUDE_MIN`], [`LONGITUDE_MAX`].
    pub fn random_longitude(&mut self, min: f64, max: f64) -> GenResult<f64> {
        self.random_coordinate("longitude", min, max, LONGITUDE_MIN, LONGITUDE_MAX)
    }

    /// A flat mapping of `key_<hex>` to `val_<hex>` strings with between
    /// `min_entries` and `max_entries` entries.
    pub fn random_mapping(&mut self, min_entries: usize, max_entries: usize) -> GenResult<Mapping> {
        let (lo, hi) = if min_entries <= max_entries {
            (min_entries, max_entries)
        } else {
            (max_entries, min_entries)
        };
        let count = self.rng.gen_range(lo..=hi);

        let mut mapping = Mapping::new();
        while mapping.len() < count {
            let key = self.random_string_default(Some("key"))?;
            let value = self.random_string_default(Some("val"))?;
            mapping.insert(key, Value::String(value));
        }
        debug!(entries = count, "random mapping generated");
        Ok(mapping)
    }

    fn random_coordinate(
        &mut self,
        what: &'static str,
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    ) -> GenResult<f64> {
        for value in [min, max] {
            if !(lower..=upper).contains(&value) {
                return Err(GenError::OutOfRange {
                    what,
                    value,
                    min: lower,
                    max: upper,
                });
            }
        }
        self.random_float(min, max, 0)
    }

    fn check_string_args(&self, prefix: Option<&str>, length: usize) -> GenResult<()> {
        if length < 1 {
            return Err(GenError::InvalidLength);
        }
        if let Some(prefix) = prefix {
            let prefix_len = prefix.chars().count();
            let separator_len = self.config.separator.chars().count();
            let margin = self.config.prefix_margin.max(separator_len + 1);
            if length < prefix_len + margin {
                return Err(GenError::PrefixTooLong {
                    length,
                    prefix_len,
                    margin,
                });
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> f64 {
        f64::from(self.rng.gen_range(0u32..1000)) / 1000.0
    }
}

fn check_probability(probability: f64) -> GenResult<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GenError::InvalidProbability(probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_has_exact_length_and_hex_body() {
        let mut g = Generator::seeded(1);
        for length in [1, 2, 7, 24, 64, 101] {
            let s = g.random_string(None, length).unwrap();
            assert_eq!(s.len(), length);
            assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn prefixed_string_starts_with_prefix_and_separator() {
        let mut g = Generator::seeded(2);
        let s = g.random_string(Some("user"), 24).unwrap();
        assert!(s.starts_with("user_"));
        assert_eq!(s.len(), 24);

        let mut dashed = Generator::from_rng(StdRng::seed_from_u64(2), GeneratorConfig::with_separator("-"));
        assert!(dashed.random_string(Some("id"), 10).unwrap().starts_with("id-"));
    }

    #[test]
    fn prefix_needs_room() {
        let mut g = Generator::seeded(3);
        assert_eq!(
            g.random_string(Some("abcdef"), 8),
            Err(GenError::PrefixTooLong { length: 8, prefix_len: 6, margin: 3 })
        );
        // Exactly prefix + margin is enough; the separator eats one of them.
        let s = g.random_string(Some("abcdef"), 9).unwrap();
        assert_eq!(s.len(), 9);
        assert!(s.starts_with("abcdef_"));
    }

    #[test]
    fn long_separator_still_leaves_random_chars() {
        let mut g = Generator::from_rng(StdRng::seed_from_u64(3), GeneratorConfig::with_separator("___"));
        assert_eq!(
            g.random_string(Some("abc"), 6),
            Err(GenError::PrefixTooLong { length: 6, prefix_len: 3, margin: 4 })
        );
        let s = g.random_string(Some("abc"), 7).unwrap();
        assert!(s.starts_with("abc___"));
        assert_eq!(s.len(), 7);
        assert!(s[6..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut g = Generator::seeded(4);
        assert_eq!(g.random_string(None, 0), Err(GenError::InvalidLength));
        assert_eq!(g.random_string_or_none(None, 0, 1.0), Err(GenError::InvalidLength));
        assert_eq!(g.random_string_or_none(None, 0, 0.0), Err(GenError::InvalidLength));
    }

    #[test]
    fn default_length_comes_from_config() {
        let mut g = Generator::seeded(5);
        assert_eq!(g.random_string_default(None).unwrap().len(), 24);
    }

    #[test]
    fn probability_extremes_are_deterministic() {
        let mut g = Generator::seeded(6);
        for _ in 0..200 {
            assert!(g.random_bool(1.0).unwrap());
            assert!(!g.random_bool(0.0).unwrap());
            assert!(g.random_string_or_none(None, 8, 1.0).unwrap().is_some());
            assert!(g.random_string_or_none(None, 8, 0.0).unwrap().is_none());
        }
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected() {
        let mut g = Generator::seeded(7);
        assert_eq!(g.random_bool(1.5), Err(GenError::InvalidProbability(1.5)));
        assert_eq!(g.random_bool(-0.1), Err(GenError::InvalidProbability(-0.1)));
        assert!(g.random_bool(f64::NAN).is_err());
        assert!(g.random_string_or_none(None, 8, 2.0).is_err());
    }

    #[test]
    fn half_probability_yields_both_outcomes() {
        let mut g = Generator::seeded(8);
        let trues = (0..1000).filter(|_| g.random_bool_default().unwrap()).count();
        assert!(trues > 350 && trues < 650, "got {trues} trues");
    }

    #[test]
    fn int_range_is_inclusive_and_swapped() {
        let mut g = Generator::seeded(9);
        for _ in 0..500 {
            let v = g.random_int(10, 1);
            assert!((1..=10).contains(&v));
        }
        assert_eq!(g.random_int(5, 5), 5);
        assert_eq!(g.random_int(i64::MIN, i64::MIN), i64::MIN);
    }

    #[test]
    fn float_range_handles_signs_and_swaps() {
        let mut g = Generator::seeded(10);
        for _ in 0..500 {
            let v = g.random_float(-100.0, -50.0, 0).unwrap();
            assert!((-100.0..=-50.0).contains(&v));
            let v = g.random_float(100.0, 10.0, 0).unwrap();
            assert!((10.0..=100.0).contains(&v));
        }
        assert_eq!(g.random_float(2.5, 2.5, 0).unwrap(), 2.5);
    }

    #[test]
    fn float_rounding_stays_in_range() {
        let mut g = Generator::seeded(11);
        for _ in 0..500 {
            let v = g.random_float(1.0001, 1.0009, 2).unwrap();
            assert!((1.0001..=1.0009).contains(&v));
            let v = g.random_float(0.0, 10.0, 1).unwrap();
            assert_eq!((v * 10.0).round() / 10.0, v);
        }
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let mut g = Generator::seeded(12);
        assert!(matches!(
            g.random_float(f64::NAN, 1.0, 0),
            Err(GenError::NonFinite { .. })
        ));
        assert!(g.random_float(0.0, f64::INFINITY, 0).is_err());
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let mut g = Generator::seeded(12);
        assert_eq!(
            g.random_float(f64::MAX, -f64::MAX, 0),
            Err(GenError::RangeOverflow { min: -f64::MAX, max: f64::MAX })
        );
        let v = g.random_float(-f64::MAX / 4.0, f64::MAX / 4.0, 0).unwrap();
        assert!(v.is_finite());
    }

    #[test]
    fn excess_digits_leave_value_unrounded() {
        let mut g = Generator::seeded(1);
        for digits in [16, 309, 400, u32::MAX] {
            let v = g.random_float(0.0, 10.0, digits).unwrap();
            assert!((0.0..=10.0).contains(&v), "digits {digits} gave {v}");
        }
        let v = g.random_float(0.0, 1.0, f64::DIGITS).unwrap();
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn coordinates_respect_bounds() {
        let mut g = Generator::seeded(13);
        for _ in 0..200 {
            let lat = g.random_latitude(45.0, -30.0).unwrap();
            assert!((-30.0..=45.0).contains(&lat));
            let lon = g.random_longitude(LONGITUDE_MIN, LONGITUDE_MAX).unwrap();
            assert!((LONGITUDE_MIN..=LONGITUDE_MAX).contains(&lon));
        }
        assert_eq!(
            g.random_latitude(-91.0, 0.0),
            Err(GenError::OutOfRange { what: "latitude", value: -91.0, min: -90.0, max: 90.0 })
        );
        assert!(g.random_longitude(0.0, 180.5).is_err());
    }

    #[test]
    fn mapping_has_requested_size_and_shape() {
        let mut g = Generator::seeded(14);
        let m = g.random_mapping(10, 5).unwrap();
        assert!((5..=10).contains(&m.len()));
        for (k, v) in &m {
            assert!(k.starts_with("key_"));
            assert!(v.as_str().is_some_and(|s| s.starts_with("val_")));
        }
        assert!(g.random_mapping(0, 0).unwrap().is_empty());
    }

    #[test]
    fn seeded_generators_repeat() {
        let a = Generator::seeded(42).random_string(Some("x"), 16).unwrap();
        let b = Generator::seeded(42).random_string(Some("x"), 16).unwrap();
        assert_eq!(a, b);
    }
}
