//! Random RUT generation.
//!
//! Correlatives are drawn uniformly from [`MIN_CORRELATIVE`]..[`MAX_CORRELATIVE`]
//! (six to eight digits) and paired with their computed check digit, so every
//! generated RUT rendered with dots and hyphen passes `validate`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use rand::Rng;

use crate::config::{
    GenerateManyOptions, GenerateOptions, COUNT_WHEN_UNSET, MAX_CORRELATIVE, MIN_CORRELATIVE,
};
use crate::formatting::render;
use crate::validators::check_digit;

/// Generates one random, valid RUT using the thread-local RNG.
///
/// ```
/// use rut_core::{generate, validate, GenerateOptions};
/// let rut = generate(&GenerateOptions::default());
/// assert!(validate(&rut));
/// ```
pub fn generate(options: &GenerateOptions) -> String {
    generate_with_rng(&mut rand::rng(), options)
}

/// Generates one random, valid RUT from the supplied RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, options: &GenerateOptions) -> String {
    let correlative: u32 = rng.random_range(MIN_CORRELATIVE..MAX_CORRELATIVE);
    let digits = correlative.to_string();
    let check = check_digit(&digits);
    render(&digits, check, options.dots(), options.hyphen())
}

/// Generates several random RUTs using the thread-local RNG.
///
/// * `None` produces [`DEFAULT_COUNT`](crate::config::DEFAULT_COUNT) RUTs with
///   dots and hyphen.
/// * `Some` options with no field set produce an empty vector.
/// * Otherwise `count` RUTs are produced; an unset `count` produces one.
pub fn generate_many(options: Option<&GenerateManyOptions>) -> Vec<String> {
    generate_many_with_rng(&mut rand::rng(), options)
}

/// Like [`generate_many`], drawing from the supplied RNG.
pub fn generate_many_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    options: Option<&GenerateManyOptions>,
) -> Vec<String> {
    let options = match options {
        None => GenerateManyOptions::defaults(),
        Some(opts) if opts.is_empty() => {
            debug!("generate_many called with empty options; returning no RUTs");
            return Vec::new();
        }
        Some(opts) => *opts,
    };

    let count = options.count.unwrap_or(COUNT_WHEN_UNSET);
    let single = options.generate_options();
    debug!("Generating {} RUTs (dots: {}, hyphen: {})", count, single.dots(), single.hyphen());

    (0..count).map(|_| generate_with_rng(&mut *rng, &single)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COUNT;
    use crate::sanitizers::fully_sanitise;
    use crate::validators::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_default_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rut = generate_with_rng(&mut rng, &GenerateOptions::default());
            assert!((9..=12).contains(&rut.len()), "unexpected length: {}", rut);
            assert!(validate(&rut), "generated invalid RUT: {}", rut);
        }
    }

    #[test]
    fn test_generate_without_dots_or_hyphen() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let rut = generate_with_rng(&mut rng, &GenerateOptions::new(false, false));
            assert!((7..=9).contains(&rut.len()), "unexpected length: {}", rut);
            assert!(!rut.contains('.') && !rut.contains('-'));
        }
    }

    #[test]
    fn test_generate_correlative_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let rut = generate_with_rng(&mut rng, &GenerateOptions::new(true, true));
            let (correlative, _) = rut.rsplit_once('-').expect("hyphen present");
            let value: u32 = fully_sanitise(correlative).parse().expect("numeric correlative");
            assert!((MIN_CORRELATIVE..MAX_CORRELATIVE).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = generate_many_with_rng(&mut StdRng::seed_from_u64(42), None);
        let b = generate_many_with_rng(&mut StdRng::seed_from_u64(42), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_many_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_many_with_rng(&mut rng, None).len(), DEFAULT_COUNT);
        for count in [0, 50, 103, 232] {
            let options = GenerateManyOptions::with_count(count);
            assert_eq!(generate_many_with_rng(&mut rng, Some(&options)).len(), count);
        }
    }

    #[test]
    fn test_generate_many_empty_options_yield_nothing() {
        let options = GenerateManyOptions::default();
        assert!(generate_many(Some(&options)).is_empty());
    }

    #[test]
    fn test_generate_many_without_count_yields_one() {
        let options = GenerateManyOptions { dots: Some(false), ..GenerateManyOptions::default() };
        let batch = generate_many(Some(&options));
        assert_eq!(batch.len(), 1);
        assert!(!batch[0].contains('.'));
        assert!(batch[0].contains('-'));
    }
}
