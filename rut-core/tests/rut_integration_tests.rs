// rut-core/tests/rut_integration_tests.rs
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_log::test; // Captures `log` output through env_logger

use rut_core::{
    check_digit, format, fully_sanitise, generate, generate_many, generate_many_with_rng, sanitise,
    validate, GenerateManyOptions, GenerateOptions, Rut,
};

const VALID_RUTS: [&str; 6] = [
    "10-8",
    "50.323-1",
    "262.554-7",
    "2.323.434-3",
    "15.638.169-1",
    "23.831.058-K",
];

const INVALID_RUTS: [&str; 6] = [
    "10-3",
    "100.220-3",
    "103.403.202-4",
    "random",
    "32",
    "11.553.392-3",
];

#[test]
fn test_validate_known_ruts() {
    for rut in VALID_RUTS {
        assert!(validate(rut), "{} should be valid", rut);
    }
    for rut in INVALID_RUTS {
        assert!(!validate(rut), "{} should be invalid", rut);
    }
}

#[test]
fn test_format_after_sanitise_stays_valid() {
    for rut in VALID_RUTS {
        let formatted = format(&sanitise(rut));
        assert_eq!(formatted, rut);
        assert!(validate(&formatted));
    }
}

#[test]
fn test_sanitise_examples() {
    let cases = [
        ("23.831.058-K", "23831058K", "23831058"),
        ("1.108.244-0", "11082440", "11082440"),
        ("238.620-8", "2386208", "2386208"),
        ("12.345.678-9", "123456789", "123456789"),
        ("soundk", "k", ""),
    ];
    for (input, partial, full) in cases {
        assert_eq!(sanitise(input), partial, "sanitise({})", input);
        assert_eq!(fully_sanitise(input), full, "fully_sanitise({})", input);
    }
}

#[test]
fn test_fully_sanitise_is_idempotent() {
    for input in VALID_RUTS.iter().chain(INVALID_RUTS.iter()) {
        let once = fully_sanitise(input);
        assert_eq!(fully_sanitise(&once), once);
        assert_eq!(fully_sanitise(&sanitise(input)), once);
    }
}

#[test]
fn test_check_digit_is_separator_insensitive() {
    for rut in VALID_RUTS {
        let (correlative, supplied) = rut.rsplit_once('-').expect("hyphenated fixture");
        let expected = check_digit(correlative);
        assert_eq!(expected, check_digit(&fully_sanitise(correlative)));
        assert!(expected.eq_ignore_ascii_case(&supplied.chars().next().expect("check char")));
    }
}

#[test]
fn test_generated_ruts_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    let options = GenerateManyOptions::with_count(100);
    for rut in generate_many_with_rng(&mut rng, Some(&options)) {
        assert!(validate(&rut), "{} should be valid", rut);
        assert_eq!(format(&sanitise(&rut)), rut);
        let parsed: Rut = rut.parse().expect("generated RUT parses");
        assert_eq!(parsed.to_string(), rut);
    }
}

#[test]
fn test_generate_thread_rng_lengths() {
    for _ in 0..50 {
        let rut = generate(&GenerateOptions::new(true, true));
        assert!((9..=12).contains(&rut.len()));
        assert!(validate(&rut));

        let rut = generate(&GenerateOptions::new(true, false));
        assert!((8..=11).contains(&rut.len()));
    }
}

#[test]
fn test_generate_many_option_paths() -> Result<()> {
    assert_eq!(generate_many(None).len(), 30);
    assert_eq!(generate_many(Some(&GenerateManyOptions::with_count(50))).len(), 50);
    assert_eq!(generate_many(Some(&GenerateManyOptions::with_count(0))).len(), 0);

    let empty = GenerateManyOptions::from_json_str("{}")?;
    assert!(generate_many(Some(&empty)).is_empty());

    let unknown = GenerateManyOptions::from_yaml_str("amount: 10\n")?;
    assert!(generate_many(Some(&unknown)).is_empty());

    let no_count = GenerateManyOptions::from_json_str(r#"{"hyphen": false}"#)?;
    assert_eq!(generate_many(Some(&no_count)).len(), 1);
    Ok(())
}

#[test]
fn test_generate_many_plain_rendering() -> Result<()> {
    let options = GenerateManyOptions::from_json_str(r#"{"count": 20, "dots": false, "hyphen": false}"#)?;
    let batch = generate_many(Some(&options));
    assert_eq!(batch.len(), 20);
    for rut in batch {
        assert!(rut.chars().take(rut.len() - 1).all(|c| c.is_ascii_digit()));
        // re-rendering the compact form gives a valid RUT
        assert!(validate(&format(&rut)));
    }
    Ok(())
}
