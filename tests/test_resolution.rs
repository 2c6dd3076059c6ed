//! End-to-end resolution tests against the real metadata engine.

use phone_resolver::{
    CountryCode, FormatError, PhoneCandidate, PhoneFormatter, ResolveError, Resolver,
};

fn be() -> CountryCode {
    CountryCode::new("BE").unwrap()
}

fn us() -> CountryCode {
    CountryCode::new("US").unwrap()
}

#[test]
fn international_input_resolves_without_hints() {
    let resolver = Resolver::default();
    let candidate = PhoneCandidate::new("+32470123456");

    let number = resolver.resolve(&candidate).unwrap();
    assert_eq!(resolver.engine().region_for(&number), Some(be()));
}

#[test]
fn empty_hint_resolution_equals_plain_auto_detection() {
    let resolver = Resolver::default();
    let candidate = PhoneCandidate::new("+32470123456");

    let resolved = resolver.resolve(&candidate).unwrap();
    let detected = resolver.engine().parse("+32470123456", None).unwrap();
    assert_eq!(resolved, detected);
}

#[test]
fn ordered_hints_fall_back_past_invalid_regions() {
    let resolver = Resolver::default();
    let candidate = PhoneCandidate::new("0470123456").with_countries([us(), be()]);

    let number = resolver.resolve(&candidate).unwrap();
    assert_eq!(resolver.engine().region_for(&number), Some(be()));
}

#[test]
fn ambiguous_input_without_hints_fails() {
    let resolver = Resolver::default();
    let candidate = PhoneCandidate::new("0470123456");

    assert_eq!(
        resolver.resolve(&candidate).unwrap_err(),
        ResolveError::CountryMismatch {
            raw: "0470123456".to_string()
        }
    );
}

#[test]
fn narrowing_re_resolves_the_same_base_number() {
    let resolver = Resolver::default();
    let base = PhoneCandidate::new("0470123456");

    assert!(resolver.resolve(&base).is_err());
    assert!(resolver.resolve(&base.with_country(us())).is_err());
    assert!(resolver.resolve(&base.with_country(be())).is_ok());
    // The base candidate is still hint-free and still fails.
    assert!(resolver.resolve(&base).is_err());
}

#[test]
fn spec_examples_end_to_end() {
    let formatter = PhoneFormatter::default();

    assert_eq!(
        formatter
            .format_national(&PhoneCandidate::new("+32470123456"))
            .unwrap(),
        "0470 12 34 56"
    );

    assert_eq!(
        formatter
            .format_e164(&PhoneCandidate::new("0470123456").with_country(be()))
            .unwrap(),
        "+32470123456"
    );

    assert!(matches!(
        formatter
            .format_national(&PhoneCandidate::new("0470123456"))
            .unwrap_err(),
        FormatError::MissingCountry { .. }
    ));
}
