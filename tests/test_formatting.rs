//! Format and type dispatch tests against the real metadata engine.

use phone_resolver::{
    CountryCode, CountryTokenError, FormatError, FormatSpec, NumberType, PhoneCandidate,
    PhoneFormatter,
};

fn belgian_mobile() -> PhoneCandidate {
    PhoneCandidate::new("0470123456").with_country(CountryCode::new("BE").unwrap())
}

#[test]
fn wrappers_match_the_engine_output_for_each_spec() {
    let formatter = PhoneFormatter::default();
    let candidate = belgian_mobile();

    let number = formatter.resolver().resolve(&candidate).unwrap();
    let engine = formatter.resolver().engine();

    assert_eq!(
        formatter.format_e164(&candidate).unwrap(),
        engine.format(&number, FormatSpec::E164)
    );
    assert_eq!(
        formatter.format_international(&candidate).unwrap(),
        engine.format(&number, FormatSpec::International)
    );
    assert_eq!(
        formatter.format_national(&candidate).unwrap(),
        engine.format(&number, FormatSpec::National)
    );
    assert_eq!(
        formatter.format_rfc3966(&candidate).unwrap(),
        engine.format(&number, FormatSpec::Rfc3966)
    );
}

#[test]
fn known_belgian_mobile_renders_in_every_representation() {
    let formatter = PhoneFormatter::default();
    let candidate = belgian_mobile();

    assert_eq!(formatter.format_e164(&candidate).unwrap(), "+32470123456");
    assert_eq!(
        formatter.format_national(&candidate).unwrap(),
        "0470 12 34 56"
    );
    assert_eq!(
        formatter.format_international(&candidate).unwrap(),
        "+32 470 12 34 56"
    );
}

#[test]
fn unknown_format_token_is_a_format_error_not_a_default() {
    let formatter = PhoneFormatter::default();

    let err = formatter
        .format_token(&belgian_mobile(), "BOGUS")
        .unwrap_err();
    assert!(matches!(err, FormatError::UnknownToken(token) if token == "BOGUS"));
}

#[test]
fn format_token_accepts_case_insensitive_aliases() {
    let formatter = PhoneFormatter::default();

    assert_eq!(
        formatter.format_token(&belgian_mobile(), "E164").unwrap(),
        "+32470123456"
    );
    assert_eq!(
        formatter
            .format_token(&belgian_mobile(), "national")
            .unwrap(),
        "0470 12 34 56"
    );
}

#[test]
fn format_for_country_rejects_unknown_tokens_up_front() {
    let formatter = PhoneFormatter::default();

    let err = formatter
        .format_for_country(&belgian_mobile(), "ZZ")
        .unwrap_err();
    assert!(matches!(err, CountryTokenError::Unrecognized(token) if token == "ZZ"));
}

#[test]
fn format_for_country_depends_on_the_destination() {
    let formatter = PhoneFormatter::default();
    let candidate = belgian_mobile();

    // Dialed from inside Belgium: national convention.
    assert_eq!(
        formatter.format_for_country(&candidate, "BE").unwrap(),
        "0470 12 34 56"
    );
    // Dialed from the US: international form.
    assert_eq!(
        formatter.format_for_country(&candidate, "US").unwrap(),
        "+32 470 12 34 56"
    );
}

#[test]
fn mobile_dialing_format_can_strip_decoration() {
    let formatter = PhoneFormatter::default();
    let candidate = belgian_mobile();

    assert_eq!(
        formatter
            .format_for_mobile_dialing(&candidate, "US", true)
            .unwrap(),
        "+32470123456"
    );
    assert_eq!(
        formatter
            .format_for_mobile_dialing(&candidate, "US", false)
            .unwrap(),
        "+32 470 12 34 56"
    );

    let err = formatter
        .format_for_mobile_dialing(&candidate, "ZZ", false)
        .unwrap_err();
    assert!(matches!(err, CountryTokenError::Unrecognized(_)));
}

#[test]
fn region_and_classification() {
    let formatter = PhoneFormatter::default();

    assert_eq!(formatter.region(&belgian_mobile()).unwrap().as_str(), "BE");
    assert_eq!(
        formatter.number_type(&belgian_mobile()).unwrap(),
        NumberType::Mobile
    );
    assert_eq!(
        formatter.type_label(&belgian_mobile()).unwrap(),
        Some("mobile")
    );

    let us_toll_free =
        PhoneCandidate::new("800 444 4444").with_country(CountryCode::new("US").unwrap());
    assert_eq!(
        formatter.type_label(&us_toll_free).unwrap(),
        Some("toll_free")
    );
}
