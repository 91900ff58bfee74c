// Field parsing, default substitution and range rejection.

use eco_core::constants::MAX_FIELD_VALUE;
use eco_core::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("usage", "Usage"),
    FieldSpec::positive("cost", "Cost per unit", 8.0),
    FieldSpec::positive("people", "People", 1.0).whole(),
];

fn raw(pairs: &[(&str, &str)]) -> RawInputSet {
    pairs.iter().copied().collect()
}

#[test]
fn blank_fields_take_their_defaults() {
    let validated = InputValidator::new(FIELDS).validate(&RawInputSet::new()).unwrap();
    assert_eq!(validated.value("usage"), 0.0);
    assert_eq!(validated.value("cost"), 8.0);
    assert_eq!(validated.value("people"), 1.0);
    assert_eq!(validated.len(), 3);
}

#[test]
fn whitespace_only_counts_as_blank() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "   "), ("cost", "\t")]))
        .unwrap();
    assert_eq!(validated.value("usage"), 0.0);
    assert_eq!(validated.value("cost"), 8.0);
}

#[test]
fn decimal_text_is_parsed_and_trimmed() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", " 12.5 "), ("cost", "6.25")]))
        .unwrap();
    assert_eq!(validated.value("usage"), 12.5);
    assert_eq!(validated.value("cost"), 6.25);
}

#[test]
fn unparseable_text_falls_back_like_blank() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "lots"), ("cost", "n/a"), ("people", "NaN")]))
        .unwrap();
    assert_eq!(validated.value("usage"), 0.0);
    assert_eq!(validated.value("cost"), 8.0);
    assert_eq!(validated.value("people"), 1.0);
}

#[test]
fn whole_fields_truncate() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("people", "3.9")]))
        .unwrap();
    assert_eq!(validated.value("people"), 3.0);
}

#[test]
fn negative_usage_is_rejected() {
    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "-1")]))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::Negative {
            field: "usage",
            label: "Usage",
            value: -1.0
        }
    );
    assert_eq!(err.field(), "usage");
}

#[test]
fn explicit_zero_denominator_is_rejected() {
    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("cost", "0")]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::NotPositive { field: "cost", .. }));
    assert_eq!(err.to_string(), "Cost per unit must be greater than zero (got 0)");
}

#[test]
fn negative_denominator_reports_not_positive() {
    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("cost", "-2")]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::NotPositive { field: "cost", .. }));
}

#[test]
fn fractional_household_below_one_takes_the_default() {
    // 0.5 is a positive entry; truncating it to 0 falls back like a blank
    for text in ["0.5", "0.9"] {
        let validated = InputValidator::new(FIELDS)
            .validate(&raw(&[("people", text)]))
            .unwrap();
        assert_eq!(validated.value("people"), 1.0);
    }
}

#[test]
fn negative_fraction_is_checked_before_truncation() {
    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("people", "-0.5")]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::NotPositive { field: "people", .. }));

    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "-0.25")]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::Negative { field: "usage", .. }));
}

#[test]
fn values_above_the_field_bound_are_rejected() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "1e9")]))
        .unwrap();
    assert_eq!(validated.value("usage"), MAX_FIELD_VALUE);

    let err = InputValidator::new(FIELDS)
        .validate(&raw(&[("usage", "1e308")]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::TooLarge { field: "usage", .. }));
    assert_eq!(err.field(), "usage");
}

#[test]
fn leading_number_is_read_from_trailing_text() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[
            ("usage", "12abc"),
            ("cost", "6.5 per unit"),
            ("people", "3 people"),
        ]))
        .unwrap();
    assert_eq!(validated.value("usage"), 12.0);
    assert_eq!(validated.value("cost"), 6.5);
    assert_eq!(validated.value("people"), 3.0);
}

#[test]
fn required_field_must_be_present() {
    const REQUIRED: &[FieldSpec] = &[FieldSpec::optional("usage", "Usage").required()];
    let err = InputValidator::new(REQUIRED)
        .validate(&RawInputSet::new())
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::Missing {
            field: "usage",
            label: "Usage"
        }
    );
    assert_eq!(err.to_string(), "Usage is required");
}

#[test]
fn undeclared_fields_are_ignored() {
    let validated = InputValidator::new(FIELDS)
        .validate(&raw(&[("unknown", "-5")]))
        .unwrap();
    assert_eq!(validated.value("unknown"), 0.0);
}

#[test]
fn parse_number_refuses_non_finite() {
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("1e400"), None);
}

#[test]
fn parse_number_reads_the_leading_decimal() {
    assert_eq!(parse_number("12abc"), Some(12.0));
    assert_eq!(parse_number("-3.5kg"), Some(-3.5));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("5."), Some(5.0));
    assert_eq!(parse_number("2e"), Some(2.0));
    assert_eq!(parse_number("2e-1x"), Some(0.2));
    assert_eq!(parse_number("+7"), Some(7.0));
    assert_eq!(parse_number("abc12"), None);
    assert_eq!(parse_number("."), None);
    assert_eq!(parse_number("-"), None);
}

#[test]
fn raw_input_set_reports_blank() {
    let mut raw = RawInputSet::new();
    assert!(raw.is_empty());
    raw.set("usage", "  ");
    assert!(raw.is_empty());
    raw.set("usage", "4");
    assert!(!raw.is_empty());
    assert_eq!(raw.get("usage"), Some("4"));
}
