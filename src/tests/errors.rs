use crate::{
    ErrorContext,
    ExprobError,
    MeasureErrorKind,
    ProbabilityMeasure,
    Ratio,
    RatioErrorKind,
};

#[test]
fn error_codes_are_distinct() {
    let invalid = Ratio::new(-1, 2).unwrap_err();
    let zero_division = Ratio::one().divided_by(&Ratio::zero()).unwrap_err();
    let m = vec![("a", Ratio::one())].into_iter().collect::<ProbabilityMeasure<&str>>();
    let unknown = m.probability_at(&"b").unwrap_err();
    let empty = m.relative_where(|_, _| false).sampling_from(&Ratio::zero()).unwrap_err();

    let codes = vec![
        invalid.error_code(),
        zero_division.error_code(),
        unknown.error_code(),
        empty.error_code(),
    ];

    assert_eq!(codes, vec![100, 101, 200, 201]);
}

#[test]
fn error_context_test() {
    let invalid = Ratio::new(1, 0).unwrap_err();
    let zero_division = Ratio::one().divided_by(&Ratio::zero()).unwrap_err();

    assert_eq!(invalid.context(), ErrorContext::ConstructingRatio);
    assert_eq!(zero_division.context(), ErrorContext::DividingRatio);

    let m = vec![("a", Ratio::zero())].into_iter().collect::<ProbabilityMeasure<&str>>();
    let e = m.probability_where(|_, _| true).unwrap_err();

    assert_eq!(e.context(), ErrorContext::QueryingEvent);
    assert!(e.is_invalid_ratio());

    match e.kind() {
        MeasureErrorKind::Ratio(e) => {
            assert!(matches!(e.kind(), RatioErrorKind::DivisionByZeroRatio { .. }));
        },
        _ => panic!("{e:?}"),
    }
}

#[test]
fn error_message_test() {
    colored::control::set_override(false);

    let invalid = Ratio::new(1, -3).unwrap_err();

    assert_eq!(
        invalid.to_string(),
        "E0100: invalid ratio: `1/-3`\nHelp: A ratio must have a non-negative numerator and a positive denominator.",
    );
    assert_eq!(
        invalid.render_colored(),
        format!("[Error while constructing a ratio]\n{invalid}"),
    );

    let m = vec![("a", Ratio::zero())].into_iter().collect::<ProbabilityMeasure<&str>>();
    let e = m.probability_at(&"a").unwrap_err();

    assert_eq!(
        e.to_string(),
        "E0202: cannot divide `0/1` by a zero ratio\nHelp: The weights of this measure sum to zero, so no probability is defined.",
    );
}
