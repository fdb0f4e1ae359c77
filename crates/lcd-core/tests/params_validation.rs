use lcd_core::{Base, CodeParameters, LcdError, ValidatorConfig, PACKED_CAPACITY};

#[test]
fn accepts_well_formed_parameters() {
    let params = CodeParameters::new(6, 3, 4, 4).unwrap();
    assert_eq!((params.n(), params.k(), params.d()), (6, 3, 4));
    assert_eq!(params.base(), Base::Quaternary);
    assert_eq!(params.to_string(), "[6, 3, 4] over GF(4)");
}

#[test]
fn rejects_unknown_base() {
    let err = CodeParameters::new(4, 2, 2, 3).unwrap_err();
    assert!(matches!(err, LcdError::Field(_)));
    assert_eq!(err.code(), "invalid-base");
    assert_eq!(err.info().context["base"], "3");
}

#[test]
fn rejects_inconsistent_dimensions() {
    for (n, k, d) in [(3, 4, 1), (4, 0, 1), (4, 2, 0)] {
        let err = CodeParameters::new(n, k, d, 4).unwrap_err();
        assert!(matches!(err, LcdError::Parameters(_)), "{n} {k} {d}");
        assert_eq!(err.code(), "invalid-parameters");
        assert_eq!(err.info().context["k"], k.to_string());
    }
}

#[test]
fn rejects_lengths_beyond_capacity() {
    let err = CodeParameters::new(PACKED_CAPACITY + 1, 2, 2, 4).unwrap_err();
    assert!(matches!(err, LcdError::Overflow(_)));
    assert_eq!(err.code(), "length-overflow");
    assert!(CodeParameters::new(PACKED_CAPACITY, 2, 2, 4).is_ok());
}

#[test]
fn rejects_codeword_counts_beyond_u64() {
    let err = CodeParameters::new(32, 32, 1, 4).unwrap_err();
    assert_eq!(err.code(), "enumerator-overflow");
    assert!(CodeParameters::new(32, 32, 1, 2).is_ok());
}

#[test]
fn digits_are_checked_against_base() {
    assert_eq!(Base::Quaternary.check_digit(3).unwrap(), 3);
    assert_eq!(Base::Binary.check_digit(1).unwrap(), 1);
    let err = Base::Binary.check_digit(2).unwrap_err();
    assert_eq!(err.code(), "invalid-digit");
}

#[test]
fn policy_annotation_lists_every_flag() {
    let policy = ValidatorConfig {
        require_hermitian_lcd: true,
        ..ValidatorConfig::default()
    };
    let info = policy.annotate(lcd_core::ErrorInfo::new("x", "y"));
    assert_eq!(info.context["require_hermitian_lcd"], "true");
    assert_eq!(info.context["multithreaded"], "false");
    assert_eq!(info.context.len(), 4);
}
