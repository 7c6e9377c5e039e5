use super::*;

#[test]
fn test_with_context_keeps_payload() {
    let err = Error::InvalidLength {
        context: "first",
        expected: 97,
        actual: 98,
    };

    match err.with_context("second") {
        Error::InvalidLength { context, expected, actual } => {
            assert_eq!(context, "second");
            assert_eq!(expected, 97);
            assert_eq!(actual, 98);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    let err = Error::UnsupportedDegree { degree: 10 }.with_context("ignored");
    assert_eq!(err, Error::UnsupportedDegree { degree: 10 });
}

#[test]
fn test_result_ext() {
    let r: core::result::Result<(), Error> = Err(Error::InvertZero { context: "inner" });
    let err = r.with_context("outer").unwrap_err();
    assert_eq!(err, Error::InvertZero { context: "outer" });

    let r: core::result::Result<u8, ()> = Err(());
    let err = r.wrap_err(|| Error::UnsupportedDegree { degree: 4 }).unwrap_err();
    assert_eq!(err, Error::UnsupportedDegree { degree: 4 });
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    let err = Error::UnsupportedDegree { degree: 10 };
    assert_eq!(err.to_string(), "No irreducible trinomial registered for GF(3^10)");

    let err = Error::InvertZero { context: "GF(3^m) inverse" };
    assert_eq!(err.to_string(), "GF(3^m) inverse: inversion of zero");

    let err = Error::InvalidParameter {
        context: "trit",
        message: String::new(),
    }
    .with_message("value 7 is not in {0, 1, 2}");
    assert_eq!(err.to_string(), "trit: value 7 is not in {0, 1, 2}");

    let err = Error::InvalidLength {
        context: "GF(3^m) add output",
        expected: 4,
        actual: 2,
    };
    assert_eq!(err.to_string(), "GF(3^m) add output: invalid length (expected 4, got 2)");
}
