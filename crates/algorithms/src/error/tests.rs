use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();
    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    assert!(validate::min_length("buffer", 1, 1).is_ok());
    assert!(validate::min_length("buffer", 0, 1).is_err());
    assert!(validate::max_length("buffer", 16, 16).is_ok());
    assert!(validate::max_length("buffer", 17, 16).is_err());

    assert!(validate::authentication(true, "GCM").is_ok());
    assert_eq!(
        validate::authentication(false, "GCM"),
        Err(Error::Authentication { algorithm: "GCM" })
    );
}

#[test]
fn test_multiple_of() {
    assert!(validate::multiple_of("ciphertext", 0, 16).is_ok());
    assert!(validate::multiple_of("ciphertext", 48, 16).is_ok());
    assert_eq!(
        validate::multiple_of("ciphertext", 17, 16),
        Err(Error::Length {
            context: "ciphertext",
            expected: 32,
            actual: 17
        })
    );
}

#[test]
fn test_display() {
    let err = Error::Length {
        context: "AES-256 key",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for AES-256 key: expected 32, got 16"
    );
    assert_eq!(
        Error::Padding { context: "CBC" }.to_string(),
        "Invalid padding in CBC"
    );
    assert_eq!(
        Error::Allocation {
            context: "ECB output",
            requested: 64
        }
        .to_string(),
        "Allocation of 64 bytes failed for ECB output"
    );
}

#[cfg(feature = "std")]
#[test]
fn test_error_conversion() {
    use rcrypt_api::{Error as ApiError, ErrorKind};

    let api = ApiError::from(Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    });
    assert_eq!(api.kind(), ErrorKind::Length);
    match api {
        ApiError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    assert_eq!(
        ApiError::from(Error::Padding { context: "ECB" }).kind(),
        ErrorKind::Length
    );
    assert_eq!(
        ApiError::from(Error::Authentication { algorithm: "GCM-SIV" }).kind(),
        ErrorKind::Authentication
    );
    assert_eq!(
        ApiError::from(Error::Allocation {
            context: "scratch",
            requested: 1
        })
        .kind(),
        ErrorKind::Allocation
    );
    assert_eq!(
        ApiError::from(Error::param("offset", "too large")).kind(),
        ErrorKind::Other
    );
}
