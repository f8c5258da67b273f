use crate::RedactedSecret;

/// **VALUE**: Verifies the password never leaks through `Debug` or `Display`.
///
/// **WHY THIS MATTERS**: Credentials structs are logged at debug level and errors are
/// printed to stderr. A derived Debug would put `OS_PASSWORD` into Ansible's output.
///
/// **BUG THIS CATCHES**: Would catch replacing the manual Debug/Display impls with derives.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("hunter2-very-secret");

    // WHEN: Formatting both ways
    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    // THEN: The raw value appears in neither
    assert!(!debug.contains("hunter2"), "Debug must not leak: {debug}");
    assert!(!display.contains("hunter2"), "Display must not leak: {display}");
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies the secret refuses to serialize.
///
/// **WHY THIS MATTERS**: The identity request body is built with serde_json. Serializing a
/// secret by accident (instead of `expose()`) must fail loudly rather than send or log it.
///
/// **BUG THIS CATCHES**: Would catch the Serialize impl being replaced by a derive.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    // GIVEN: A secret inside a JSON value
    let secret = RedactedSecret::new("token-value");

    // WHEN: Serializing
    let result = serde_json::to_string(&secret);

    // THEN: Error mentioning expose()
    let err = result.expect_err("serialization must fail");
    assert!(err.to_string().contains("expose()"));
}

/// **VALUE**: Verifies `expose()` returns the raw value.
#[test]
fn given_secret_when_exposed_then_returns_original_value() {
    // GIVEN: A secret built from a String
    let secret = RedactedSecret::from(String::from("abc123"));

    // THEN: Raw access works
    assert_eq!(secret.expose(), "abc123");
    assert!(!secret.is_empty());
    assert!(RedactedSecret::new("").is_empty());
}
