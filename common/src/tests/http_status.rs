use crate::HttpStatusCode;

/// **VALUE**: Verifies the 4xx range used to split identity rejections from outages.
///
/// **BUG THIS CATCHES**: Would catch off-by-one range bounds (e.g. 500 counted as client error).
#[test]
fn given_status_codes_when_classified_then_only_4xx_is_client_error() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(401).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(399).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(!HttpStatusCode(201).is_client_error());
}

#[test]
fn given_status_code_when_displayed_then_bare_number() {
    assert_eq!(HttpStatusCode(401).to_string(), "401");
}
