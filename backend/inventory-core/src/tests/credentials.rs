use crate::config::credentials::{
    AUTH_URL_ENV, INTERFACE_ENV, PASSWORD_ENV, PROJECT_DOMAIN_NAME_ENV, PROJECT_NAME_ENV,
    REGION_NAME_ENV, USER_DOMAIN_NAME_ENV, USERNAME_ENV,
};
use crate::config::{Credentials, EndpointInterface, EndpointSelection};
use crate::error::config::ConfigError;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

/// **VALUE**: Verifies all six credential variables are read.
#[test]
fn given_full_environment_when_loading_credentials_then_all_fields_set() {
    let credentials = Credentials::from_lookup(lookup_from(&[
        (AUTH_URL_ENV, "https://id.example:5000/v3"),
        (USERNAME_ENV, "alice"),
        (PASSWORD_ENV, "hunter2"),
        (PROJECT_NAME_ENV, "ops"),
        (USER_DOMAIN_NAME_ENV, "Default"),
        (PROJECT_DOMAIN_NAME_ENV, "Default"),
    ]));

    assert_eq!(
        credentials.auth_url.as_deref(),
        Some("https://id.example:5000/v3")
    );
    assert_eq!(credentials.username.as_deref(), Some("alice"));
    assert_eq!(
        credentials.password.as_ref().map(|p| p.expose()),
        Some("hunter2")
    );
    assert_eq!(credentials.project_name.as_deref(), Some("ops"));
    assert_eq!(credentials.user_domain_name.as_deref(), Some("Default"));
    assert_eq!(credentials.project_domain_name.as_deref(), Some("Default"));
}

/// **VALUE**: Verifies the password never shows up in debug output.
///
/// **WHY THIS MATTERS**: Credentials are logged at debug level when troubleshooting.
///
/// **BUG THIS CATCHES**: Would catch storing the password as a plain `String`.
#[test]
fn given_credentials_with_password_when_debug_formatted_then_password_hidden() {
    let credentials = Credentials::from_lookup(lookup_from(&[(PASSWORD_ENV, "hunter2")]));

    let debug = format!("{credentials:?}");

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_empty_environment_when_loading_credentials_then_all_none() {
    let credentials = Credentials::from_lookup(lookup_from(&[]));

    assert!(credentials.auth_url.is_none());
    assert!(credentials.username.is_none());
    assert!(credentials.password.is_none());
}

/// **VALUE**: Verifies both modern and legacy interface spellings parse.
#[test]
fn given_interface_spellings_when_parsed_then_mapped() {
    let cases = [
        ("public", EndpointInterface::Public),
        ("publicURL", EndpointInterface::Public),
        ("Internal", EndpointInterface::Internal),
        ("internalURL", EndpointInterface::Internal),
        (" admin ", EndpointInterface::Admin),
    ];

    for (raw, expected) in cases {
        assert_eq!(raw.parse::<EndpointInterface>().unwrap(), expected, "{raw}");
    }
}

#[test]
fn given_unknown_interface_when_parsed_then_parse_error() {
    let error = "private".parse::<EndpointInterface>().unwrap_err();

    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains(INTERFACE_ENV));
}

/// **VALUE**: Verifies empty interface and region values fall back to defaults.
///
/// **BUG THIS CATCHES**: Would catch `OS_REGION_NAME=""` filtering out every endpoint.
#[test]
fn given_blank_selection_variables_when_loading_then_defaults() {
    let selection =
        EndpointSelection::from_lookup(lookup_from(&[(INTERFACE_ENV, ""), (REGION_NAME_ENV, " ")]))
            .unwrap();

    assert_eq!(selection, EndpointSelection::default());
}

#[test]
fn given_region_and_interface_when_loading_selection_then_set() {
    let selection = EndpointSelection::from_lookup(lookup_from(&[
        (INTERFACE_ENV, "internal"),
        (REGION_NAME_ENV, "RegionTwo"),
    ]))
    .unwrap();

    assert_eq!(selection.interface, EndpointInterface::Internal);
    assert_eq!(selection.region.as_deref(), Some("RegionTwo"));
}
