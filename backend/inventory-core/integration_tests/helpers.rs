use inventory_core::Credentials;

use common::RedactedSecret;

use serde_json::{Value, json};

pub const TEST_TOKEN: &str = "gAAAAAB-test-token";

pub fn credentials_for(auth_url: &str) -> Credentials {
    Credentials {
        auth_url: Some(auth_url.to_string()),
        username: Some(String::from("alice")),
        password: Some(RedactedSecret::new("hunter2")),
        project_name: Some(String::from("ops")),
        user_domain_name: Some(String::from("Default")),
        project_domain_name: Some(String::from("Default")),
    }
}

/// Keystone v3 token body with one public compute endpoint.
pub fn token_body(compute_url: &str) -> Value {
    json!({
        "token": {
            "methods": ["password"],
            "expires_at": "2030-01-01T00:00:00.000000Z",
            "catalog": [
                {
                    "type": "compute",
                    "name": "nova",
                    "endpoints": [
                        {"interface": "internal", "region": "RegionOne", "url": "http://unreachable.invalid/v2.1"},
                        {"interface": "public", "region": "RegionOne", "url": compute_url}
                    ]
                }
            ]
        }
    })
}

pub fn server_json(id: &str, stack: Option<&str>) -> Value {
    let metadata = match stack {
        Some(stack) => json!({"stack": stack}),
        None => json!({}),
    };
    json!({
        "id": id,
        "name": format!("srv-{id}"),
        "status": "ACTIVE",
        "addresses": {
            "public": [
                {"addr": "2001:db8::1", "version": 6, "OS-EXT-IPS:type": "fixed"},
                {"addr": format!("192.0.2.{}", id.len()), "version": 4, "OS-EXT-IPS:type": "fixed"}
            ]
        },
        "metadata": metadata
    })
}
