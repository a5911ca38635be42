// Shared test helpers for mock API setup and canned responses.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use serde_json::{json, Value};
use whoip::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A successful answer for 8.8.8.8, in the field order the API uses.
#[allow(dead_code)] // Used by other test files
pub fn google_dns() -> Value {
    json!({
        "status": "success",
        "continent": "North America",
        "country": "United States",
        "countryCode": "US",
        "regionName": "Virginia",
        "city": "Ashburn",
        "district": "",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "offset": -14400,
        "currency": "USD",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "mobile": false,
        "proxy": false,
        "hosting": true,
        "query": "8.8.8.8"
    })
}

/// A successful answer for 1.1.1.1.
#[allow(dead_code)]
pub fn cloudflare_dns() -> Value {
    json!({
        "status": "success",
        "continent": "Oceania",
        "country": "Australia",
        "countryCode": "AU",
        "regionName": "Queensland",
        "city": "South Brisbane",
        "district": "",
        "zip": "4101",
        "lat": -27.4766,
        "lon": 153.0166,
        "timezone": "Australia/Brisbane",
        "offset": 36000,
        "currency": "AUD",
        "isp": "Cloudflare, Inc",
        "org": "APNIC and Cloudflare DNS Resolver project",
        "mobile": false,
        "proxy": false,
        "hosting": true,
        "query": "1.1.1.1"
    })
}

/// The API's answer for an address in a private range.
#[allow(dead_code)]
pub fn private_range(ip: &str) -> Value {
    json!({"status": "fail", "message": "private range", "query": ip})
}

/// Configuration pointing at the mock server, with color disabled.
pub fn config_for(server: &MockServer) -> Config {
    colored::control::set_override(false);
    Config {
        endpoint: format!("{}/json/{{ip}}?fields={{fields}}", server.uri()),
        ..Default::default()
    }
}

/// Mounts a JSON answer for `ip`, optionally delayed, expected exactly once.
#[allow(dead_code)]
pub async fn mount_answer(server: &MockServer, ip: &str, body: Value, delay: Option<Duration>) {
    let mut response = ResponseTemplate::new(200).set_body_json(body);
    if let Some(delay) = delay {
        response = response.set_delay(delay);
    }
    Mock::given(method("GET"))
        .and(path(format!("/json/{ip}")))
        .and(query_param("fields", "60549115"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Runs `whoip` with `args` against `config` and returns stdout.
#[allow(dead_code)]
pub async fn run(args: &[&str], config: &Config) -> Result<String, whoip::WhoipError> {
    let mut out = Vec::new();
    whoip::execute(args, config, &mut out).await?;
    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

/// A local port that was just free: bound to port 0, then released.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind an ephemeral port");
    listener
        .local_addr()
        .expect("bound listener has an address")
        .port()
}
