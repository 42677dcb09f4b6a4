//! Lookup client tests
//!
//! The client side of the contract, with mockito standing in for the
//! proxy: form validation before any network call, result rendering, and
//! the documented 8.8.8.8 example end to end (minus the browser launch).

use geovision::interfaces::client::{api, ClientError, LookupForm, ProxyClient};

// =============================================================================
// Form validation (zero network calls on rejection)
// =============================================================================

#[test]
fn test_empty_ip_never_reaches_the_wire() {
    // Resolution fails before a client or URL exists.
    let form = LookupForm {
        ip: String::new(),
        hostname: "127.0.0.1".to_string(),
        port: "8000".to_string(),
    };
    let err = form.resolve().unwrap_err();
    assert_eq!(format!("{}", err), "Please enter an IP address");
}

#[test]
fn test_bad_port_never_reaches_the_wire() {
    let form = LookupForm {
        ip: "8.8.8.8".to_string(),
        hostname: String::new(),
        port: "80 00".to_string(),
    };
    let err = form.resolve().unwrap_err();
    assert!(matches!(err, ClientError::InvalidPort(_)));
    assert_eq!(format!("{}", err), "Invalid port: 80 00");
}

#[test]
fn test_blank_fields_resolve_to_documented_defaults() {
    let form = LookupForm {
        ip: "8.8.8.8".to_string(),
        hostname: String::new(),
        port: String::new(),
    };
    let target = form.resolve().unwrap();
    assert_eq!(target.base_url, "http://127.0.0.1:8000");
}

// =============================================================================
// Documented 8.8.8.8 example
// =============================================================================

#[tokio::test]
async fn test_google_dns_example_renders_exact_values_and_map_url() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/ip/8.8.8.8")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ip": "8.8.8.8", "country": "United States", "country_code": "US",
                "latitude": 37.7510, "longitude": -97.822, "city": "Unknown",
                "asn": "15169 (GOOGLE)", "timezone": "Unknown"}"#,
        )
        .create_async()
        .await;

    let client = ProxyClient::new(&server.url());
    let result = client.query("8.8.8.8").await.unwrap();

    colored::control::set_override(false);
    let rendered = geovision::interfaces::client::render::render_result(&result);
    colored::control::unset_override();

    for expected in [
        "8.8.8.8",
        "United States",
        "US",
        "37.751",
        "-97.822",
        "15169 (GOOGLE)",
    ] {
        assert!(rendered.contains(expected), "missing {:?} in: {}", expected, rendered);
    }

    let url = api::map_url(result.latitude, result.longitude);
    assert!(
        url.contains("mlat=37.751&mlon=-97.822"),
        "got: {}",
        url
    );
    assert!(url.contains("zoom=10"), "got: {}", url);
}

// =============================================================================
// Failure surfacing
// =============================================================================

#[tokio::test]
async fn test_proxy_error_detail_becomes_the_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/ip/203.0.113.9")
        .with_status(404)
        .with_body(r#"{"detail": "no geolocation data found for IP: 203.0.113.9"}"#)
        .create_async()
        .await;

    let client = ProxyClient::new(&server.url());
    let err = client.query("203.0.113.9").await.unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Server error (404): no geolocation data found for IP: 203.0.113.9"
    );
}

#[tokio::test]
async fn test_unreachable_proxy_is_a_caught_connection_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = format!("http://{}", addr);
    let client = ProxyClient::new(&base_url);
    let err = client.query("8.8.8.8").await.unwrap_err();
    assert_eq!(
        format!("{}", err),
        format!("Failed to connect to server at {}", base_url)
    );
}
