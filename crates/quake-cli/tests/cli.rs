//! CLI integration tests against a mock USGS service.
//!
//! The binary runs as a child process, so the mock server needs a
//! multi-threaded runtime to keep answering while the test blocks.

mod common;

use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{feed_body, run_cli_with_env, run_cli_with_env_success};

fn feed_url(server: &MockServer) -> String {
    format!("{}/fdsnws/event/1/query", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_earthquakes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fdsnws/event/1/query"))
        .and(query_param("format", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let stdout =
        run_cli_with_env_success(&["list", "--base-url", &feed_url(&server)], home.path());

    assert!(stdout.contains("7.2"));
    assert!(stdout.contains("88km N of"));
    assert!(stdout.contains("Yelizovo, Russia"));
    assert!(stdout.contains("Near the Pacific-Antarctic Ridge"));
    assert!(stdout.contains("https://earthquake.usgs.gov/earthquakes/eventpage/us20004uks"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let stdout = run_cli_with_env_success(
        &["list", "--json", "--base-url", &feed_url(&server)],
        home.path(),
    );

    let quakes: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let quakes = quakes.as_array().unwrap();
    assert_eq!(quakes.len(), 2);
    assert_eq!(quakes[0]["magnitude"], 7.2);
    assert_eq!(quakes[0]["location"], "88km N of Yelizovo, Russia");
    assert_eq!(quakes[0]["timestamp"], 1454124312220_i64);
    assert_eq!(
        quakes[0]["detailUrl"],
        "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_server_error_shows_empty_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let output = run_cli_with_env(&["list", "--base-url", &feed_url(&server)], home.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No earthquakes found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_malformed_entry_modes() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "features": [
            { "properties": { "mag": 5.2, "place": "10km SW of Example", "time": 1609459200000_i64, "url": "https://example.com/1" } },
            { "properties": { "mag": "6.0", "place": "Elsewhere", "time": 1609459300000_i64, "url": "https://example.com/2" } },
            { "properties": { "mag": 4.1, "place": "Later", "time": 1609459400000_i64, "url": "https://example.com/3" } }
        ]
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let url = feed_url(&server);
    let places = |extra: &[&str]| -> Vec<String> {
        let mut args = vec!["list", "--json", "--base-url", url.as_str()];
        args.extend_from_slice(extra);
        let stdout = run_cli_with_env_success(&args, home.path());
        let quakes: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
        quakes
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["location"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(places(&[]), ["10km SW of Example"]);
    assert!(places(&["--strict"]).is_empty());
    assert_eq!(places(&["--lenient"]), ["10km SW of Example", "Later"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stored_settings_shape_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fdsnws/event/1/query"))
        .and(query_param("limit", "5"))
        .and(query_param("minmag", "4.5"))
        .and(query_param("orderby", "time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let url = feed_url(&server);

    let stdout = run_cli_with_env_success(
        &[
            "settings",
            "set",
            "--min-magnitude",
            "4.5",
            "--order-by",
            "time",
            "--limit",
            "5",
            "--base-url",
            &url,
        ],
        home.path(),
    );
    assert!(stdout.contains("Settings saved"));

    let shown = run_cli_with_env_success(&["settings", "show", "--json"], home.path());
    let settings: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(settings["min_magnitude"], 4.5);
    assert_eq!(settings["order_by"], "time");
    assert_eq!(settings["limit"], 5);

    let stdout = run_cli_with_env_success(&["list", "--json"], home.path());
    let quakes: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(quakes.as_array().unwrap().len(), 2);
}

#[test]
fn test_settings_reset_restores_defaults() {
    let home = TempDir::new().unwrap();

    run_cli_with_env_success(&["settings", "set", "--order-by", "time-asc"], home.path());
    run_cli_with_env_success(&["settings", "reset"], home.path());

    let shown = run_cli_with_env_success(&["settings", "show", "--json"], home.path());
    let settings: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(settings["order_by"], "magnitude");
    assert_eq!(settings["min_magnitude"], 6.0);
    assert_eq!(
        settings["base_url"],
        "https://earthquake.usgs.gov/fdsnws/event/1/query"
    );
}

#[test]
fn test_settings_reject_invalid_values() {
    let home = TempDir::new().unwrap();

    let output = run_cli_with_env(&["settings", "set", "--order-by", "depth"], home.path());
    assert!(!output.status.success());

    let output = run_cli_with_env(&["settings", "set", "--min-magnitude", "-1"], home.path());
    assert!(!output.status.success());

    let output = run_cli_with_env(&["settings", "set", "--limit", "0"], home.path());
    assert!(!output.status.success());

    let output = run_cli_with_env(&["settings", "set"], home.path());
    assert!(!output.status.success());
}

#[test]
fn test_list_without_connectivity() {
    let home = TempDir::new().unwrap();

    let output = run_cli_with_env(
        &["list", "--base-url", "https://quake.invalid/fdsnws/event/1/query"],
        home.path(),
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No internet connection."));
}
