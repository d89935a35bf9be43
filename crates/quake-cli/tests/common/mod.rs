use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so stored settings never leak between tests.
pub fn run_cli_with_env(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quake"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("QUAKE_FEED_URL");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path) -> String {
    let output = run_cli_with_env(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A USGS-shaped response with two events.
pub fn feed_body() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "mag": 7.2,
                    "place": "88km N of Yelizovo, Russia",
                    "time": 1454124312220_i64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "mag": 6.1,
                    "place": "Pacific-Antarctic Ridge",
                    "time": 1453777820750_i64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us20004uks"
                }
            }
        ]
    })
}
