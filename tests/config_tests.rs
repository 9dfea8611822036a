use std::io::Write;
use std::path::PathBuf;

use dexfeed::error::{ConfigError, Error};
use dexfeed::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn config_loads_full_file() {
    let file = write_temp_config(
        r#"
[feed]
url = "wss://feed.example.com/"
chain = "bnb"
sink_timeout_secs = 3

[logging]
level = "debug"
format = "json"
file = "feed.log"

[csv]
enabled = true
path = "pools.csv"
"#,
    );

    let config = Config::load(file.path()).expect("load config");

    assert_eq!(config.feed.url, "wss://feed.example.com/");
    assert_eq!(config.chain().expect("chain").feed_chain_code, "bsc");
    assert_eq!(config.feed.sink_timeout_secs, 3);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.file, Some(PathBuf::from("feed.log")));
    assert!(config.csv.enabled);
    assert_eq!(config.csv.path, PathBuf::from("pools.csv"));
    assert!(!config.telegram.enabled);
}

#[test]
fn config_rejects_unknown_chain() {
    let file = write_temp_config("[feed]\nchain = \"dogecoin\"\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::UnknownChain { name, supported })) => {
            assert_eq!(name, "dogecoin");
            assert!(supported.contains("ethereum"));
        }
        Err(err) => panic!("Expected unknown chain error, got {err}"),
        Ok(_) => panic!("Expected unknown chain error, got Ok"),
    }
}

#[test]
fn config_rejects_http_url() {
    let result = Config::parse_toml_with_env("[feed]\nurl = \"https://ws.dextools.io/\"\n", no_env);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "feed.url",
            ..
        }))
    ));
}

#[test]
fn config_requires_telegram_credentials_when_enabled() {
    let result = Config::parse_toml_with_env("[telegram]\nenabled = true\n", no_env);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "telegram.bot_token"
        }))
    ));
}

#[test]
fn config_takes_telegram_credentials_from_env() {
    let env = |key: &str| match key {
        "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
        "TELEGRAM_CHAT_ID" => Some("-100200".to_string()),
        _ => None,
    };

    let config =
        Config::parse_toml_with_env("[telegram]\nenabled = true\n", env).expect("parse config");

    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:abc"));
    assert_eq!(config.telegram.chat_id.as_deref(), Some("-100200"));
}

#[test]
fn config_reports_malformed_toml() {
    let file = write_temp_config("[feed\nchain = ");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}
