use moodlog::config::LogFormat;
use moodlog::{AppError, Config};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_moodlog_env() {
    env::remove_var("MOODLOG_FILE");
    env::remove_var("MOODLOG_CHART_DAYS");
    env::remove_var("MOODLOG_LOG_FORMAT");
}

#[test]
#[serial]
fn test_store_path_expands_tilde() {
    clear_moodlog_env();
    let orig_home = env::var("HOME").ok();
    env::set_var("HOME", "/home/moody");
    env::set_var("MOODLOG_FILE", "~/notes/mood.json");

    let result = Config::load();

    match orig_home {
        Some(val) => env::set_var("HOME", val),
        None => env::remove_var("HOME"),
    }
    clear_moodlog_env();

    let config = result.unwrap();
    assert_eq!(config.store_path, PathBuf::from("/home/moody/notes/mood.json"));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_moodlog_env();
    env::set_var("MOODLOG_FILE", "/var/tmp/entries.json");

    let config = Config::load().unwrap();
    clear_moodlog_env();

    assert_eq!(config.chart_days, 30);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
#[serial]
fn test_zero_chart_days_loads_but_fails_validation() {
    clear_moodlog_env();
    env::set_var("MOODLOG_FILE", "/var/tmp/entries.json");
    env::set_var("MOODLOG_CHART_DAYS", "0");

    let config = Config::load().unwrap();
    clear_moodlog_env();

    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

#[test]
#[serial]
fn test_debug_output_hides_store_location() {
    clear_moodlog_env();
    env::set_var("MOODLOG_FILE", "/home/secret-user/mood.json");

    let config = Config::load().unwrap();
    clear_moodlog_env();

    assert!(!format!("{:?}", config).contains("secret-user"));
}
