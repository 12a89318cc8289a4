use log_sentinel::app::{App, Config, ConfigError, LogFormat, TracingLevel};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Helper function to clean all environment variables before and after tests
fn clean_all_env_vars() {
    let env_vars = ["LOG_LEVEL", "LOG_FORMAT", "QUIET", "CONFIG_FILE"];

    unsafe {
        for var in &env_vars {
            env::remove_var(var);
        }
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_positional_arguments() {
    clean_all_env_vars();

    let config = Config::from_args(["log-sentinel", "app.log", "report.json"]).unwrap();

    assert_eq!(config.input_file, "app.log");
    assert_eq!(config.output_file, "report.json");
    assert_eq!(config.log_level, TracingLevel::Info);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(!config.quiet);
    assert_eq!(config.config_file, None);
}

#[test]
#[serial]
fn test_flags_override_defaults() {
    clean_all_env_vars();

    let config = Config::from_args([
        "log-sentinel",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--quiet",
        "app.log",
        "report.json",
    ])
    .unwrap();

    assert_eq!(config.log_level, TracingLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.quiet);
}

#[test]
#[serial]
fn test_missing_output_is_a_usage_error() {
    clean_all_env_vars();

    let err = Config::from_args(["log-sentinel", "app.log"]).unwrap_err();
    assert!(matches!(err, ConfigError::Usage(_)));

    let err = Config::from_args(["log-sentinel"]).unwrap_err();
    assert!(matches!(err, ConfigError::Usage(_)));
}

#[test]
#[serial]
fn test_unknown_level_value_is_a_usage_error() {
    clean_all_env_vars();

    let err = Config::from_args(["log-sentinel", "--log-level", "loud", "a.log", "b.json"])
        .unwrap_err();
    assert!(matches!(err, ConfigError::Usage(_)));
}

#[test]
#[serial]
fn test_empty_paths_are_rejected() {
    clean_all_env_vars();

    let err = Config::from_args(["log-sentinel", "", "report.json"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));

    let err = Config::from_args(["log-sentinel", "app.log", ""]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
}

#[test]
#[serial]
fn test_whitespace_paths_are_not_empty() {
    clean_all_env_vars();

    let config = Config::from_args(["log-sentinel", " ", "report.json"]).unwrap();
    assert_eq!(config.input_file, " ");

    let config = Config::from_args(["log-sentinel", "app.log", "\t"]).unwrap();
    assert_eq!(config.output_file, "\t");
}

#[test]
#[serial]
fn test_output_equal_to_input_is_rejected() {
    clean_all_env_vars();

    let err = Config::from_args(["log-sentinel", "app.log", "app.log"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
    assert!(err.to_string().contains("must differ"));
}

#[test]
#[serial]
fn test_output_directory_is_rejected() {
    clean_all_env_vars();
    let temp_dir = TempDir::new().unwrap();

    let err = Config::from_args(["log-sentinel", "app.log", temp_dir.path().to_str().unwrap()])
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
}

#[test]
#[serial]
fn test_config_from_environment() {
    clean_all_env_vars();

    unsafe {
        env::set_var("LOG_LEVEL", "warn");
        env::set_var("LOG_FORMAT", "json");
        env::set_var("QUIET", "true");
    }

    let config = Config::from_args(["log-sentinel", "app.log", "report.json"]).unwrap();

    assert_eq!(config.log_level, TracingLevel::Warn);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.quiet);

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_config_file_fills_defaults() {
    clean_all_env_vars();
    let file = write_config(
        r#"
log_level = "trace"
log_format = "json"
quiet = true
"#,
    );

    let config = Config::from_args_and_file([
        "log-sentinel",
        "--config-file",
        file.path().to_str().unwrap(),
        "app.log",
        "report.json",
    ])
    .unwrap();

    assert_eq!(config.log_level, TracingLevel::Trace);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.quiet);
}

#[test]
#[serial]
fn test_command_line_wins_over_config_file() {
    clean_all_env_vars();
    let file = write_config("log_level = \"error\"\nlog_format = \"json\"\n");

    let config = Config::from_args_and_file([
        "log-sentinel",
        "--config-file",
        file.path().to_str().unwrap(),
        "--log-level",
        "debug",
        "app.log",
        "report.json",
    ])
    .unwrap();

    assert_eq!(config.log_level, TracingLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.quiet);
}

#[test]
#[serial]
fn test_config_file_from_environment() {
    clean_all_env_vars();
    let file = write_config("quiet = true\n");

    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let app = App::from_args(["log-sentinel", "app.log", "report.json"]).unwrap();
    assert!(app.config().quiet);

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_unknown_config_key_is_a_parse_error() {
    clean_all_env_vars();
    let file = write_config("log_level = \"info\"\nbatch_size = 10\n");

    let err = Config::from_args_and_file([
        "log-sentinel",
        "--config-file",
        file.path().to_str().unwrap(),
        "app.log",
        "report.json",
    ])
    .unwrap_err();

    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
#[serial]
fn test_missing_config_file_is_a_file_error() {
    clean_all_env_vars();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let err = Config::from_args_and_file([
        "log-sentinel",
        "--config-file",
        missing.to_str().unwrap(),
        "app.log",
        "report.json",
    ])
    .unwrap_err();

    assert!(matches!(err, ConfigError::FileError(_)));
}
