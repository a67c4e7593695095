// tests/logging.rs

use fanout::logging::{LogLevel, resolve_level};

#[test]
fn test_log_level_parsing() {
    assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
    assert_eq!(" WARNING ".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("Trace".parse::<LogLevel>(), Ok(LogLevel::Trace));

    let err = "verbose".parse::<LogLevel>().unwrap_err();
    assert!(err.contains("verbose"));
}

#[test]
fn test_explicit_level_wins() {
    assert_eq!(resolve_level(Some(LogLevel::Debug)), tracing::Level::DEBUG);
    assert_eq!(resolve_level(Some(LogLevel::Error)), tracing::Level::ERROR);
}

#[test]
fn test_env_fallback_then_info_default() {
    // Only test in this binary that touches the env var.
    // SAFETY: no other test here reads or writes the environment concurrently.
    unsafe { std::env::set_var(fanout::logging::LOG_ENV, "debug") };
    assert_eq!(resolve_level(None), tracing::Level::DEBUG);
    assert_eq!(resolve_level(Some(LogLevel::Warn)), tracing::Level::WARN);

    unsafe { std::env::set_var(fanout::logging::LOG_ENV, "nonsense") };
    assert_eq!(resolve_level(None), tracing::Level::INFO);

    unsafe { std::env::remove_var(fanout::logging::LOG_ENV) };
    assert_eq!(resolve_level(None), tracing::Level::INFO);
}
