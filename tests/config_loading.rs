// tests/config_loading.rs

use std::io::Write;

use fanout::Pool;
use fanout::config::{DEFAULT_CHUNK_SIZE, load_and_validate, load_from_path, parse_and_validate};
use fanout::errors::FanoutError;
use fanout_test_utils::builders::PoolConfigBuilder;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_pool_section() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[pool]
threads = 3
chunk_size = 16
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.pool().threads, 3);
    assert_eq!(cfg.pool().chunk_size, 16);
}

#[test]
fn test_missing_fields_use_defaults() {
    let cfg = parse_and_validate("").unwrap();

    // Machine dependent; only has to be usable.
    assert!(cfg.pool().threads >= 1);
    assert_eq!(cfg.pool().chunk_size, DEFAULT_CHUNK_SIZE);

    let cfg = parse_and_validate("[pool]\nthreads = 2\n").unwrap();
    assert_eq!(cfg.pool().threads, 2);
    assert_eq!(cfg.pool().chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_zero_threads_returns_config_error() {
    let result = parse_and_validate("[pool]\nthreads = 0\n");

    match result {
        Err(FanoutError::ConfigError(msg)) => {
            assert!(msg.contains("threads"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_chunk_size_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[pool]\nchunk_size = 0\n").unwrap();

    // Raw loading accepts it; validation does not.
    let raw = load_from_path(file.path()).unwrap();
    assert_eq!(raw.pool.chunk_size, 0);

    match load_and_validate(file.path()) {
        Err(FanoutError::ConfigError(msg)) => assert!(msg.contains("chunk_size")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_toml_returns_toml_error() {
    let result = parse_and_validate("[pool\nthreads = ");
    assert!(matches!(result, Err(FanoutError::TomlError(_))));

    let result = parse_and_validate("[pool]\nthreads = \"many\"\n");
    assert!(matches!(result, Err(FanoutError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(FanoutError::IoError(_))));
}

#[test]
fn test_pool_uses_configured_chunk_size_and_threads() {
    let cfg = PoolConfigBuilder::new().threads(2).chunk_size(4).build();
    let pool = Pool::from_config(&cfg);
    assert_eq!(pool.threads(), 2);
    assert_eq!(pool.chunk_size(), 4);

    let data: Vec<u32> = (0..10).collect();
    let errors = pool
        .execute_chunk(&data, |piece| {
            anyhow::ensure!(piece.len() == 4, "short chunk of {}", piece.len());
            Ok(())
        })
        .unwrap_err();

    // 10 / 4 -> chunks of 4, 4, 2.
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&2));

    let keys = vec!["a", "b"];
    assert!(pool.execute(&keys, |_| Ok(())).is_ok());
    assert!(
        pool.execute_with_worker(&keys, |worker, _| {
            anyhow::ensure!(worker < 2, "worker {worker} out of range");
            Ok(())
        })
        .is_ok()
    );
    assert!(pool.execute_chunk_with_worker(&data, |_, _| Ok(())).is_ok());
}

#[test]
fn test_builder_rejects_zero_threads() {
    let raw = PoolConfigBuilder::new().threads(0).raw();
    assert!(matches!(
        fanout::config::ConfigFile::try_from(raw),
        Err(FanoutError::ConfigError(_))
    ));
}
