// tests/async_bridge.rs

mod common;
use crate::common::{failed_keys, init_tracing};

use std::collections::HashSet;

use anyhow::bail;
use fanout::execute_async;
use fanout_test_utils::with_timeout;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_execute_async_reports_failures() {
    init_tracing();
    let keys: Vec<String> = (0..20).map(|i| format!("job-{i}")).collect();

    let result = with_timeout(execute_async(keys, 4, |_worker, key: &String| {
        if key.ends_with('7') {
            bail!("{key} failed");
        }
        Ok(())
    }))
    .await
    .expect("blocking run should complete");

    let expected: HashSet<String> = ["job-7".to_string(), "job-17".to_string()].into();
    assert_eq!(failed_keys(result), expected);
}

#[tokio::test]
async fn test_execute_async_on_current_thread_runtime() {
    let keys: Vec<u32> = (0..100).collect();

    let result = with_timeout(execute_async(keys, 8, |_, key: &u32| {
        if *key == 50 {
            panic!("contained");
        }
        Ok(())
    }))
    .await
    .expect("blocking run should complete");

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&50).and_then(|e| e.panic_message()), Some("contained"));
}

#[tokio::test]
async fn test_execute_async_noop() {
    let result = execute_async(Vec::<u32>::new(), 4, |_, _: &u32| Ok(()))
        .await
        .expect("blocking run should complete");
    assert!(result.is_ok());
}
