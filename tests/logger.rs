use stardo::config::LoggingConfig;
use stardo::logger::{self, Logger};

#[test]
fn test_logs_are_timestamped_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());

    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_init_disabled_installs_nothing() {
    let result = logger::init(&LoggingConfig { enabled: false }).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_log_file_path_is_in_app_dir() {
    // Containers without a home directory have no data dir
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("stardo/stardo.log"));
    }
}
