use std::cell::RefCell;
use std::sync::Once;

use frontend::{ConfigResolver, MapEnv, API_BASE_URL_KEY, MODE_KEY};
use log::{Level, LevelFilter, Log, Metadata, Record};
use pretty_assertions::assert_eq;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps each test thread's records apart so tests can run in parallel.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}

fn config_records(records: &[(Level, String)]) -> Vec<&(Level, String)> {
    records
        .iter()
        .filter(|(_, message)| message.contains("API Configuration"))
        .collect()
}

#[test]
fn test_log_config_emits_summary_in_development() {
    let resolver = ConfigResolver::new(
        MapEnv::new()
            .with(MODE_KEY, "development")
            .with(API_BASE_URL_KEY, "https://dev.namhatta.example.org/"),
    );

    let records = capture(|| resolver.log_config());
    let emitted = config_records(&records);

    assert_eq!(emitted.len(), 1);
    let (level, message) = emitted[0];
    assert_eq!(*level, Level::Info);
    assert!(message.contains("\"baseUrl\":\"https://dev.namhatta.example.org/\""));
    assert!(message.contains("\"mode\":\"development\""));
    assert!(message.contains("\"isDev\":true"));
}

#[test]
fn test_log_config_uses_default_base_url() {
    let resolver = ConfigResolver::new(MapEnv::new().with(MODE_KEY, "development"));

    let records = capture(|| resolver.log_config());
    let emitted = config_records(&records);

    assert_eq!(emitted.len(), 1);
    assert!(emitted[0].1.contains("http://localhost:5000"));
}

#[test]
fn test_log_config_silent_outside_development() {
    for mode in ["production", "test", "", "Development"] {
        let resolver = ConfigResolver::new(MapEnv::new().with(MODE_KEY, mode));
        let records = capture(|| resolver.log_config());
        assert!(records.is_empty(), "mode {:?} produced {:?}", mode, records);
    }

    let resolver = ConfigResolver::new(MapEnv::new());
    assert!(capture(|| resolver.log_config()).is_empty());
}
