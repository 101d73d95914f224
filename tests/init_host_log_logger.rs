use teardown_reactnative::common::config::{LOG_FILTER_KEY, LOG_FORMAT_KEY};
use teardown_reactnative::common::BridgeCode;
use teardown_reactnative::teardown_init;

struct HostLogger;

impl log::Log for HostLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, _: &log::Record<'_>) {}

    fn flush(&self) {}
}

static HOST: HostLogger = HostLogger;

#[test]
fn host_log_logger_does_not_block_init() {
    std::env::remove_var(LOG_FILTER_KEY);
    std::env::remove_var(LOG_FORMAT_KEY);
    log::set_logger(&HOST).unwrap();
    log::set_max_level(log::LevelFilter::Info);

    assert_eq!(teardown_init(), BridgeCode::Ok as u32);
    assert!(tracing::dispatcher::has_been_set());
    assert_eq!(teardown_init(), BridgeCode::Ok as u32);
}
