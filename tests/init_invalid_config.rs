use teardown_reactnative::common::config::{LOG_FILTER_KEY, LOG_FORMAT_KEY};
use teardown_reactnative::common::BridgeCode;
use teardown_reactnative::teardown_init;

// One test per binary: the steps share the process environment.
#[test]
fn config_errors_are_not_cached() {
    std::env::remove_var(LOG_FILTER_KEY);
    std::env::set_var(LOG_FORMAT_KEY, "xml");
    assert_eq!(teardown_init(), BridgeCode::InvalidConfig as u32);

    std::env::set_var(LOG_FORMAT_KEY, "text");
    std::env::set_var(LOG_FILTER_KEY, "teardown_reactnative=notalevel");
    assert_eq!(teardown_init(), BridgeCode::InvalidConfig as u32);
    assert!(!tracing::dispatcher::has_been_set());

    std::env::set_var(LOG_FILTER_KEY, "teardown_reactnative=debug");
    assert_eq!(teardown_init(), BridgeCode::Ok as u32);
    assert!(tracing::dispatcher::has_been_set());
}
