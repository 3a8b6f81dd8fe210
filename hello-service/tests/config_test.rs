use hello_service::config::HelloConfig;
use serial_test::serial;
use service_core::config::Config as CoreConfig;

const APP_KEYS: [&str; 5] = [
    "APP_HOST",
    "APP_PORT",
    "APP_LOG_LEVEL",
    "APP_OTLP_ENDPOINT",
    "APP_METRICS_PORT",
];

#[test]
#[serial]
fn env_overrides_port_and_log_level() {
    std::env::set_var("APP_PORT", "9123");
    std::env::set_var("APP_LOG_LEVEL", "debug");

    let config = HelloConfig::load();

    std::env::remove_var("APP_PORT");
    std::env::remove_var("APP_LOG_LEVEL");

    let config = config.expect("Config should load from environment");
    assert_eq!(config.common.port, 9123);
    assert_eq!(config.common.log_level, "debug");
}

#[test]
#[serial]
fn defaults_apply_without_environment() {
    for key in APP_KEYS {
        std::env::remove_var(key);
    }

    let config = HelloConfig::load().expect("Config should load with defaults");
    assert_eq!(config.common, CoreConfig::default());
}
