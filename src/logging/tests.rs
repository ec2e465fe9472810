// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_rejects_out_of_range() {
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::try_from(7_u8).expect_err("7 is out of range");
    assert_eq!(
        err.to_string(),
        "invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_filters() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::INFO.to_filter_string(), "info");
    assert!(LogLevel::TRACE.to_filter_string().contains("turbolift_rs=trace"));
    assert_eq!(LogLevel::DUMP.to_filter_string(), "trace");
}

#[test]
fn test_log_config_defaults_and_setters() {
    let defaults = LogConfig::default();
    assert_eq!(defaults.console_level(), LogLevel::INFO);
    assert_eq!(defaults.file_level(), LogLevel::TRACE);
    assert!(defaults.log_file().is_none());

    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("run.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("run.log"));
}
