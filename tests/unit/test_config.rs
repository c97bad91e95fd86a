//! Unit tests for the config module
//!
//! Tests cover:
//! - Loading from an explicit TOML file
//! - Error context for unreadable and malformed files
//! - Environment override
//! - Building buffers from config

use ringbuffer::config::{CAPACITY_ENV_VAR, DEFAULT_CAPACITY};
use ringbuffer::{RingBuffer, RingBufferConfig, RingBufferError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = RingBufferConfig::load(Some(path.to_str().unwrap())).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Failed to read config from"));
    assert!(msg.contains("absent.toml"));
}

#[test]
fn test_load_malformed_file_reports_parse_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "capacity = = 3").unwrap();
    let err = RingBufferConfig::load(Some(path.to_str().unwrap())).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to load config from"));
    assert!(chain.contains("Failed to parse config"));
}

// Every assertion that depends on RINGBUFFER_CAPACITY lives in this one test
// so parallel tests never observe a half-set environment.
#[test]
fn test_load_file_and_env_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ringbuffer.toml");
    fs::write(&path, "capacity = 12\n").unwrap();
    let path_str = path.to_str().unwrap();

    std::env::remove_var(CAPACITY_ENV_VAR);
    let config = RingBufferConfig::load(Some(path_str)).unwrap();
    assert_eq!(config.capacity, 12);

    std::env::set_var(CAPACITY_ENV_VAR, "3");
    let config = RingBufferConfig::load(Some(path_str)).unwrap();
    assert_eq!(config.capacity, 3);

    std::env::set_var(CAPACITY_ENV_VAR, "-1");
    let config = RingBufferConfig::load(Some(path_str)).unwrap();
    assert_eq!(
        config.build::<i32>().unwrap_err(),
        RingBufferError::InvalidCapacity
    );

    std::env::set_var(CAPACITY_ENV_VAR, "not-a-number");
    let config = RingBufferConfig::load(Some(path_str)).unwrap();
    assert_eq!(config.capacity, 12);

    std::env::remove_var(CAPACITY_ENV_VAR);
}

#[test]
fn test_empty_file_uses_default_capacity() {
    let config = RingBufferConfig::from_toml_str("").unwrap();
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
    let buf: RingBuffer<String> = config.build().unwrap();
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY as usize);
}

#[test]
fn test_from_config_builds_working_buffer() {
    let config = RingBufferConfig::from_toml_str("capacity = 2").unwrap();
    let buf = RingBuffer::from_config(&config).unwrap();
    buf.write_many([1.0f32, 2.0]).unwrap();
    buf.write(3.0);
    assert_eq!(buf.read(), vec![2.0, 3.0]);
}

#[test]
fn test_negative_capacity_in_file_is_invalid() {
    let config = RingBufferConfig::from_toml_str("capacity = -5").unwrap();
    assert_eq!(
        RingBuffer::<bool>::from_config(&config).unwrap_err(),
        RingBufferError::InvalidCapacity
    );
}
