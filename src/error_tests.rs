//! Tests for HovertipError type

use super::*;

#[test]
fn test_invalid_ref_target_display() {
    let error = HovertipError::InvalidRefTarget {
        target: "pinned ref".to_string(),
        value: "Rect { x: 0, y: 0, width: 4, height: 1 }".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid ref target"));
    assert!(msg.contains("pinned ref"));
    assert!(msg.contains("width: 4"));
}

#[test]
fn test_config_error_display() {
    let error = HovertipError::Config("expected a boolean".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid config"));
    assert!(msg.contains("expected a boolean"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = HovertipError::from(io_err);
    assert!(matches!(err, HovertipError::Io(_)));
    assert!(err.to_string().contains("test error"));
}
