//! Unit tests for error.rs

use crate::error::{Error, Result};

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("sphere_radius must be positive".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Invalid config"));
    assert!(display.contains("sphere_radius must be positive"));
}

#[test]
fn test_asset_load_failed_display() {
    let err = Error::AssetLoadFailed("textures/px.png".to_string());
    assert_eq!(format!("{}", err), "Asset load failed: textures/px.png");
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("device lost".to_string());
    assert_eq!(format!("{}", err), "Backend error: device lost");
}

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidResource("mesh".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::InitializationFailed("no window".to_string()))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert_eq!(
        outer(),
        Err(Error::InitializationFailed("no window".to_string()))
    );
}

#[test]
fn test_flyover_err_builds_variant() {
    let err = crate::flyover_err!("test::error", InvalidConfig, "bad value {}", 42);
    assert_eq!(err, Error::InvalidConfig("bad value 42".to_string()));
}

#[test]
fn test_flyover_bail_returns_early() {
    fn check(value: i32) -> Result<i32> {
        if value < 0 {
            crate::flyover_bail!("test::error", InvalidResource, "negative: {}", value);
        }
        Ok(value)
    }

    assert_eq!(check(3), Ok(3));
    assert_eq!(check(-1), Err(Error::InvalidResource("negative: -1".to_string())));
}
