use hexpick_core::config::{PickerConfig, ViewportConfig};
use hexpick_core::PickerError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_defaults() {
    let config = PickerConfig::default();
    assert_eq!(config.viewport.min_scale, 0.1);
    assert_eq!(config.viewport.max_scale, 5.0);
    assert_eq!(config.viewport.button_zoom_factor, 1.2);
    assert_eq!(config.viewport.wheel_zoom_in, 1.1);
    assert_eq!(config.viewport.wheel_zoom_out, 0.9);
    assert_eq!(config.sampler.radius, 1);
    assert_eq!(config.magnifier.size, 15);
    assert_eq!(config.magnifier.zoom, 10);
    assert_eq!(config.magnifier.offset, [20.0, -75.0]);
    assert_eq!(config.status.success_timeout_ms, 3000);
    assert!(config.validate().is_ok());
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip() {
    let mut config = PickerConfig::default();
    config.viewport.max_scale = 8.0;
    config.sampler.radius = 2;
    config.magnifier.offset = [10.0, 10.0];

    let text = toml::to_string_pretty(&config).unwrap();
    let back: PickerConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: PickerConfig = toml::from_str("[viewport]\nmax_scale = 8.0\n").unwrap();
    assert_eq!(config.viewport.max_scale, 8.0);
    assert_eq!(config.viewport.min_scale, 0.1);
    assert_eq!(config.sampler.radius, 1);
    assert_eq!(config.magnifier.size, 15);
}

#[test]
fn test_empty_toml_is_default() {
    let config: PickerConfig = toml::from_str("").unwrap();
    assert_eq!(config, PickerConfig::default());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn rejected(config: &PickerConfig) -> bool {
    matches!(config.validate(), Err(PickerError::InvalidConfig(_)))
}

#[test]
fn test_validate_zoom_bounds() {
    let mut config = PickerConfig::default();
    config.viewport.min_scale = 0.0;
    assert!(rejected(&config));

    let mut config = PickerConfig::default();
    config.viewport = ViewportConfig {
        min_scale: 3.0,
        max_scale: 2.0,
        ..ViewportConfig::default()
    };
    assert!(rejected(&config));
}

#[test]
fn test_validate_zoom_factors() {
    let mut config = PickerConfig::default();
    config.viewport.button_zoom_factor = 1.0;
    assert!(rejected(&config));

    let mut config = PickerConfig::default();
    config.viewport.wheel_zoom_in = 0.9;
    assert!(rejected(&config));

    let mut config = PickerConfig::default();
    config.viewport.wheel_zoom_out = 1.1;
    assert!(rejected(&config));
}

#[test]
fn test_validate_magnifier() {
    let mut config = PickerConfig::default();
    config.magnifier.size = 16;
    assert!(rejected(&config));

    let mut config = PickerConfig::default();
    config.magnifier.zoom = 0;
    assert!(rejected(&config));

    let mut config = PickerConfig::default();
    config.sampler.radius = 8;
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid config: sample window 17x17 does not fit the 15x15 magnifier"
    );
}
