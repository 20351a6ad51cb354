//! Unit tests for RendererConfig

use super::RendererConfig;

// ============================================================================
// CONFIG DEFAULTS
// ============================================================================

#[test]
fn test_default_config() {
    let config = RendererConfig::default();
    assert_eq!(config.app_name, "Ember Render Application");
    assert!(config.vsync);
    assert_eq!(config.enable_debug, cfg!(debug_assertions));
}

#[test]
fn test_config_field_overrides() {
    let config = RendererConfig {
        app_name: "Ember Triangle".to_string(),
        vsync: false,
        enable_debug: true,
    };
    assert_eq!(config.app_name, "Ember Triangle");
    assert!(!config.vsync);
    assert!(config.enable_debug);
}

#[test]
fn test_config_clone_is_independent() {
    let config = RendererConfig::default();
    let mut copy = config.clone();
    copy.enable_debug = !copy.enable_debug;
    assert_ne!(config.enable_debug, copy.enable_debug);
}
