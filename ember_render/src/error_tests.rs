//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone,
//! std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_unsupported_attribute_display() {
    let err = Error::UnsupportedAttribute("Float32 x5".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Unsupported attribute"));
    assert!(display.contains("Float32 x5"));
}

#[test]
fn test_resource_allocation_display() {
    let err = Error::ResourceAllocation("vertex buffer".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Resource allocation failed"));
    assert!(display.contains("vertex buffer"));
}

#[test]
fn test_shader_compile_display() {
    let err = Error::ShaderCompile("fragment shader: syntax error".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader compilation failed"));
    assert!(display.contains("syntax error"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Window creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Window creation failed"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("context lost".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("context lost"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::ResourceAllocation("test".to_string());
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::UnsupportedAttribute("test".to_string());
    assert!(format!("{:?}", err1).contains("UnsupportedAttribute"));

    let err2 = Error::ResourceAllocation("test".to_string());
    assert!(format!("{:?}", err2).contains("ResourceAllocation"));

    let err3 = Error::ShaderCompile("test".to_string());
    assert!(format!("{:?}", err3).contains("ShaderCompile"));

    let err4 = Error::BackendError("test".to_string());
    assert!(format!("{:?}", err4).contains("BackendError"));
}

#[test]
fn test_error_clone() {
    let err = Error::ShaderCompile("link failed".to_string());
    let clone = err.clone();
    assert_eq!(format!("{}", err), format!("{}", clone));
}

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::BackendError("inner failure".to_string()))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    let err = outer().unwrap_err();
    assert!(matches!(err, Error::BackendError(_)));
}
