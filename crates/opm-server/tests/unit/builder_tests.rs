//! Tests for McpServerBuilder

use opm_server::builder::{BuilderError, McpServerBuilder};
use std::sync::Arc;

use crate::test_utils::stub_api::StubOctoPerfApi;

#[test]
fn test_builder_with_api() {
    let api = Arc::new(StubOctoPerfApi::responding("{}"));

    let result = McpServerBuilder::new().with_api(api).build();

    assert!(result.is_ok());
}

#[test]
fn test_builder_missing_api() {
    let result = McpServerBuilder::new().build();

    match result {
        Err(BuilderError::MissingDependency(dep)) => {
            assert_eq!(dep, "OctoPerf API client");
        }
        _ => panic!("Expected MissingDependency error"),
    }
}

#[test]
fn test_builder_keeps_default_project() {
    let api = Arc::new(StubOctoPerfApi::responding("{}"));

    let server = McpServerBuilder::new()
        .with_api(api)
        .with_default_project_id(Some("project-9".to_string()))
        .build()
        .expect("server builds");

    assert_eq!(
        server.handlers().get_runtime_ids.default_project_id(),
        Some("project-9")
    );
}

#[test]
fn test_blank_default_project_is_ignored() {
    let api = Arc::new(StubOctoPerfApi::responding("{}"));

    let server = McpServerBuilder::new()
        .with_api(api)
        .with_default_project_id(Some("  ".to_string()))
        .build()
        .expect("server builds");

    assert_eq!(server.handlers().get_runtime_ids.default_project_id(), None);
}
