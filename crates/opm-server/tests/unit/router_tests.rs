//! Tool Router Tests
//!
//! Dispatch through the router against a call-counting stub of the API port.

use std::sync::Arc;
use std::time::Duration;

use opm_server::tools::dispatch_tool_call;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::test_utils::stub_api::{RecordedCall, StubBehavior, StubOctoPerfApi};
use crate::test_utils::test_fixtures::{args, extract_text_content, handlers_with, is_error};

// =============================================================================
// VALIDATION - no remote call on bad arguments
// =============================================================================

#[tokio::test]
async fn test_missing_parameter_makes_zero_calls() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    let cases = [
        "octoperf_run_test",
        "octoperf_status",
        "octoperf_report",
        "octoperf_get_report_metrics",
        "get_project_by_workspace_id",
    ];
    for tool in cases {
        let result = dispatch_tool_call(
            tool,
            Some(&args(json!({}))),
            &handlers,
            &CancellationToken::new(),
        )
        .await
        .expect("validation failure is a tool result");

        assert!(is_error(&result), "{tool} should reject empty arguments");
        assert!(
            extract_text_content(&result.content).contains("missing required parameter"),
            "{tool} should name the missing parameter"
        );
    }

    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_metrics_validation_names_every_problem() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_get_report_metrics",
        None,
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    let text = extract_text_content(&result.content);
    assert!(is_error(&result));
    assert!(text.contains("benchResultId"), "got: {text}");
    assert!(text.contains("metricIds"), "got: {text}");

    let result = dispatch_tool_call(
        "octoperf_get_report_metrics",
        Some(&args(json!({"benchResultId": ""}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    let text = extract_text_content(&result.content);
    assert!(is_error(&result));
    assert!(
        text.contains("parameter 'benchResultId' must not be empty"),
        "got: {text}"
    );
    assert!(
        text.contains("missing required parameter 'metricIds'"),
        "got: {text}"
    );
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_dot_segment_id_makes_zero_calls() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_run_test",
        Some(&args(json!({"runtimeId": ".."}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    let text = extract_text_content(&result.content);
    assert!(is_error(&result));
    assert!(text.contains("runtimeId"), "got: {text}");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_tool_is_protocol_error() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_delete_everything",
        None,
        &handlers,
        &CancellationToken::new(),
    )
    .await;

    let error = result.expect_err("unknown tool must be a protocol error");
    assert!(format!("{error:?}").contains("Unknown tool"));
    assert_eq!(stub.call_count(), 0);
}

// =============================================================================
// SUCCESS ENVELOPES
// =============================================================================

#[tokio::test]
async fn test_run_test_envelope() {
    let stub = Arc::new(StubOctoPerfApi::responding(r#"{"id":"xyz"}"#));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_run_test",
        Some(&args(json!({"runtimeId": "abc"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert!(!is_error(&result));
    assert_eq!(
        extract_text_content(&result.content),
        r#"{"status":"test_started","response":"{\"id\":\"xyz\"}"}"#
    );
    assert_eq!(
        stub.calls(),
        vec![RecordedCall {
            operation: "run_test",
            args: vec!["abc".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_operation_name_alias_routes() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "RunTest",
        Some(&args(json!({"runtimeId": "abc"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("alias is accepted");

    assert!(!is_error(&result));
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_body_passed_through_verbatim() {
    let body = "  {\"progress\": 12.5, \"unicode\": \"\u{e9}\"}\n";
    let stub = Arc::new(StubOctoPerfApi::responding(body));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_status",
        Some(&args(json!({"benchResultId": "bench-1"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    let envelope: serde_json::Value =
        serde_json::from_str(&extract_text_content(&result.content)).expect("envelope is JSON");
    assert_eq!(envelope["status"], "retrieved");
    assert_eq!(envelope["response"], body);
}

#[tokio::test]
async fn test_status_tags_per_tool() {
    let stub = Arc::new(StubOctoPerfApi::responding("[]"));
    let handlers = handlers_with(&stub, None);

    let cases = [
        ("octoperf_report", json!({"reportId": "r-1"}), "report_retrieved"),
        (
            "octoperf_get_report_metrics",
            json!({"benchResultId": "b-1", "metricIds": ["HITS_TOTAL"]}),
            "metrics_retrieved",
        ),
        ("octoperf_get_current_user_workspaces", json!({}), "retrieved"),
    ];
    for (tool, arguments, status) in cases {
        let result = dispatch_tool_call(
            tool,
            Some(&args(arguments)),
            &handlers,
            &CancellationToken::new(),
        )
        .await
        .expect("tool result");

        let envelope: serde_json::Value =
            serde_json::from_str(&extract_text_content(&result.content)).expect("JSON");
        assert_eq!(envelope["status"], status, "{tool}");
        assert_eq!(envelope["response"], "[]", "{tool}");
    }
}

#[tokio::test]
async fn test_metric_ids_forwarded_in_order() {
    let stub = Arc::new(StubOctoPerfApi::responding("{}"));
    let handlers = handlers_with(&stub, None);

    dispatch_tool_call(
        "octoperf_get_report_metrics",
        Some(&args(json!({
            "benchResultId": "bench-1",
            "metricIds": ["RESPONSE_TIME_AVG", "HITS_TOTAL", "UNKNOWN_ID"]
        }))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert_eq!(
        stub.last_call(),
        Some(RecordedCall {
            operation: "get_metric_detail",
            args: vec![
                "bench-1".to_string(),
                "RESPONSE_TIME_AVG".to_string(),
                "HITS_TOTAL".to_string(),
                "UNKNOWN_ID".to_string(),
            ],
        })
    );
}

#[tokio::test]
async fn test_workspace_id_echoed() {
    let stub = Arc::new(StubOctoPerfApi::responding("[]"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "get_project_by_workspace_id",
        Some(&args(json!({"workspaceId": "ws-1"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert_eq!(
        extract_text_content(&result.content),
        r#"{"status":"retrieved","workspaceId":"ws-1","response":"[]"}"#
    );
}

#[tokio::test]
async fn test_identical_calls_give_identical_envelopes() {
    let stub = Arc::new(StubOctoPerfApi::responding(r#"{"a":1,"b":[1,2]}"#));
    let handlers = handlers_with(&stub, None);
    let arguments = args(json!({"projectId": "p-1"}));

    let first = dispatch_tool_call(
        "get_runtime_id",
        Some(&arguments),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");
    let second = dispatch_tool_call(
        "get_runtime_id",
        Some(&arguments),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert_eq!(
        extract_text_content(&first.content),
        extract_text_content(&second.content)
    );
    assert_eq!(stub.call_count(), 2);
}

// =============================================================================
// DEFAULT PROJECT
// =============================================================================

#[tokio::test]
async fn test_runtime_ids_use_default_project() {
    let stub = Arc::new(StubOctoPerfApi::responding("[]"));
    let handlers = handlers_with(&stub, Some("project-default"));

    let result = dispatch_tool_call("get_runtime_id", None, &handlers, &CancellationToken::new())
        .await
        .expect("tool result");

    assert_eq!(
        extract_text_content(&result.content),
        r#"{"status":"retrieved","projectId":"project-default","response":"[]"}"#
    );
    assert_eq!(
        stub.last_call().map(|call| call.args),
        Some(vec!["project-default".to_string()])
    );
}

#[tokio::test]
async fn test_explicit_project_overrides_default() {
    let stub = Arc::new(StubOctoPerfApi::responding("[]"));
    let handlers = handlers_with(&stub, Some("project-default"));

    dispatch_tool_call(
        "get_runtime_id",
        Some(&args(json!({"projectId": "project-explicit"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert_eq!(
        stub.last_call().map(|call| call.args),
        Some(vec!["project-explicit".to_string()])
    );
}

#[tokio::test]
async fn test_runtime_ids_without_any_project_rejected() {
    let stub = Arc::new(StubOctoPerfApi::responding("[]"));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call("get_runtime_id", None, &handlers, &CancellationToken::new())
        .await
        .expect("tool result");

    assert!(is_error(&result));
    assert!(extract_text_content(&result.content).contains("projectId"));
    assert_eq!(stub.call_count(), 0);
}

// =============================================================================
// FAILURES
// =============================================================================

#[tokio::test]
async fn test_remote_error_carries_status_and_body() {
    let stub = Arc::new(StubOctoPerfApi::failing(404, r#"{"message":"no such report"}"#));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_report",
        Some(&args(json!({"reportId": "r-404"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("remote failure is a tool result");

    let text = extract_text_content(&result.content);
    assert!(is_error(&result));
    assert!(text.starts_with("Error retrieving report: "), "got: {text}");
    assert!(text.contains("404"), "got: {text}");
    assert!(text.contains(r#"{"message":"no such report"}"#), "got: {text}");
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_error_prefixes_name_the_identifier() {
    let stub = Arc::new(StubOctoPerfApi::failing(500, "oops"));
    let handlers = handlers_with(&stub, None);

    let projects = dispatch_tool_call(
        "get_project_by_workspace_id",
        Some(&args(json!({"workspaceId": "ws-7"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");
    assert!(
        extract_text_content(&projects.content)
            .starts_with("Error retrieving projects for workspace ws-7: ")
    );

    let runtimes = dispatch_tool_call(
        "get_runtime_id",
        Some(&args(json!({"projectId": "p-7"}))),
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");
    assert!(
        extract_text_content(&runtimes.content)
            .starts_with("Error retrieving Runtime IDs for project p-7: ")
    );
}

#[tokio::test]
async fn test_transport_error_is_tool_error() {
    let stub = Arc::new(StubOctoPerfApi::new(StubBehavior::Unreachable));
    let handlers = handlers_with(&stub, None);

    let result = dispatch_tool_call(
        "octoperf_get_current_user_workspaces",
        None,
        &handlers,
        &CancellationToken::new(),
    )
    .await
    .expect("tool result");

    assert!(is_error(&result));
    assert_eq!(
        extract_text_content(&result.content),
        "Error retrieving user workspaces: Transport error: connection refused"
    );
}

#[tokio::test]
async fn test_cancellation_reaches_the_port() {
    let stub = Arc::new(StubOctoPerfApi::new(StubBehavior::WaitForCancellation));
    let handlers = handlers_with(&stub, None);
    let ct = CancellationToken::new();

    let canceller = ct.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let arguments = args(json!({"benchResultId": "bench-1"}));
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        dispatch_tool_call("octoperf_status", Some(&arguments), &handlers, &ct),
    )
    .await
    .expect("cancelled call returns promptly")
    .expect("tool result");

    assert!(stub.cancellation_observed());
    assert!(is_error(&result));
    let text = extract_text_content(&result.content);
    assert!(text.starts_with("Error checking status: Transport error"), "got: {text}");
}
