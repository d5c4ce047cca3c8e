//! Tool argument types for MCP server
//!
//! One statically typed struct per tool. The structs drive the advertised
//! `inputSchema` (schemars) and the post-parse checks (validator); the
//! [`ToolArgs::PARAMS`] table drives the shape check that runs before serde
//! sees the arguments, so every problem is reported in a single error.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use opm_domain::error::{Error, Result};

/// Arguments for the octoperf_run_test tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for starting a performance test")]
pub struct RunTestArgs {
    /// Runtime (scenario) to start
    #[validate(
        length(min = 1, message = "parameter 'runtimeId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'runtimeId' must not be '.' or '..'"
        )
    )]
    #[schemars(description = "The runtime Id of the test to run")]
    pub runtime_id: String,
}

/// Arguments for the octoperf_status tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for checking the progress of a test")]
pub struct GetTestStatusArgs {
    /// Bench result to poll
    #[validate(
        length(min = 1, message = "parameter 'benchResultId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'benchResultId' must not be '.' or '..'"
        )
    )]
    #[schemars(description = "The bench result Id of the test")]
    pub bench_result_id: String,
}

/// Arguments for the octoperf_report tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for retrieving a test report")]
pub struct GetReportDetailsArgs {
    /// Report to fetch
    #[validate(
        length(min = 1, message = "parameter 'reportId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'reportId' must not be '.' or '..'"
        )
    )]
    #[schemars(description = "The Id of the report to retrieve")]
    pub report_id: String,
}

/// Arguments for the octoperf_get_report_metrics tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for retrieving metrics of a test")]
pub struct GetMetricDetailArgs {
    /// Bench result the metrics belong to
    #[validate(
        length(min = 1, message = "parameter 'benchResultId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'benchResultId' must not be '.' or '..'"
        )
    )]
    #[schemars(description = "The bench result Id of the test")]
    pub bench_result_id: String,
    /// Metric ids, order preserved in the summary request
    #[validate(length(min = 1, message = "parameter 'metricIds' must list at least one metric"))]
    #[schemars(
        description = "Metric Ids to retrieve (e.g. RESPONSE_TIME_AVG, LATENCY_STD, \
                       RESPONSE_TIME_PERCENTILE_90, RESPONSE_TIME_PERCENTILE_95, HITS_TOTAL, \
                       ERRORS_TOTAL, ERRORS_PERCENT, THROUGHPUT_RATE, HITS_RATE)"
    )]
    pub metric_ids: Vec<String>,
}

/// Arguments for the octoperf_get_current_user_workspaces tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "This tool takes no parameters")]
pub struct GetCurrentUserWorkspacesArgs {}

/// Arguments for the get_project_by_workspace_id tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for listing the projects of a workspace")]
pub struct GetProjectsByWorkspaceIdArgs {
    /// Workspace to list
    #[validate(
        length(min = 1, message = "parameter 'workspaceId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'workspaceId' must not be '.' or '..'"
        )
    )]
    #[schemars(description = "The workspace Id")]
    pub workspace_id: String,
}

/// Arguments for the get_runtime_id tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for listing the runtimes of a project")]
pub struct GetRuntimeIdsArgs {
    /// Project to list; falls back to the configured default project
    #[validate(
        length(min = 1, message = "parameter 'projectId' must not be empty"),
        custom(
            function = "validate_path_segment",
            message = "parameter 'projectId' must not be '.' or '..'"
        )
    )]
    #[schemars(
        description = "The project Id. Defaults to the server's configured project when omitted"
    )]
    pub project_id: Option<String>,
}

/// Wire shape of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string
    String,
    /// JSON array whose items are all strings
    StringArray,
}

impl ParamKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::StringArray => "an array of strings",
        }
    }

    /// Value that passes every value rule, used in place of a rejected one
    fn stand_in(self) -> Value {
        match self {
            Self::String => Value::String("_".to_string()),
            Self::StringArray => Value::Array(vec![Value::String("_".to_string())]),
        }
    }
}

/// One row of a tool's parameter table
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Wire name (camelCase)
    pub name: &'static str,
    /// Rust field name
    pub field: &'static str,
    /// Expected JSON shape
    pub kind: ParamKind,
    /// Whether the caller must supply it
    pub required: bool,
}

impl ParamSpec {
    const fn required(name: &'static str, field: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            field,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, field: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            field,
            kind,
            required: false,
        }
    }

    fn matches_field(&self, key: &str) -> bool {
        self.name == key || self.field == key
    }
}

/// Typed tool arguments with a declared parameter table
pub trait ToolArgs: DeserializeOwned + Validate {
    /// Declared parameters, in the order issues are reported
    const PARAMS: &'static [ParamSpec];
}

impl ToolArgs for RunTestArgs {
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::required(
        "runtimeId",
        "runtime_id",
        ParamKind::String,
    )];
}

impl ToolArgs for GetTestStatusArgs {
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::required(
        "benchResultId",
        "bench_result_id",
        ParamKind::String,
    )];
}

impl ToolArgs for GetReportDetailsArgs {
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::required(
        "reportId",
        "report_id",
        ParamKind::String,
    )];
}

impl ToolArgs for GetMetricDetailArgs {
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("benchResultId", "bench_result_id", ParamKind::String),
        ParamSpec::required("metricIds", "metric_ids", ParamKind::StringArray),
    ];
}

impl ToolArgs for GetCurrentUserWorkspacesArgs {
    const PARAMS: &'static [ParamSpec] = &[];
}

impl ToolArgs for GetProjectsByWorkspaceIdArgs {
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::required(
        "workspaceId",
        "workspace_id",
        ParamKind::String,
    )];
}

impl ToolArgs for GetRuntimeIdsArgs {
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::optional(
        "projectId",
        "project_id",
        ParamKind::String,
    )];
}

/// Extract and validate typed arguments from an untyped argument bag
///
/// Null values count as absent and undeclared keys are dropped. Shape
/// problems and value problems are collected in one pass: parameters
/// rejected for their shape are replaced by a valid stand-in so the validator
/// still checks every other value.
///
/// # Errors
/// [`Error::Validation`] listing every issue found, in declaration order.
pub fn parse_tool_args<T: ToolArgs>(arguments: Option<&JsonObject>) -> Result<T> {
    let mut issues: Vec<(usize, String)> = Vec::new();
    let mut candidate = JsonObject::new();

    for (position, param) in T::PARAMS.iter().enumerate() {
        match arguments.and_then(|args| args.get(param.name)) {
            Some(value) if !value.is_null() && param.kind.accepts(value) => {
                candidate.insert(param.name.to_string(), value.clone());
                continue;
            }
            None | Some(Value::Null) if !param.required => continue,
            None | Some(Value::Null) => issues.push((
                position,
                format!("missing required parameter '{}'", param.name),
            )),
            Some(_) => issues.push((
                position,
                format!("parameter '{}' must be {}", param.name, param.kind.describe()),
            )),
        }
        if param.required {
            candidate.insert(param.name.to_string(), param.kind.stand_in());
        }
    }

    let args: T = serde_json::from_value(Value::Object(candidate))
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Err(errors) = args.validate() {
        issues.extend(collect_issues::<T>(&errors));
    }

    if issues.is_empty() {
        Ok(args)
    } else {
        issues.sort_by_key(|(position, _)| *position);
        Err(Error::validation(
            issues.into_iter().map(|(_, message)| message).collect(),
        ))
    }
}

/// Reject identifiers that URL resolution would drop from a path
fn validate_path_segment(value: &str) -> std::result::Result<(), ValidationError> {
    if value == "." || value == ".." {
        return Err(ValidationError::new("dot_segment"));
    }
    Ok(())
}

/// Flatten validator output, keyed by declaration position
fn collect_issues<T: ToolArgs>(errors: &ValidationErrors) -> Vec<(usize, String)> {
    let mut fields: Vec<(usize, String, String)> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let position = T::PARAMS
            .iter()
            .position(|param| param.matches_field(&field))
            .unwrap_or(T::PARAMS.len());
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("parameter '{field}' is invalid ({})", error.code));
            fields.push((position, field.clone(), message));
        }
    }
    fields.sort();
    fields
        .into_iter()
        .map(|(position, _, message)| (position, message))
        .collect()
}
