use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level JSON error object returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Contents of the `error` key of an [`ErrorEnvelope`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// HTTP status code, always equal to the response status
    pub code: u16,
    /// Human-readable error message
    pub message: String,
    /// Categorical error tag (e.g. `ApiException`, `SchemaFieldsException`)
    pub error_type: String,
    /// Optional free-form reason, omitted when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Structured sub-errors, omitted when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SubError>,
}

/// One structured validation failure within an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubError {
    /// Field name
    pub location: String,
    /// Request part the field belongs to (`query`, `json`, `headers`, ...)
    pub location_type: String,
    /// One message or a list of messages, passed through as-is
    pub messages: Value,
}

impl SubError {
    pub fn new(location: impl Into<String>, location_type: impl Into<String>, messages: impl Into<Value>) -> Self {
        Self {
            location: location.into(),
            location_type: location_type.into(),
            messages: messages.into(),
        }
    }
}

/// JSON schema describing the error envelope
///
/// Not used when rendering errors; published for API documentation.
pub fn error_schema() -> Value {
    schemars::schema_for!(ErrorEnvelope).to_value()
}
