//! Tool discovery handler.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Response for the tools endpoint.
#[derive(Serialize)]
pub struct ToolsResponse {
    /// Available tool descriptors.
    pub tools: Vec<ToolDescriptor>,
}

/// Describes one invocable tool.
#[derive(Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// List the tools this server exposes.
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: vec![
            ToolDescriptor {
                name: "column_prediction",
                description: "Classify the semantic type of a column in a data file",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "file_path": {
                            "type": "string",
                            "description": "Path to the data file"
                        },
                        "column_name": {
                            "type": "string",
                            "description": "Name of the column to classify"
                        }
                    },
                    "required": ["file_path", "column_name"]
                }),
            },
            ToolDescriptor {
                name: "parser",
                description: "Parse Phone Number and Company Name columns from a data file",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "file_path": {
                            "type": "string",
                            "description": "Path to the input data file"
                        }
                    },
                    "required": ["file_path"]
                }),
            },
        ],
    })
}
