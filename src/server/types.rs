use crate::error::FieldIssue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PatternQuery {
    pub data: String,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssueBody>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FieldIssueBody {
    pub path: String,
    pub message: String,
}

impl From<FieldIssue> for FieldIssueBody {
    fn from(issue: FieldIssue) -> Self {
        Self {
            path: issue.path,
            message: issue.message,
        }
    }
}
