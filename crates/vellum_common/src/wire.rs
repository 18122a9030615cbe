//! Wire types for the backend HTTP API.
//!
//! These mirror the JSON the document-QA backend speaks. Every response
//! carries a `success` flag; failure bodies replace the payload with an
//! `error` string, so all payload fields default to keep parsing lenient.

use serde::{Deserialize, Serialize};

/// Question mode sent with an ask request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AskMode {
    #[default]
    Normal,
    Analysis,
}

impl AskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AskMode::Normal => "normal",
            AskMode::Analysis => "analysis",
        }
    }
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub pdfs_loaded: usize,
    #[serde(default)]
    pub api_configured: bool,
}

impl HealthResponse {
    /// The backend reports exactly "healthy" when it is usable.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// One document in the backend's registry listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// File name, unique within the collection.
    pub name: String,
    /// Page count, informational only.
    #[serde(default)]
    pub pages: u32,
    /// Extracted text size in characters, informational only.
    #[serde(default)]
    pub size: Option<u64>,
}

/// `GET /api/pdfs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentListResponse {
    pub success: bool,
    #[serde(default)]
    pub pdfs: Vec<DocumentEntry>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/reload` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/ask` request body.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub mode: AskMode,
    pub selected_pdfs: Vec<String>,
}

/// `POST /api/ask` response.
///
/// The backend echoes `question` and `mode` back; `mode` may be a value the
/// client never sends (the backend answers greetings in a "casual" mode), so
/// it stays a plain string here.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Analysis flavor for `POST /api/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Connections,
    Insights,
    Themes,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Connections => "connections",
            AnalysisKind::Insights => "insights",
            AnalysisKind::Themes => "themes",
        }
    }
}

/// `POST /api/analyze` request body.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
}

/// `POST /api/analyze` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default)]
    pub analysis: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub documents_analyzed: usize,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AskMode::Normal).unwrap(), "\"normal\"");
        assert_eq!(
            serde_json::to_string(&AskMode::Analysis).unwrap(),
            "\"analysis\""
        );
    }

    #[test]
    fn test_ask_request_wire_shape() {
        let request = AskRequest {
            question: "What is the summary?".to_string(),
            mode: AskMode::Normal,
            selected_pdfs: vec!["report.pdf".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["question"], "What is the summary?");
        assert_eq!(json["mode"], "normal");
        assert_eq!(json["selected_pdfs"][0], "report.pdf");
    }

    #[test]
    fn test_document_list_parses_backend_shape() {
        let body = r#"{
            "success": true,
            "pdfs": [{"name": "report.pdf", "pages": 10, "size": 48213}],
            "count": 1
        }"#;
        let parsed: DocumentListResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.count, 1);
        assert_eq!(parsed.pdfs[0].name, "report.pdf");
        assert_eq!(parsed.pdfs[0].pages, 10);
        assert_eq!(parsed.pdfs[0].size, Some(48213));
    }

    #[test]
    fn test_failure_body_parses_without_payload() {
        let body = r#"{"success": false, "error": "No documents selected"}"#;
        let parsed: AskResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error.as_deref(), Some("No documents selected"));
        assert!(parsed.answer.is_empty());
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn test_health_status_must_be_exactly_healthy() {
        let healthy: HealthResponse =
            serde_json::from_str(r#"{"status": "healthy", "pdfs_loaded": 4}"#).unwrap();
        assert!(healthy.is_healthy());
        assert_eq!(healthy.pdfs_loaded, 4);

        let degraded: HealthResponse =
            serde_json::from_str(r#"{"status": "starting"}"#).unwrap();
        assert!(!degraded.is_healthy());
    }

    #[test]
    fn test_analyze_request_uses_type_field() {
        let request = AnalyzeRequest {
            kind: AnalysisKind::Connections,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "connections");
    }
}
