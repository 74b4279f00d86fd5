//! Gemini `generateContent` client.
//!
//! Request = fixed instruction + N inline images, response constrained to
//! JSON by `responseMimeType` + `responseSchema`.

use crate::error::{Result, SkelloError};
use crate::extractor::prompt::{response_schema, EXTRACTION_PROMPT};
use crate::extractor::types::StoreReport;
use crate::extractor::{ExtractionClient, ImagePayload};
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }

    fn build_request(images: &[ImagePayload]) -> GeminiRequest {
        let mut parts: Vec<Part> = vec![Part::Text {
            text: EXTRACTION_PROMPT.trim().to_string(),
        }];

        for image in images {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }

    async fn call(&self, request: &GeminiRequest) -> Result<String> {
        let response = self.client.post(self.endpoint()).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SkelloError::ApiCall(format!("status {}: {}", status, body)));
        }

        let payload: GeminiResponse = response.json().await?;
        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| SkelloError::ApiCall("empty response".into()))
    }
}

impl ExtractionClient for GeminiClient {
    async fn extract(&self, images: &[ImagePayload]) -> Result<Vec<StoreReport>> {
        if images.is_empty() {
            return Ok(vec![]);
        }

        let request = Self::build_request(images);
        let response_text = self.call(&request).await?;
        parse_reports(&response_text)
    }
}

/// Extract the JSON payload from a model response.
///
/// Priority: ```json fenced block, then the first raw `[...]` array.
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(SkelloError::ApiParse("no JSON array in response".into()))
}

/// Strict deserialization of the extracted JSON into store reports.
pub fn parse_reports(response: &str) -> Result<Vec<StoreReport>> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| SkelloError::ApiParse(format!("unexpected report shape: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"[
        {
            "storeName": "AEROPORT",
            "weekStartDate": "2024-01-01",
            "dailyData": [
                {"date": "2024-01-01", "revenue": 1910.26, "costs": 540.0}
            ],
            "weeklyTotal": {"revenue": 1910.26, "costs": 540.0}
        }
    ]"#;

    #[test]
    fn test_parse_reports_raw_json() {
        let reports = parse_reports(REPORT_JSON).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].store_name.as_str(), "AEROPORT");
        assert_eq!(reports[0].daily_data[0].revenue, 1910.26);
    }

    #[test]
    fn test_parse_reports_with_json_block() {
        let response = format!("Here is the data:\n```json\n{}\n```\n", REPORT_JSON);
        let reports = parse_reports(&response).unwrap();
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_parse_reports_wrong_shape_is_hard_failure() {
        let response = r#"[{"store": "AEROPORT"}]"#;
        let result = parse_reports(response);
        assert!(matches!(result, Err(SkelloError::ApiParse(_))));
    }

    #[test]
    fn test_extract_json_error_on_plain_text() {
        assert!(extract_json("no data here").is_err());
        assert!(extract_json("").is_err());
    }

    #[test]
    fn test_request_serializes_inline_images() {
        let images = vec![ImagePayload {
            mime_type: "image/png".into(),
            data: "aGVsbG8=".into(),
        }];
        let request = GeminiClient::build_request(&images);

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(json.contains("\"mime_type\":\"image/png\""));
        assert!(json.contains("\"data\":\"aGVsbG8=\""));
        // one text part + one image part
        assert_eq!(request.contents[0].parts.len(), 2);
    }

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "[]" }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].content.parts[0].text, "[]");
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_call() {
        // An unroutable key/model would fail if a request were issued.
        let client = GeminiClient::new("invalid-key", "no-such-model");
        let reports = client.extract(&[]).await.unwrap();
        assert!(reports.is_empty());
    }
}
