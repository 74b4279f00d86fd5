use serde_json::json;
use skello_extract::extractor::gemini::parse_reports;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[tokio::test]
async fn gemini_report_extraction_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let prompt = r#"Return ONLY a JSON array exactly in this format:
[
  {
    "storeName": "INTEGRATION",
    "weekStartDate": "2024-01-01",
    "dailyData": [
      { "date": "2024-01-01", "revenue": 100.0, "costs": 30.0 }
    ],
    "weeklyTotal": { "revenue": 100.0, "costs": 30.0 }
  }
]
"#;

    let body = json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "responseMimeType": "application/json"
        }
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}?key={}", GEMINI_API_URL, api_key))
        .json(&body)
        .send()
        .await
        .expect("request failed");

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        panic!("gemini api failed with status {}: {}", status, text);
    }

    let payload: serde_json::Value = response.json().await.expect("invalid json response");
    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .expect("response text missing");

    let reports = parse_reports(text).expect("failed to parse store reports");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].store_name.as_str(), "INTEGRATION");
    assert_eq!(reports[0].daily_data.len(), 1);
}
