//! Extraction instruction and response schema sent to Gemini.

use serde_json::{json, Value};

/// Fixed instruction for the weekly-report screenshots. The service reads
/// only the "Réalisé" (actual) section and normalizes numbers and dates.
pub const EXTRACTION_PROMPT: &str = r#"
You are an expert data extraction assistant. Your task is to analyze the provided images from the 'Skello' business management tool and extract specific performance indicators.

The images show a weekly performance report for different stores. For each image, please extract the following information from the 'Réalisé' (Actual) data view:
1.  The name of the store (e.g., AEROPORT, CONFLUENCE).
2.  The full date for each of the 7 days of the week. The year is visible in the date range selector at the top.
3.  The daily values for "Chiffre d'affaires HT" (revenue).
4.  The daily values for "MS chargée" (salary costs).
5.  The 'Total' column values for both "Chiffre d'affaires HT" and "MS chargée".

Please provide the extracted data in a single JSON array that conforms to the provided schema. Each object in the array should represent one store from one image.

Important Rules:
- Extract data ONLY from the "Réalisé" (Actual) section, not "Prévisionnel" (Forecast).
- Parse numbers with spaces as thousand separators (e.g., '1 910.26 €') into floating-point numbers (e.g., 1910.26).
- The currency is Euro (€), but you should only return the numeric value.
- Format all dates as 'YYYY-MM-DD'. French month names are used (e.g., janv., févr., mars, avr., mai, juin, juil., août, sept., oct., nov., déc.).
- Ensure there are exactly 7 items in the 'dailyData' array, one for each day of the week shown.
"#;

/// Response schema constraining the output to a StoreReport array.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "storeName": {
                    "type": "STRING",
                    "description": "The name of the store (e.g., AEROPORT, CONFLUENCE)."
                },
                "weekStartDate": {
                    "type": "STRING",
                    "description": "The date of the first day of the week in YYYY-MM-DD format."
                },
                "dailyData": {
                    "type": "ARRAY",
                    "description": "An array of 7 objects, one for each day of the week.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "date": {
                                "type": "STRING",
                                "description": "The specific date in YYYY-MM-DD format."
                            },
                            "revenue": {
                                "type": "NUMBER",
                                "description": "The value for 'Chiffre d'affaires HT' for that day."
                            },
                            "costs": {
                                "type": "NUMBER",
                                "description": "The value for 'MS chargée' for that day."
                            }
                        },
                        "required": ["date", "revenue", "costs"]
                    }
                },
                "weeklyTotal": {
                    "type": "OBJECT",
                    "description": "The total values for the week.",
                    "properties": {
                        "revenue": {
                            "type": "NUMBER",
                            "description": "The total 'Chiffre d'affaires HT'."
                        },
                        "costs": {
                            "type": "NUMBER",
                            "description": "The total 'MS chargée'."
                        }
                    },
                    "required": ["revenue", "costs"]
                }
            },
            "required": ["storeName", "weekStartDate", "dailyData", "weeklyTotal"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_targets_actuals_only() {
        assert!(EXTRACTION_PROMPT.contains("Réalisé"));
        assert!(EXTRACTION_PROMPT.contains("Prévisionnel"));
        assert!(EXTRACTION_PROMPT.contains("YYYY-MM-DD"));
        assert!(EXTRACTION_PROMPT.contains("1 910.26 €"));
    }

    #[test]
    fn test_response_schema_shape() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");

        let props = &schema["items"]["properties"];
        for field in ["storeName", "weekStartDate", "dailyData", "weeklyTotal"] {
            assert!(props.get(field).is_some(), "missing field {field}");
        }

        let daily = &props["dailyData"]["items"];
        assert_eq!(daily["required"], json!(["date", "revenue", "costs"]));
    }
}
