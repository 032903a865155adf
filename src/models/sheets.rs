use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub insert_dimension: InsertDimension,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDimension {
    pub range: DimensionRange,
    pub inherit_from_before: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: String,
    pub start_index: i64,
    pub end_index: i64,
}

impl Request {
    /// Inserts one blank row at `index` (0-based), pushing the rows below down.
    pub fn insert_row(sheet_id: i64, index: i64) -> Self {
        Request {
            insert_dimension: InsertDimension {
                range: DimensionRange {
                    sheet_id,
                    dimension: "ROWS".to_string(),
                    start_index: index,
                    end_index: index + 1,
                },
                inherit_from_before: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_row_serializes_to_sheets_shape() {
        let body = BatchUpdateRequest {
            requests: vec![Request::insert_row(0, 1)],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "requests": [{
                    "insertDimension": {
                        "range": {
                            "sheetId": 0,
                            "dimension": "ROWS",
                            "startIndex": 1,
                            "endIndex": 2
                        },
                        "inheritFromBefore": false
                    }
                }]
            })
        );
    }

    #[test]
    fn empty_range_has_no_values() {
        let range: ValueRange =
            serde_json::from_str(r#"{"range":"Sheet1!A2:B2","majorDimension":"ROWS"}"#).unwrap();
        assert!(range.values.is_empty());
        assert_eq!(range.range.as_deref(), Some("Sheet1!A2:B2"));
    }
}
