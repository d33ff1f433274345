//! Tabular dataset pages (`headers` + parallel `rows`, `types`, `titles`).

use serde_json::{json, Map, Value};

use crate::error::NormalizeError;

/// The dataset object: the API's `jsondata` member, or the response itself.
fn dataset(response: &Value) -> &Value {
    response.get("jsondata").unwrap_or(response)
}

fn headers(data: &Value) -> Result<Vec<&str>, NormalizeError> {
    let headers = data
        .get("headers")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("\"headers\" must be an array"))?;
    headers
        .iter()
        .map(|h| h.as_str().ok_or_else(|| invalid("every header must be a string")))
        .collect()
}

/// One record per row, keyed by header. Short rows are padded with `null`.
pub(super) fn rows_to_records(response: &Value) -> Result<Value, NormalizeError> {
    let data = dataset(response);
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("\"rows\" must be an array"))?;
    let headers = headers(data)?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .as_array()
                .ok_or_else(|| invalid(&format!("row {i} is not an array")))?;
            if cells.len() > headers.len() {
                return Err(invalid(&format!(
                    "row {i} has {} cells but there are {} headers",
                    cells.len(),
                    headers.len()
                )));
            }
            let record: Map<String, Value> = headers
                .iter()
                .enumerate()
                .map(|(j, h)| (h.to_string(), cells.get(j).cloned().unwrap_or(Value::Null)))
                .collect();
            Ok(Value::Object(record))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Array(records))
}

/// `{license, info, count, types, titles}` summary of a dataset.
pub(super) fn dataset_info(response: &Value) -> Result<Value, NormalizeError> {
    let data = dataset(response);
    let headers = headers(data)?;
    let count = match data.get("rows") {
        None => 0,
        Some(rows) => rows
            .as_array()
            .map(Vec::len)
            .ok_or_else(|| invalid("\"rows\" must be an array"))?,
    };

    Ok(json!({
        "license": data.get("license").cloned().unwrap_or(Value::Null),
        "info": data.get("info").cloned().unwrap_or(Value::Null),
        "count": count,
        "types": zip_headers(&headers, data.get("types"), "types")?,
        "titles": zip_headers(&headers, data.get("titles"), "titles")?,
    }))
}

fn zip_headers(
    headers: &[&str],
    values: Option<&Value>,
    name: &str,
) -> Result<Value, NormalizeError> {
    let values = match values {
        None => return Ok(Value::Object(Map::new())),
        Some(v) => v
            .as_array()
            .ok_or_else(|| invalid(&format!("\"{name}\" must be an array")))?,
    };
    let map = headers
        .iter()
        .zip(values)
        .map(|(h, v)| (h.to_string(), v.clone()))
        .collect();
    Ok(Value::Object(map))
}

fn invalid(reason: &str) -> NormalizeError {
    NormalizeError::InvalidTabularShape(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_rows_with_headers() {
        let data = json!({"headers": ["a", "b"], "rows": [[1, 2], [3, 4]]});
        assert_eq!(
            rows_to_records(&data).unwrap(),
            json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}])
        );
    }

    #[test]
    fn reads_jsondata_member() {
        let response = json!({"jsondata": {"headers": ["x"], "rows": [["y"]]}});
        assert_eq!(rows_to_records(&response).unwrap(), json!([{"x": "y"}]));
    }

    #[test]
    fn pads_short_rows() {
        let data = json!({"headers": ["a", "b"], "rows": [[1]]});
        assert_eq!(rows_to_records(&data).unwrap(), json!([{"a": 1, "b": null}]));
    }

    #[test]
    fn rejects_malformed_shapes() {
        for data in [
            json!({"headers": ["a"], "rows": {"0": [1]}}),
            json!({"headers": ["a"]}),
            json!({"headers": "a", "rows": [[1]]}),
            json!({"headers": [1], "rows": [[1]]}),
            json!({"headers": ["a"], "rows": [1]}),
            json!({"headers": ["a"], "rows": [[1, 2]]}),
        ] {
            assert!(
                matches!(rows_to_records(&data), Err(NormalizeError::InvalidTabularShape(_))),
                "{data} should be rejected"
            );
        }
    }

    #[test]
    fn info_summarizes_dataset() {
        let data = json!({
            "license": "CC0-1.0",
            "info": {"en": "Populations"},
            "headers": ["year", "pop"],
            "types": ["number", "number"],
            "titles": [{"en": "Year"}, {"en": "Population"}],
            "rows": [[2000, 1], [2001, 2], [2002, 3]]
        });
        assert_eq!(
            dataset_info(&data).unwrap(),
            json!({
                "license": "CC0-1.0",
                "info": {"en": "Populations"},
                "count": 3,
                "types": {"year": "number", "pop": "number"},
                "titles": {"year": {"en": "Year"}, "pop": {"en": "Population"}}
            })
        );
    }

    #[test]
    fn info_without_rows_counts_zero() {
        let data = json!({"headers": ["a"]});
        let info = dataset_info(&data).unwrap();
        assert_eq!(info["count"], 0);
        assert_eq!(info["types"], json!({}));
        assert_eq!(info["license"], Value::Null);
    }
}
