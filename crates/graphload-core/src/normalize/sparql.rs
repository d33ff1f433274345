//! SPARQL JSON results → flat records.

use serde_json::{Map, Number, Value};

use crate::error::NormalizeError;

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Turns one typed SPARQL binding value
/// (`{"type": "literal", "value": "42", "datatype": "...#integer"}`) into a
/// plain JSON value.
pub trait ValueDecoder {
    fn decode(&self, typed: &Value) -> Value;
}

/// Default decoder: XSD numbers and booleans become JSON numbers and bools;
/// everything else becomes its lexical string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedValueDecoder;

impl ValueDecoder for TypedValueDecoder {
    fn decode(&self, typed: &Value) -> Value {
        let Some(raw) = typed.get("value").and_then(Value::as_str) else {
            return Value::Null;
        };
        let datatype = typed
            .get("datatype")
            .and_then(Value::as_str)
            .and_then(|d| d.strip_prefix(XSD));
        let is_literal = typed.get("type").and_then(Value::as_str) != Some("uri");

        match datatype {
            Some(t) if is_literal && is_integer_type(t) => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            Some("decimal" | "double" | "float") if is_literal => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            Some("boolean") if is_literal => match raw.trim() {
                "true" | "1" => Value::Bool(true),
                "false" | "0" => Value::Bool(false),
                _ => Value::String(raw.to_string()),
            },
            _ => Value::String(raw.to_string()),
        }
    }
}

fn is_integer_type(t: &str) -> bool {
    matches!(
        t,
        "integer"
            | "int"
            | "long"
            | "short"
            | "byte"
            | "nonNegativeInteger"
            | "nonPositiveInteger"
            | "negativeInteger"
            | "positiveInteger"
            | "unsignedInt"
            | "unsignedLong"
            | "unsignedShort"
            | "unsignedByte"
    )
}

/// One record per `results.bindings` entry, each value run through `decoder`.
pub(super) fn bindings_to_records(
    results: &Value,
    decoder: &dyn ValueDecoder,
) -> Result<Value, NormalizeError> {
    let bindings = results
        .pointer("/results/bindings")
        .and_then(Value::as_array)
        .ok_or(NormalizeError::InvalidSparqlShape)?;

    let records = bindings
        .iter()
        .map(|binding| {
            let vars = binding.as_object().ok_or(NormalizeError::InvalidSparqlShape)?;
            let record: Map<String, Value> = vars
                .iter()
                .map(|(name, typed)| (name.clone(), decoder.decode(typed)))
                .collect();
            Ok(Value::Object(record))
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    Ok(Value::Array(records))
}
