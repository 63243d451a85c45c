use serde::Serialize;
use serde_json::Value;

/// A filter, ordering or limit applied when listing documents.
///
/// Queries travel as JSON objects in repeated `queries[i]` url parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Attribute equals any of the values.
    Equal(String, Vec<Value>),
    /// Full-text search on an indexed attribute.
    Search(String, String),
    OrderDesc(String),
    Limit(u32),
}

#[derive(Serialize)]
struct WireQuery<'a> {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Query {
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::Equal(attribute.to_string(), vec![value.into()])
    }

    pub fn search(attribute: &str, value: &str) -> Self {
        Self::Search(attribute.to_string(), value.to_string())
    }

    pub fn order_desc(attribute: &str) -> Self {
        Self::OrderDesc(attribute.to_string())
    }

    pub fn limit(limit: u32) -> Self {
        Self::Limit(limit)
    }

    fn to_wire(&self) -> WireQuery<'_> {
        match self {
            Self::Equal(attribute, values) => WireQuery {
                method: "equal",
                attribute: Some(attribute),
                values: values.clone(),
            },
            Self::Search(attribute, value) => WireQuery {
                method: "search",
                attribute: Some(attribute),
                values: vec![Value::from(value.as_str())],
            },
            Self::OrderDesc(attribute) => WireQuery {
                method: "orderDesc",
                attribute: Some(attribute),
                values: Vec::new(),
            },
            Self::Limit(limit) => WireQuery {
                method: "limit",
                attribute: None,
                values: vec![Value::from(*limit)],
            },
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of strings and json values always serializes
        serde_json::to_string(&self.to_wire()).unwrap_or_default()
    }
}

/// Flatten queries into url parameters, `queries[0]=...&queries[1]=...`.
pub fn to_url_params(queries: &[Query]) -> Vec<(String, String)> {
    queries
        .iter()
        .enumerate()
        .map(|(i, query)| (format!("queries[{i}]"), query.to_json()))
        .collect()
}
