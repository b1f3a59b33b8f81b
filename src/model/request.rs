use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// A value that may be attached to a query string when present.
///
/// `is_present` is the "supplied and well-typed" predicate: an optional query
/// parameter whose value fails it is left out of the query entirely.
pub trait QueryValue {
    /// Whether the value should be emitted
    fn is_present(&self) -> bool;
    /// String form of the value as it appears on the wire
    fn to_query_string(&self) -> String;
}

macro_rules! impl_numeric_query_value {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn is_present(&self) -> bool {
                    true
                }

                fn to_query_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_query_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_float_query_value {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn is_present(&self) -> bool {
                    self.is_finite()
                }

                fn to_query_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// NaN and infinities have no numeric form the API accepts
impl_float_query_value!(f32, f64);

impl QueryValue for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn to_query_string(&self) -> String {
        (*self).to_string()
    }
}

impl QueryValue for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn to_query_string(&self) -> String {
        self.clone()
    }
}

/// Flat string-to-string query map, ordered by key so that identical
/// arguments always produce identical maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty query map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value unconditionally, stringified with `Display`
    pub fn insert(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Inserts a value only when it is supplied and passes `QueryValue::is_present`
    pub fn insert_opt<V: QueryValue>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value.filter(|v| v.is_present()) {
            self.0.insert(key.to_string(), v.to_query_string());
        }
        self
    }

    /// Builder-style `insert`
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style `insert_opt`
    #[must_use]
    pub fn with_opt<V: QueryValue>(mut self, key: &str, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parameter was kept
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One REST call described as plain data: verb, relative path, optional
/// query map and optional JSON body. Built per call and handed to the
/// transport by value.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the API base URL, e.g. `website/42/visitors/count`
    pub path: String,
    /// Query parameters, `None` when the operation takes none
    pub query: Option<QueryParams>,
    /// JSON body, `None` when the operation sends none
    pub body: Option<Value>,
}

impl RestRequest {
    /// Creates a request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Attaches a query map
    #[must_use]
    pub fn with_query(mut self, query: Option<QueryParams>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body
    #[must_use]
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}
