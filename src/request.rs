//! Caller payload: the form body (POST) and query string (GET) of a request.
//!
//! Both halves are kept as insertion-ordered JSON maps so programmatic callers
//! can hand over structured values directly while browser clients go through
//! [`parse_form`].

use serde_json::{Map, Value};

use crate::text::unslash;

/// Form fields decoded from one body or query string.
pub const MAX_FORM_FIELDS: usize = 1000;

/// POST and GET halves of a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestPayload {
    pub post: Map<String, Value>,
    pub query: Map<String, Value>,
}

impl RequestPayload {
    /// Build from a url-encoded form body and a query string.
    #[must_use]
    pub fn from_parts(body: &str, query: &str) -> Self {
        Self {
            post: parse_form(body),
            query: parse_form(query),
        }
    }

    /// Build from a query string alone, as sent by bookmarklet-style clients.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            post: Map::new(),
            query: parse_form(query),
        }
    }

    /// Add a POST field.
    #[must_use]
    pub fn with_post(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.post.insert(key.into(), value.into());
        self
    }

    /// Add a GET field.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Whether the caller submitted a form body at all.
    #[must_use]
    pub fn has_post(&self) -> bool {
        !self.post.is_empty()
    }

    /// A scalar field with POST-over-GET precedence, unslashed.
    ///
    /// Fields that are absent or "empty" in either half fall through to the
    /// other; containers never count as scalars.
    #[must_use]
    pub fn scalar(&self, key: &str) -> Option<String> {
        let value = [&self.post, &self.query]
            .into_iter()
            .filter_map(|half| half.get(key))
            .find(|v| is_filled(v))?;

        match value {
            Value::String(s) => Some(unslash(s)),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(true) => Some("1".to_string()),
            _ => None,
        }
    }

    /// A structured POST field, if filled.
    #[must_use]
    pub fn structured(&self, key: &str) -> Option<&Value> {
        self.post.get(key).filter(|v| is_filled(v))
    }
}

/// Legacy emptiness rule.
///
/// Null, `false`, zero, `""`, `"0"` and empty containers are all "not filled".
///
/// # Examples
///
/// ```
/// use press_scan::request::is_filled;
/// use serde_json::json;
///
/// assert!(is_filled(&json!("x")));
/// assert!(!is_filled(&json!("0")));
/// assert!(!is_filled(&json!([])));
/// ```
#[must_use]
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Remove backslash escaping from every string inside a value.
#[must_use]
pub fn unslash_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(unslash(s)),
        Value::Array(items) => Value::Array(items.iter().map(unslash_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), unslash_value(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Decode `application/x-www-form-urlencoded` input with bracket notation.
///
/// - `k=v` sets a string (last one wins)
/// - `k[]=v` appends to a list
/// - `k[name]=v` sets a keyed entry
///
/// Only one bracket level is understood; `k[a][b]` is treated as `k[a]`.
/// Input past [`MAX_FORM_FIELDS`] pairs is ignored.
///
/// # Examples
///
/// ```
/// use press_scan::request::parse_form;
/// use serde_json::json;
///
/// let form = parse_form("u=https%3A%2F%2Fexample.com&_img[]=a.jpg&_meta[og:title]=Hi");
/// assert_eq!(form["u"], json!("https://example.com"));
/// assert_eq!(form["_img"], json!(["a.jpg"]));
/// assert_eq!(form["_meta"], json!({"og:title": "Hi"}));
/// ```
#[must_use]
pub fn parse_form(input: &str) -> Map<String, Value> {
    let input = input.strip_prefix('?').unwrap_or(input);
    let mut form = Map::new();

    for (raw_key, value) in url::form_urlencoded::parse(input.as_bytes()).take(MAX_FORM_FIELDS) {
        let value = Value::String(value.into_owned());

        match split_bracket_key(&raw_key) {
            Some((base, "")) => {
                let slot = form
                    .entry(base.to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Value::Array(items) = slot {
                    items.push(value);
                } else {
                    *slot = Value::Array(vec![value]);
                }
            }
            Some((base, name)) => {
                let slot = form
                    .entry(base.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                match slot {
                    Value::Object(map) => {
                        map.insert(name.to_string(), value);
                    }
                    Value::Array(items) => items.push(value),
                    _ => {
                        let mut map = Map::new();
                        map.insert(name.to_string(), value);
                        *slot = Value::Object(map);
                    }
                }
            }
            None => {
                form.insert(raw_key.into_owned(), value);
            }
        }
    }

    form
}

/// `base[name]...` into `(base, name)`; plain keys yield `None`.
fn split_bracket_key(key: &str) -> Option<(&str, &str)> {
    let open = key.find('[')?;
    let close = open + key[open..].find(']')?;
    let base = &key[..open];
    if base.is_empty() {
        return None;
    }
    Some((base, &key[open + 1..close]))
}
