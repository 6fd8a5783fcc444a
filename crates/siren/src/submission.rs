//! Turning an action plus user input into request parts.
//!
//! This is the pure half of submitting an action: it decides the method,
//! target, content type and encoded payload. Sending the request belongs to
//! the caller.

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::model::Action;

/// Request parts for submitting an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Upper-cased HTTP method.
    pub method: String,
    pub href: String,
    /// Content type of `body`; `None` when there is no body.
    pub content_type: Option<String>,
    /// Urlencoded field pairs for methods without a body.
    pub query: Option<String>,
    pub body: Option<String>,
}

impl Submission {
    /// The target with `query` appended, if any.
    pub fn url(&self) -> String {
        match &self.query {
            Some(query) if self.href.contains('?') => format!("{}&{}", self.href, query),
            Some(query) => format!("{}?{}", self.href, query),
            None => self.href.clone(),
        }
    }
}

fn has_body(method: &str) -> bool {
    !matches!(method, "GET" | "HEAD" | "DELETE")
}

fn is_json(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

impl Action {
    /// Builds the request parts for this action.
    ///
    /// Every named field contributes one pair, in field order. A supplied
    /// value replaces the field's current value; names that match no field
    /// are ignored.
    pub fn submission<K, V>(&self, values: &[(K, V)]) -> Submission
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let supplied = |name: &str| {
            values
                .iter()
                .find(|(k, _)| k.as_ref() == name)
                .map(|(_, v)| v.as_ref())
        };

        let method = self.method.to_ascii_uppercase();
        let named = self.fields.iter().filter(|f| !f.name.is_empty());

        if has_body(&method) && is_json(&self.media_type) {
            let mut object = Map::new();
            for field in named {
                let value = match supplied(&field.name) {
                    Some(v) => Value::String(v.to_string()),
                    None => field.value.clone(),
                };
                object.insert(field.name.clone(), value);
            }
            return Submission {
                method,
                href: self.href.clone(),
                content_type: Some(self.media_type.clone()),
                query: None,
                body: Some(Value::Object(object).to_string()),
            };
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut pairs = 0;
        for field in named {
            let value = supplied(&field.name)
                .map(str::to_string)
                .unwrap_or_else(|| field.value_text());
            serializer.append_pair(&field.name, &value);
            pairs += 1;
        }
        let encoded = serializer.finish();

        if has_body(&method) {
            Submission {
                method,
                href: self.href.clone(),
                content_type: Some(self.media_type.clone()),
                query: None,
                body: Some(encoded),
            }
        } else {
            Submission {
                method,
                href: self.href.clone(),
                content_type: None,
                query: (pairs > 0).then_some(encoded),
                body: None,
            }
        }
    }
}
