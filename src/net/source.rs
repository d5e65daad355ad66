//! Tag source: where raw tag strings come from.
//!
//! The backend is an external collaborator; the viewer only needs a flat
//! sequence of tag strings per poll. [`TagSource`] is a trait so tests can
//! inject fake sources; [`HttpTagSource`] is the real one (blocking).

use log::debug;
use serde_json::Value;
use url::Url;

/// Error during a tag fetch.
///
/// `Network` and `MalformedResponse` are backend problems; `EmptyData` means
/// the query succeeded but yielded zero usable tags. All three land in the
/// same user-facing fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Network(String),
    MalformedResponse(String),
    EmptyData,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
            FetchError::EmptyData => write!(f, "no usable tags"),
        }
    }
}

/// A queryable source of raw tag strings.
pub trait TagSource {
    fn fetch_tags(&self) -> Result<Vec<String>, FetchError>;
}

/// Fetches tags from an HTTP endpoint returning JSON (blocking).
pub struct HttpTagSource {
    endpoint: String,
}

impl HttpTagSource {
    /// Validate and store the endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        Url::parse(endpoint)
            .map_err(|e| FetchError::Network(format!("invalid endpoint URL: {}", e)))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
        })
    }
}

impl TagSource for HttpTagSource {
    fn fetch_tags(&self) -> Result<Vec<String>, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tagcloud/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::Network(format!("client error: {}", e)))?;

        let response = client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| FetchError::Network(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {}", status.as_u16())));
        }

        let body: Value = response
            .json()
            .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        flatten_tags(&body)
    }
}

/// Flatten a JSON body into raw tag strings.
///
/// Two collaborator shapes are accepted, per row: `{"tag": "..."}` or a
/// denormalized feedback row `{"tags": ["...", ...]}`. Individual entries
/// that are null, non-string, or otherwise unusable are silently dropped;
/// only a non-array top level is a hard `MalformedResponse`.
pub fn flatten_tags(body: &Value) -> Result<Vec<String>, FetchError> {
    let rows = body
        .as_array()
        .ok_or_else(|| FetchError::MalformedResponse("expected a JSON array".to_string()))?;

    let mut tags = Vec::new();
    for row in rows {
        match row {
            Value::Object(fields) => {
                if let Some(Value::String(tag)) = fields.get("tag") {
                    tags.push(tag.clone());
                } else if let Some(Value::Array(list)) = fields.get("tags") {
                    for entry in list {
                        match entry {
                            Value::String(tag) => tags.push(tag.clone()),
                            other => debug!("dropping non-string tag entry: {}", other),
                        }
                    }
                } else {
                    debug!("dropping row without tag field: {}", row);
                }
            }
            other => debug!("dropping non-object row: {}", other),
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_tag_rows() {
        let body = json!([{"tag": "Fun"}, {"tag": "Hard"}]);
        let tags = flatten_tags(&body).unwrap();
        assert_eq!(tags, vec!["Fun", "Hard"]);
    }

    #[test]
    fn flattens_denormalized_rows() {
        let body = json!([
            {"name": "a", "tags": ["Fun", "Hard"]},
            {"name": "b", "tags": ["Fun"]},
        ]);
        let tags = flatten_tags(&body).unwrap();
        assert_eq!(tags, vec!["Fun", "Hard", "Fun"]);
    }

    #[test]
    fn drops_malformed_entries_silently() {
        let body = json!([
            {"tag": "Good"},
            {"tag": 42},
            {"tags": ["Ok", null, 7]},
            "not an object",
            {"unrelated": true},
        ]);
        let tags = flatten_tags(&body).unwrap();
        assert_eq!(tags, vec!["Good", "Ok"]);
    }

    #[test]
    fn non_array_body_is_malformed() {
        let body = json!({"tag": "Fun"});
        assert!(matches!(
            flatten_tags(&body),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(HttpTagSource::new("not a url").is_err());
        assert!(HttpTagSource::new("http://localhost:3000/tags").is_ok());
    }
}
