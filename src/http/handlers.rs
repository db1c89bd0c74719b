//! Request Handlers
//!
//! Each handler adapts one HTTP endpoint onto a single [`Store`] operation.
//! Request bodies are fully read and parsed before the store lock is taken,
//! so a slow client never holds up other requests.
//!
//! | Method   | Path          | Store call        |
//! |----------|---------------|-------------------|
//! | `POST`   | `/data`       | [`Store::upsert`]   |
//! | `GET`    | `/data/<key>` | [`Store::get`]      |
//! | `DELETE` | `/data/<key>` | [`Store::delete`]   |
//! | `GET`    | `/stats`      | [`Store::snapshot`] |

use crate::http::ApiError;
use crate::storage::Store;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use bytes::Bytes;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Path prefix in front of every key.
pub const KEY_PREFIX: &str = "/data/";

/// Extracts the key from a request path.
///
/// The key is everything after [`KEY_PREFIX`], taken verbatim. Percent
/// escapes are not decoded, so `/data/a%20b` addresses the key `a%20b`.
pub fn key_from_path(path: &str) -> &str {
    path.strip_prefix(KEY_PREFIX).unwrap_or_default()
}

/// Reads the first JSON value in `body` as a flat string map.
///
/// Bytes after that value are ignored, and a top-level `null` is an empty
/// map.
fn parse_pairs(body: &[u8]) -> serde_json::Result<HashMap<String, String>> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let pairs = Option::<HashMap<String, String>>::deserialize(&mut de)?;
    Ok(pairs.unwrap_or_default())
}

/// `POST /data`: merges a JSON object of string pairs into the store.
pub async fn upsert(
    State(store): State<Arc<Store>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let pairs = parse_pairs(&body).map_err(|e| {
        debug!(error = %e, "Rejected malformed upsert body");
        ApiError::from(e)
    })?;

    let keys = pairs.len();
    store.upsert(pairs);
    trace!(keys, "Upsert applied");

    Ok(StatusCode::OK)
}

/// `GET /data/<key>`: returns the raw value.
pub async fn get_value(State(store): State<Arc<Store>>, uri: Uri) -> Result<String, ApiError> {
    store
        .get(key_from_path(uri.path()))
        .ok_or(ApiError::KeyNotFound)
}

/// `DELETE /data/<key>`: removes the key. Missing keys are not an error.
pub async fn delete_value(State(store): State<Arc<Store>>, uri: Uri) -> StatusCode {
    let key = key_from_path(uri.path());
    let existed = store.delete(key);
    trace!(key, existed, "Delete applied");
    StatusCode::OK
}

/// `GET /stats`: reports the write counter and the number of keys.
pub async fn stats(State(store): State<Arc<Store>>) -> String {
    format!("{}\n", store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_path() {
        assert_eq!(key_from_path("/data/name"), "name");
        assert_eq!(key_from_path("/data/"), "");
        assert_eq!(key_from_path("/data/a/b"), "a/b");
    }

    #[test]
    fn test_key_from_path_keeps_escapes() {
        assert_eq!(key_from_path("/data/hello%20world"), "hello%20world");
    }

    #[tokio::test]
    async fn test_upsert_rejects_bad_body_before_touching_store() {
        let store = Arc::new(Store::new());

        let result = upsert(State(Arc::clone(&store)), Bytes::from_static(b"not-json")).await;

        assert!(matches!(result, Err(ApiError::MalformedRequestBody(_))));
        assert_eq!(store.snapshot().write_count, 0);
    }

    #[tokio::test]
    async fn test_upsert_rejects_non_string_values() {
        let store = Arc::new(Store::new());

        let result = upsert(State(Arc::clone(&store)), Bytes::from_static(b"{\"a\": 1}")).await;

        assert!(matches!(result, Err(ApiError::MalformedRequestBody(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(parse_pairs(b"null").unwrap(), HashMap::new());
        assert_eq!(
            parse_pairs(b"{\"a\":\"1\"} xx").unwrap(),
            HashMap::from([("a".to_string(), "1".to_string())])
        );
        assert!(parse_pairs(b"").is_err());
        assert!(parse_pairs(b"   ").is_err());
        assert!(parse_pairs(b"[\"a\"]").is_err());
    }

    #[tokio::test]
    async fn test_upsert_duplicate_keys_last_wins() {
        let store = Arc::new(Store::new());

        let body = Bytes::from_static(b"{\"k\":\"first\",\"k\":\"second\"}");
        let status = upsert(State(Arc::clone(&store)), body).await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.get("k").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_stats_format() {
        let store = Arc::new(Store::new());
        store.upsert(HashMap::from([("a".to_string(), "1".to_string())]));

        assert_eq!(stats(State(store)).await, "Requests: 1, Data size: 1\n");
    }
}
