//! JSON-RPC 2.0 envelopes and keyword parameters.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientResult, RemoteError};

pub const JSONRPC_VERSION: &str = "2.0";

/// Keyword arguments of one call. Mathesar methods take named parameters only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required argument.
    pub fn arg(mut self, name: &str, value: impl Serialize) -> ClientResult<Self> {
        self.0.insert(name.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Add an argument only when it is `Some`; `None` leaves the server default.
    pub fn opt<T: Serialize>(self, name: &str, value: Option<T>) -> ClientResult<Self> {
        match value {
            Some(value) => self.arg(name, value),
            None => Ok(self),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: &'a Map<String, Value>,
}

impl<'a> Request<'a> {
    pub(crate) fn new(id: u32, method: &'a str, params: &'a Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params: &params.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

/// Response envelope. Servers may omit `jsonrpc`; a body carrying none of
/// `jsonrpc`, `result` and `error` is not an envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

impl Response {
    pub(crate) fn is_envelope(&self) -> bool {
        self.jsonrpc.is_some() || self.result.is_some() || self.error.is_some()
    }

    pub(crate) fn into_result(self) -> Result<Value, RemoteError> {
        match self.error {
            Some(error) => Err(RemoteError::new(error.code, error.message)),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// A key that is present decodes to `Some`, even when its value is `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Deserializer for `Option<Option<T>>` fields marked
/// `#[serde(default, deserialize_with = "absent_or_null")]`: a missing key
/// stays `None`, an explicit `null` becomes `Some(None)`.
pub fn absent_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializer for required `Option<T>` fields marked
/// `#[serde(deserialize_with = "nullable")]`: `null` becomes `None`, and
/// without `default` a missing key is still an error.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Parameter names of `method` in call order.
pub fn signature(method: &str) -> Option<&'static [&'static str]> {
    crate::api::SIGNATURES
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, params)| *params)
}

pub(crate) fn decode<R: DeserializeOwned>(value: Value) -> ClientResult<R> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "absent_or_null")]
        description: Option<Option<String>>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Info {
        #[serde(deserialize_with = "nullable")]
        description: Option<String>,
    }

    #[test]
    fn test_nullable_key_must_be_present() {
        let null: Info = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(null.description, None);
        let set: Info = serde_json::from_value(json!({"description": "d"})).unwrap();
        assert_eq!(set.description.as_deref(), Some("d"));
        let err = serde_json::from_value::<Info>(json!({})).unwrap_err();
        assert!(err.to_string().contains("missing field `description`"));
    }

    #[test]
    fn test_params_skip_unset_optionals() {
        let params = Params::new()
            .arg("database_id", 1)
            .unwrap()
            .opt("password", None::<String>)
            .unwrap()
            .opt("login", Some(true))
            .unwrap();
        assert_eq!(
            Value::Object(params.into_map()),
            json!({"database_id": 1, "login": true})
        );
    }

    #[test]
    fn test_request_envelope() {
        let params = Params::new().arg("user_id", 7).unwrap();
        let request = serde_json::to_value(Request::new(42, "users.get", &params)).unwrap();
        assert_eq!(
            request,
            json!({"jsonrpc": "2.0", "id": 42, "method": "users.get", "params": {"user_id": 7}})
        );
    }

    #[test]
    fn test_response_envelope() {
        let ok: Response =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": [1, 2]})).unwrap();
        assert_eq!(ok.into_result().unwrap(), json!([1, 2]));

        let unit: Response = serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert_eq!(unit.into_result().unwrap(), Value::Null);

        let err: Response = serde_json::from_value(
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -30047, "message": "exists"}}),
        )
        .unwrap();
        let err = err.into_result().unwrap_err();
        assert_eq!(err, RemoteError::new(-30047, "exists"));

        let bare: Response =
            serde_json::from_value(json!({"error": {"code": -28009, "message": "not found"}}))
                .unwrap();
        assert!(bare.is_envelope());
        assert_eq!(bare.into_result().unwrap_err(), RemoteError::new(-28009, "not found"));

        let null: Response = serde_json::from_value(json!({"result": null})).unwrap();
        assert!(null.is_envelope());

        let other: Response = serde_json::from_value(json!({"detail": "nope"})).unwrap();
        assert!(!other.is_envelope());
    }

    #[test]
    fn test_absent_and_null_decode_differently() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"description": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"description": "x"})).unwrap();
        assert_eq!(absent.description, None);
        assert_eq!(null.description, Some(None));
        assert_eq!(set.description, Some(Some("x".into())));
    }

    #[test]
    fn test_signature_lookup() {
        assert_eq!(signature("roles.delete"), Some(&["role_oid", "database_id"][..]));
        assert_eq!(signature("users.list"), Some(&[][..]));
        assert_eq!(signature("no.such"), None);
    }
}
