/*
[INPUT]:  WEEX REST response bodies
[OUTPUT]: Typed response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the response envelope or public payloads change
*/

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Code WEEX returns for a successful call
pub const SUCCESS_CODE: &str = "00000";

/// Standard `{code, msg, data}` envelope wrapping every REST response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(rename = "requestTime", default)]
    pub request_time: Option<i64>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(code) => Ok(code),
        Value::Number(code) => Ok(code.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unexpected response code {other}"
        ))),
    }
}
