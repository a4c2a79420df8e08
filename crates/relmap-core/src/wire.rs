//! Request/response shapes of the relationship-extraction service (`POST /generate-graph`).

use crate::model::Relationship;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The extraction model offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "80Bmodel")]
    Model80B,
    #[serde(rename = "7Bmodel")]
    Model7B,
    #[serde(rename = "DeepSeek")]
    DeepSeek,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [Self::Model80B, Self::Model7B, Self::DeepSeek];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model80B => "80Bmodel",
            Self::Model7B => "7Bmodel",
            Self::DeepSeek => "DeepSeek",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownModel {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub code: String,
    pub model: ModelChoice,
}

impl GenerateRequest {
    pub fn new(code: impl Into<String>, model: ModelChoice) -> Self {
        Self {
            code: code.into(),
            model,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub summary: String,
}

/// Body of a failed request (`500 {"error": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    pub error: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceReply {
    Failure(ServiceError),
    Success(GenerateResponse),
}

/// Parses a service reply body; an `{"error": ...}` body becomes [`Error::Service`].
pub fn parse_response(body: &str) -> Result<GenerateResponse> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(Error::Service {
            message: format!("expected a JSON object, got `{value}`"),
        });
    }
    match serde_json::from_value::<ServiceReply>(value)? {
        ServiceReply::Failure(ServiceError { error }) => Err(Error::Service { message: error }),
        ServiceReply::Success(response) => Ok(response),
    }
}
