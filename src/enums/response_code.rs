use std::fmt;
use serde::{Deserialize, Serialize};

/// Status tag carried by a bank gateway response.
///
/// Parsed case-insensitively; anything outside the known tags is kept
/// verbatim in `Unsupported` so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseCode {
    Approved,
    InvalidData,
    TransactionError,
    Unknown,
    Unsupported(String),
}

impl ResponseCode {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "approved" => ResponseCode::Approved,
            "invalid_data" => ResponseCode::InvalidData,
            "transaction_error" => ResponseCode::TransactionError,
            "unknown" => ResponseCode::Unknown,
            _ => ResponseCode::Unsupported(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResponseCode::Approved => "approved",
            ResponseCode::InvalidData => "invalid_data",
            ResponseCode::TransactionError => "transaction_error",
            ResponseCode::Unknown => "unknown",
            ResponseCode::Unsupported(raw) => raw,
        }
    }
}

impl From<String> for ResponseCode {
    fn from(raw: String) -> Self {
        ResponseCode::parse(&raw)
    }
}

impl From<ResponseCode> for String {
    fn from(code: ResponseCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
