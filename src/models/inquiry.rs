use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::models::default_on_null;

/// Caller's inquiry. Every field is optional on the wire, missing or `null`,
/// so that an incomplete request reaches validation instead of being
/// rejected by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryRequest {
    #[serde(deserialize_with = "default_on_null")]
    pub transaction_id: String,
    pub transaction_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "default_on_null")]
    pub channel: String,
    #[serde(deserialize_with = "default_on_null")]
    pub location_code: String,
    #[serde(deserialize_with = "default_on_null")]
    pub bank_code: String,
    #[serde(deserialize_with = "default_on_null")]
    pub bank_account_number: String,
    #[serde(deserialize_with = "default_on_null")]
    pub amount: Decimal,
    #[serde(deserialize_with = "default_on_null")]
    pub reference1: String,
    #[serde(deserialize_with = "default_on_null")]
    pub reference2: String,
    #[serde(deserialize_with = "default_on_null")]
    pub first_name: String,
    #[serde(deserialize_with = "default_on_null")]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResult {
    pub reference_no_1: String,
    pub reference_no_2: String,
    pub amount: Decimal,
    pub transaction_id: String,
    pub reason_code: String,
    pub reason_desc: String,
    //Only set on approval
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub account_name: Option<String>,
}

impl InquiryResult {
    /// Result carrying only a reason, with empty pass-through fields.
    pub fn with_reason(reason_code: &str, reason_desc: &str) -> Self {
        Self {
            reason_code: reason_code.to_string(),
            reason_desc: reason_desc.to_string(),
            ..Default::default()
        }
    }
}
