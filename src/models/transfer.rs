use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::enums::response_code::ResponseCode;
use crate::models::default_on_null;
use crate::models::inquiry::InquiryRequest;

/// Payload submitted to the bank transfer gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    #[serde(rename = "tranDateTime")]
    pub transaction_time: Option<DateTime<Utc>>,
    pub channel: String,
    #[serde(rename = "bankCode")]
    pub bank_code: String,
    #[serde(rename = "bankNumber")]
    pub bank_account_number: String,
    pub amount: Decimal,
    pub reference1: String,
    pub reference2: String,
}

impl From<&InquiryRequest> for TransferRequest {
    fn from(request: &InquiryRequest) -> Self {
        Self {
            transaction_id: request.transaction_id.clone(),
            transaction_time: request.transaction_time,
            channel: request.channel.clone(),
            bank_code: request.bank_code.clone(),
            bank_account_number: request.bank_account_number.clone(),
            amount: request.amount,
            reference1: request.reference1.clone(),
            reference2: request.reference2.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "referenceCode1", default, deserialize_with = "default_on_null")]
    pub reference_code_1: String,
    #[serde(rename = "referenceCode2", default, deserialize_with = "default_on_null")]
    pub reference_code_2: String,
    #[serde(default, deserialize_with = "default_on_null")]
    pub balance: Decimal,
    #[serde(rename = "bankTransactionID", default, deserialize_with = "default_on_null")]
    pub bank_transaction_id: String,
    #[serde(rename = "responseCode")]
    pub response_code: ResponseCode,
    //Colon delimited, e.g. "100:101:Bad field"
    #[serde(default)]
    pub description: Option<String>,
}

/// Fault body the bank proxy sends alongside a 5xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct BankFault {
    #[serde(rename = "faultCode")]
    pub fault_code: Option<String>,
    #[serde(rename = "faultString")]
    pub fault_string: Option<String>,
}
