use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures_util::FutureExt;
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};
use crate::enums::response_code::ResponseCode;
use crate::models::inquiry::{InquiryRequest, InquiryResult};
use crate::models::transfer::{GatewayResponse, TransferRequest};
use crate::repositories::bank_proxy_repository::{BankGateway, GatewayFault};

/// Reason code and description used when the bank gives nothing better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub code: &'static str,
    pub desc: &'static str,
}

pub const APPROVED_CODE: &str = "200";
pub const BAD_REQUEST_DATA: Reason = Reason { code: "400", desc: "General Invalid Data" };
pub const INVALID_REQUEST: Reason = Reason { code: "500", desc: "General Invalid Data" };
pub const TRANSACTION_ERROR: Reason = Reason { code: "500", desc: "General Transaction Error" };
pub const UNKNOWN_RESPONSE: Reason = Reason { code: "501", desc: "General Invalid Data" };
pub const TIMEOUT: Reason = Reason { code: "503", desc: "Error timeout" };
pub const INTERNAL_ERROR: Reason = Reason { code: "504", desc: "Internal Application Error" };

//Substrings of an infrastructure fault message that mean the bank timed out
const TIMEOUT_MARKERS: [&str; 2] = ["SocketTimeoutException", "Connection timed out"];

#[derive(Clone)]
pub struct InquiryService {
    bank_gateway: Arc<dyn BankGateway>,
}

impl InquiryService {
    pub fn new(bank_gateway: Arc<dyn BankGateway>) -> Self {
        Self { bank_gateway }
    }

    /// Validates the request, asks the bank and folds every outcome into an
    /// `InquiryResult`. Never fails: errors are reported through the reason code.
    pub async fn inquiry(&self, request: &InquiryRequest) -> InquiryResult {
        if !validate(request) {
            warn!(transaction_id = %request.transaction_id, "Rejecting inquiry with invalid data");
            return reason_only(INVALID_REQUEST);
        }

        info!(transaction_id = %request.transaction_id, "Calling bank web service...");
        let transfer = TransferRequest::from(request);
        let call = AssertUnwindSafe(self.bank_gateway.request_transfer(&transfer)).catch_unwind();

        let result = match call.await {
            Ok(Ok(Some(response))) => classify_response(response),
            Ok(Ok(None)) => {
                error!("Bank response is null");
                reason_only(INTERNAL_ERROR)
            }
            Ok(Err(GatewayFault::Infrastructure { message })) => {
                error!(fault = ?message, "Bank gateway infrastructure fault");
                reason_only(classify_infrastructure_fault(message.as_deref()))
            }
            Ok(Err(GatewayFault::Other(message))) => {
                error!(fault = %message, "Unexpected bank gateway fault");
                reason_only(INTERNAL_ERROR)
            }
            Err(_) => {
                error!("Bank gateway call panicked");
                reason_only(INTERNAL_ERROR)
            }
        };

        debug!(
            transaction_id = %request.transaction_id,
            reason_code = %result.reason_code,
            "Inquiry resolved"
        );
        result
    }
}

/// True when every required field has text, the time is set and the amount is positive.
pub fn validate(request: &InquiryRequest) -> bool {
    has_text(&request.transaction_id)
        && request.transaction_time.is_some()
        && has_text(&request.channel)
        && has_text(&request.bank_code)
        && has_text(&request.bank_account_number)
        && request.amount > Decimal::ZERO
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

fn reason_only(reason: Reason) -> InquiryResult {
    InquiryResult::with_reason(reason.code, reason.desc)
}

/// Maps a bank response onto the outward result. Pass-through fields are
/// copied first and survive every branch.
pub fn classify_response(response: GatewayResponse) -> InquiryResult {
    let mut result = InquiryResult {
        reference_no_1: response.reference_code_1,
        reference_no_2: response.reference_code_2,
        amount: response.balance,
        transaction_id: response.bank_transaction_id,
        ..Default::default()
    };
    let description = response.description.as_deref();

    let (code, desc) = match response.response_code {
        ResponseCode::Approved => {
            let desc = description.unwrap_or_default().to_string();
            result.account_name = Some(desc.clone());
            (APPROVED_CODE.to_string(), desc)
        }
        ResponseCode::InvalidData => split_description(description, BAD_REQUEST_DATA),
        // A blank second segment falls back to "General Transaction Error", not "General Invalid Data"
        ResponseCode::TransactionError => split_description(description, TRANSACTION_ERROR),
        ResponseCode::Unknown => split_unknown_description(description, UNKNOWN_RESPONSE),
        ResponseCode::Unsupported(raw) => {
            error!("Unsupported Error Reason Code: {}", raw);
            owned(INTERNAL_ERROR)
        }
    };
    result.reason_code = code;
    result.reason_desc = desc;
    result
}

/// `a:code:desc[:...]` takes the second and third segments, `code:desc` takes
/// both (blank desc falls back), anything shorter keeps the fallback.
pub fn split_description(description: Option<&str>, fallback: Reason) -> (String, String) {
    let Some(description) = description else {
        return owned(fallback);
    };
    let segments: Vec<&str> = description.split(':').collect();
    match segments.as_slice() {
        [_, code, desc, ..] => (code.to_string(), desc.to_string()),
        [code, desc] => (code.to_string(), desc_or(desc, fallback)),
        _ => owned(fallback),
    }
}

/// `code:...:desc` takes the first and last segments for any count of two or more.
pub fn split_unknown_description(description: Option<&str>, fallback: Reason) -> (String, String) {
    let Some(description) = description else {
        return owned(fallback);
    };
    let segments: Vec<&str> = description.split(':').collect();
    match segments.as_slice() {
        [code, .., desc] => (code.to_string(), desc_or(desc, fallback)),
        _ => owned(fallback),
    }
}

pub fn classify_infrastructure_fault(message: Option<&str>) -> Reason {
    match message {
        Some(text) if TIMEOUT_MARKERS.iter().any(|marker| text.contains(marker)) => TIMEOUT,
        _ => INTERNAL_ERROR,
    }
}

fn desc_or(desc: &str, fallback: Reason) -> String {
    if desc.trim().is_empty() {
        fallback.desc.to_string()
    } else {
        desc.to_string()
    }
}

fn owned(reason: Reason) -> (String, String) {
    (reason.code.to_string(), reason.desc.to_string())
}
