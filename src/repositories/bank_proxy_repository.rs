use std::error::Error as StdError;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::warn;
use crate::models::transfer::{BankFault, GatewayResponse, TransferRequest};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayFault {
    /// Transport or server level failure. Only the message text is inspected downstream.
    #[error("bank gateway infrastructure fault: {}", .message.as_deref().unwrap_or("<no message>"))]
    Infrastructure { message: Option<String> },

    #[error("bank gateway fault: {0}")]
    Other(String),
}

/// Submits a transfer request to the bank and waits for its answer.
///
/// `Ok(None)` means the bank answered without a response object.
#[async_trait]
pub trait BankGateway: Send + Sync {
    async fn request_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<Option<GatewayResponse>, GatewayFault>;
}

#[derive(Clone)]
pub struct BankProxyRepository {
    client: reqwest::Client,
    bank_proxy_url: String,
}

impl BankProxyRepository {
    pub fn new(bank_proxy_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            bank_proxy_url,
        })
    }
}

#[async_trait]
impl BankGateway for BankProxyRepository {
    async fn request_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<Option<GatewayResponse>, GatewayFault> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let res = self.client
            .post(&self.bank_proxy_url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("{}", e);
                transport_fault(&e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| transport_fault(&e))?;

        if status.is_server_error() {
            return Err(GatewayFault::Infrastructure {
                message: server_fault_message(&body),
            });
        }
        if !status.is_success() {
            return Err(GatewayFault::Other(format!(
                "bank proxy answered {}: {}",
                status, body
            )));
        }
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<GatewayResponse>>(&body)
            .map_err(|e| GatewayFault::Other(format!("undecodable bank response: {}", e)))
    }
}

fn transport_fault(err: &reqwest::Error) -> GatewayFault {
    let chain = error_chain(err);
    if err.is_timeout() {
        GatewayFault::Infrastructure {
            message: Some(format!("Connection timed out: {}", chain)),
        }
    } else if err.is_connect() || err.is_request() || err.is_body() {
        GatewayFault::Infrastructure {
            message: Some(chain),
        }
    } else {
        GatewayFault::Other(chain)
    }
}

fn server_fault_message(body: &str) -> Option<String> {
    let fault_string = serde_json::from_str::<BankFault>(body)
        .ok()
        .and_then(|fault| fault.fault_string);
    match fault_string {
        Some(text) => Some(text),
        None if body.trim().is_empty() => None,
        None => Some(body.to_string()),
    }
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
