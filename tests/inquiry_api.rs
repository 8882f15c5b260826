use std::sync::Arc;
use std::time::Duration;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bank_inquiry::controllers::server::app;
use bank_inquiry::repositories::bank_proxy_repository::BankProxyRepository;
use bank_inquiry::services::inquiry_service::InquiryService;
use bank_inquiry::services::register_service::ServiceRegister;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(bank: &MockServer) -> Router {
    let repo = BankProxyRepository::new(format!("{}/transfer", bank.uri()), Duration::from_secs(5))
        .unwrap();
    app(ServiceRegister::new(InquiryService::new(Arc::new(repo))))
}

fn inquiry_body() -> Value {
    json!({
        "transactionId": "TX-42",
        "transactionTime": "2024-05-01T10:00:00Z",
        "channel": "ATM",
        "locationCode": "BKK01",
        "bankCode": "014",
        "bankAccountNumber": "1234567890",
        "amount": "250.00",
        "reference1": "R1",
        "reference2": "R2",
        "firstName": "Malee",
        "lastName": "Suk"
    })
}

async fn post_inquiry(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/inquiry")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_responds_ok() {
    let bank = MockServer::start().await;
    let response = app_for(&bank)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn approved_inquiry_round_trips_through_the_bank() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "referenceCode1": "REF1",
            "referenceCode2": "REF2",
            "balance": "250.00",
            "bankTransactionID": "BTX-1",
            "responseCode": "approved",
            "description": "Malee Suk"
        })))
        .expect(1)
        .mount(&bank)
        .await;

    let (status, body) = post_inquiry(app_for(&bank), inquiry_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reasonCode"], "200");
    assert_eq!(body["reasonDesc"], "Malee Suk");
    assert_eq!(body["accountName"], "Malee Suk");
    assert_eq!(body["referenceNo1"], "REF1");
    assert_eq!(body["referenceNo2"], "REF2");
    assert_eq!(body["transactionId"], "BTX-1");
}

#[tokio::test]
async fn incomplete_inquiry_is_rejected_without_calling_the_bank() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&bank)
        .await;

    let mut request = inquiry_body();
    request.as_object_mut().unwrap().remove("bankCode");
    let (status, body) = post_inquiry(app_for(&bank), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reasonCode"], "500");
    assert_eq!(body["reasonDesc"], "General Invalid Data");
    assert_eq!(body["transactionId"], "");
    assert!(body.get("accountName").is_none());
}

#[tokio::test]
async fn bank_timeout_fault_becomes_503() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "faultString": "Connection timed out"
        })))
        .mount(&bank)
        .await;

    let (_, body) = post_inquiry(app_for(&bank), inquiry_body()).await;

    assert_eq!(body["reasonCode"], "503");
    assert_eq!(body["reasonDesc"], "Error timeout");
}

#[tokio::test]
async fn unreachable_bank_becomes_504() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let repo = BankProxyRepository::new(
        format!("http://127.0.0.1:{}/transfer", port),
        Duration::from_secs(5),
    )
    .unwrap();
    let app = app(ServiceRegister::new(InquiryService::new(Arc::new(repo))));

    let (_, body) = post_inquiry(app, inquiry_body()).await;

    assert_eq!(body["reasonCode"], "504");
    assert_eq!(body["reasonDesc"], "Internal Application Error");
}

#[tokio::test]
async fn split_error_description_reaches_the_caller() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "referenceCode1": "REF1",
            "balance": 0,
            "responseCode": "Transaction_Error",
            "description": "E:51:Insufficient funds"
        })))
        .mount(&bank)
        .await;

    let (_, body) = post_inquiry(app_for(&bank), inquiry_body()).await;

    assert_eq!(body["reasonCode"], "51");
    assert_eq!(body["reasonDesc"], "Insufficient funds");
    assert_eq!(body["referenceNo1"], "REF1");
}

#[tokio::test]
async fn null_required_fields_are_invalid_data() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&bank)
        .await;

    for field in ["channel", "amount", "transactionId", "transactionTime"] {
        let mut request = inquiry_body();
        request[field] = Value::Null;
        let (status, body) = post_inquiry(app_for(&bank), request).await;

        assert_eq!(status, StatusCode::OK, "{}", field);
        assert_eq!(body["reasonCode"], "500", "{}", field);
        assert_eq!(body["reasonDesc"], "General Invalid Data", "{}", field);
    }
}

#[tokio::test]
async fn null_pass_through_from_bank_still_approves() {
    let bank = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "referenceCode1": null,
            "referenceCode2": null,
            "balance": null,
            "bankTransactionID": null,
            "responseCode": "approved",
            "description": "Account OK"
        })))
        .mount(&bank)
        .await;

    let (_, body) = post_inquiry(app_for(&bank), inquiry_body()).await;

    assert_eq!(body["reasonCode"], "200");
    assert_eq!(body["reasonDesc"], "Account OK");
    assert_eq!(body["referenceNo1"], "");
    assert_eq!(body["transactionId"], "");
}
