use axum::extract::State;
use axum::{Json, Router, routing::post};

use crate::models::inquiry::{InquiryRequest, InquiryResult};
use crate::services::register_service::ServiceRegister;

pub fn router() -> Router<ServiceRegister> {
    Router::new().route("/inquiry", post(post_inquiry))
}

// Always 200, the outcome lives in the reason code
async fn post_inquiry(
    State(services): State<ServiceRegister>,
    Json(request): Json<InquiryRequest>,
) -> Json<InquiryResult> {
    Json(services.inquiry_service.inquiry(&request).await)
}
