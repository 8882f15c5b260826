use std::sync::Arc;
use std::time::Duration;
use bank_inquiry::config::AppConfig;
use bank_inquiry::controllers;
use bank_inquiry::repositories::bank_proxy_repository::BankProxyRepository;
use bank_inquiry::services::inquiry_service::InquiryService;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Initialize environment
    let app_config = get_app_config();

    //Instantiate service
    let bank_proxy = BankProxyRepository::new(
        app_config.bank_proxy_url.clone(),
        Duration::from_secs(app_config.bank_proxy_timeout_secs),
    )?;
    let inquiry_service = InquiryService::new(Arc::new(bank_proxy));

    controllers::server::serve(app_config, inquiry_service).await
}

pub fn get_app_config() -> Arc<AppConfig> {
    dotenv::dotenv().ok();
    Arc::new(AppConfig::parse())
}
