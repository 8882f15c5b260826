use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct AppConfig {
    //Bank transfer gateway endpoint
    #[clap(long, env)]
    pub bank_proxy_url: String,

    #[clap(long, env, default_value_t = 30)]
    pub bank_proxy_timeout_secs: u64,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub server_host: String,

    #[clap(long, env, default_value_t = 3000)]
    pub server_port: u16,
}
