pub mod health;
pub mod inquiry;
pub mod server;
