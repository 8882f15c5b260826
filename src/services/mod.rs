pub mod inquiry_service;
pub mod register_service;
