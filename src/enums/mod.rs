pub mod response_code;
