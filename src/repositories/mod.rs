pub mod bank_proxy_repository;
