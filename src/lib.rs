pub mod config;
pub mod controllers;
pub mod enums;
pub mod models;
pub mod repositories;
pub mod services;
